use super::*;

/// Tests closing a pending waiver with a claiming team.
///
/// Expected: Ok(1) with status claimed and the claiming team recorded
#[tokio::test]
async fn closes_pending_waiver() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let waiving = factory::team::create_team(db).await?;
    let claiming = factory::team::create_team(db).await?;
    let (_user, player) = factory::helpers::create_free_agent(db).await?;
    let waiver = factory::waiver::create_waiver(db, player.id, waiving.id).await?;

    let repo = WaiverRepository::new(db);
    let affected = repo
        .close_if_pending(waiver.id, WaiverStatus::Claimed, Some(claiming.id))
        .await?;

    assert_eq!(affected, 1);
    let stored = repo.find_by_id(waiver.id).await?.unwrap();
    assert_eq!(stored.status, WaiverStatus::Claimed);
    assert_eq!(stored.claimed_by_team_id, Some(claiming.id));

    Ok(())
}

/// Tests that an already processed waiver is not processed twice.
///
/// Expected: Ok(0) and the waiver keeps its cleared status
#[tokio::test]
async fn ignores_processed_waiver() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let waiving = factory::team::create_team(db).await?;
    let (_user, player) = factory::helpers::create_free_agent(db).await?;
    let waiver = factory::waiver::WaiverFactory::new(db, player.id, waiving.id)
        .status("cleared")
        .build()
        .await?;

    let repo = WaiverRepository::new(db);
    let affected = repo
        .close_if_pending(waiver.id, WaiverStatus::Claimed, Some(waiving.id))
        .await?;

    assert_eq!(affected, 0);
    let stored = repo.find_by_id(waiver.id).await?.unwrap();
    assert_eq!(stored.status, WaiverStatus::Cleared);
    assert_eq!(stored.claimed_by_team_id, None);

    Ok(())
}
