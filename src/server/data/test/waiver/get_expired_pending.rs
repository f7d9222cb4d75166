use super::*;

/// Tests selecting waivers ready for processing.
///
/// Verifies that only pending waivers past their deadline are returned,
/// while open and already processed waivers are skipped.
///
/// Expected: Ok with the single expired pending waiver
#[tokio::test]
async fn returns_only_expired_pending() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::team::create_team(db).await?;
    let (_a, open_player) = factory::helpers::create_free_agent(db).await?;
    let (_b, expired_player) = factory::helpers::create_free_agent(db).await?;
    let (_c, done_player) = factory::helpers::create_free_agent(db).await?;

    factory::waiver::create_waiver(db, open_player.id, team.id).await?;
    let expired = factory::waiver::WaiverFactory::new(db, expired_player.id, team.id)
        .deadline_in(Duration::minutes(-1))
        .build()
        .await?;
    factory::waiver::WaiverFactory::new(db, done_player.id, team.id)
        .deadline_in(Duration::minutes(-1))
        .status("claimed")
        .build()
        .await?;

    let repo = WaiverRepository::new(db);
    let due = repo.get_expired_pending(Utc::now()).await?;

    assert_eq!(due.len(), 1);
    assert_eq!(due[0].id, expired.id);
    assert_eq!(repo.get_pending().await?.len(), 2);

    Ok(())
}
