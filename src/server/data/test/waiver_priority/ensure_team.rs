use super::*;

/// Tests appending a new team to the back of the ledger.
///
/// Expected: Ok with the team at max + 1
#[tokio::test]
async fn appends_missing_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::team::create_team(db).await?;
    let second = factory::team::create_team(db).await?;
    let newcomer = factory::team::create_team(db).await?;
    factory::team::create_priority(db, first.id, 1).await?;
    factory::team::create_priority(db, second.id, 2).await?;

    let entry = WaiverPriorityRepository::new(db)
        .ensure_team(newcomer.id)
        .await?;

    assert_eq!(entry.priority_order, 3);

    Ok(())
}

/// Tests that an existing entry is left where it is.
///
/// Expected: Ok with the original order and no ledger change
#[tokio::test]
async fn keeps_existing_entry() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::team::create_team(db).await?;
    let second = factory::team::create_team(db).await?;
    factory::team::create_priority(db, first.id, 1).await?;
    factory::team::create_priority(db, second.id, 2).await?;

    let repo = WaiverPriorityRepository::new(db);
    let entry = repo.ensure_team(first.id).await?;

    assert_eq!(entry.priority_order, 1);
    assert_eq!(repo.get_ordered().await?.len(), 2);

    Ok(())
}

/// Tests the first team joining an empty ledger.
///
/// Expected: Ok with order 1
#[tokio::test]
async fn first_team_gets_top_priority() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::team::create_team(db).await?;

    let entry = WaiverPriorityRepository::new(db).ensure_team(team.id).await?;

    assert_eq!(entry.priority_order, 1);

    Ok(())
}
