use super::*;

/// Tests recording claims and reading them back.
///
/// Expected: Ok with claims in claim order and lookup by team working
#[tokio::test]
async fn records_and_lists_claims() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let waiving = factory::team::create_team(db).await?;
    let first = factory::team::create_team(db).await?;
    let second = factory::team::create_team(db).await?;
    let (_user, player) = factory::helpers::create_free_agent(db).await?;
    let waiver = factory::waiver::create_waiver(db, player.id, waiving.id).await?;

    let repo = WaiverRepository::new(db);
    let claim = repo.create_claim(waiver.id, first.id).await?;
    factory::waiver::create_claim(db, waiver.id, second.id, claim.created_at + Duration::seconds(5))
        .await?;

    let claims = repo.get_claims(waiver.id).await?;
    let teams: Vec<i32> = claims.iter().map(|claim| claim.team_id).collect();
    assert_eq!(teams, vec![first.id, second.id]);

    assert!(repo.find_claim(waiver.id, second.id).await?.is_some());
    assert!(repo.find_claim(waiver.id, waiving.id).await?.is_none());

    Ok(())
}

/// Tests a second claim by the same team is rejected by the unique index.
///
/// Covers two claims racing past the service's lookup: the insert itself reports the
/// duplicate as a conflict rather than a database failure.
///
/// Expected: Err(DuplicateClaim) and a single stored claim
#[tokio::test]
async fn second_claim_by_same_team_is_duplicate() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let waiving = factory::team::create_team(db).await?;
    let claiming = factory::team::create_team(db).await?;
    let (_user, player) = factory::helpers::create_free_agent(db).await?;
    let waiver = factory::waiver::create_waiver(db, player.id, waiving.id).await?;

    let repo = WaiverRepository::new(db);
    repo.create_claim(waiver.id, claiming.id).await?;
    let result = repo.create_claim(waiver.id, claiming.id).await;

    assert!(matches!(
        result,
        Err(AppError::LeagueErr(LeagueError::DuplicateClaim { waiver_id, team_id }))
            if waiver_id == waiver.id && team_id == claiming.id
    ));
    assert_eq!(repo.get_claims(waiver.id).await?.len(), 1);

    Ok(())
}
