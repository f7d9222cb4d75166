use super::*;

/// Tests waiving a signed player.
///
/// Expected: Ok with a pending waiver, the player waived without a team and
/// a role removal owed
#[tokio::test]
async fn waives_signed_player() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = LeagueSettings::default();

    let (_owner, team) = factory::helpers::create_team_with_owner(db).await?;
    let (_user, player) = factory::helpers::create_signed_player(db, team.id, 250).await?;

    let (waiver, change) = WaiverService::new(db, &settings)
        .waive_player(team.id, player.id)
        .await?;

    assert_eq!(waiver.status, WaiverStatus::Pending);
    assert_eq!(waiver.waiving_team_id, team.id);
    assert_eq!(
        waiver.claim_deadline - waiver.waived_at,
        Duration::hours(settings.waiver_claim_hours)
    );
    assert!(change.previous_role_id.is_some());
    assert_eq!(change.new_role_id, None);

    let player = PlayerRepository::new(db).find_by_id(player.id).await?.unwrap();
    assert_eq!(player.status, PlayerStatus::Waived);
    assert_eq!(player.team_id, None);
    assert_eq!(player.salary, 250);

    Ok(())
}

/// Tests waiving a player that belongs to another team.
///
/// Expected: Err(PlayerNotOnTeam)
#[tokio::test]
async fn rejects_player_from_other_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = LeagueSettings::default();

    let team = factory::team::create_team(db).await?;
    let other = factory::team::create_team(db).await?;
    let (_user, player) = factory::helpers::create_signed_player(db, other.id, 250).await?;

    let result = WaiverService::new(db, &settings)
        .waive_player(team.id, player.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::LeagueErr(LeagueError::PlayerNotOnTeam { .. }))
    ));

    Ok(())
}
