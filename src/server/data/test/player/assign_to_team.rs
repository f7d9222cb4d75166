use super::*;

/// Tests signing a free agent to a team.
///
/// Verifies that team, salary and status change together and that the
/// team's payroll reflects the new contract.
///
/// Expected: Ok with player signed and payroll updated
#[tokio::test]
async fn signs_free_agent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::team::create_team(db).await?;
    factory::helpers::create_signed_player(db, team.id, 200).await?;
    let (_user, player) = factory::helpers::create_free_agent(db).await?;

    let repo = PlayerRepository::new(db);
    let signed = repo.assign_to_team(player.id, team.id, 350).await?;

    assert_eq!(signed.team_id, Some(team.id));
    assert_eq!(signed.salary, 350);
    assert_eq!(signed.status, PlayerStatus::Signed);
    assert_eq!(repo.team_payroll(team.id).await?, 550);

    Ok(())
}

/// Tests that an explicit assignment clears the manual removal flag.
///
/// Expected: Ok with manually_removed false
#[tokio::test]
async fn clears_manual_removal_flag() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::team::create_team(db).await?;
    let user = factory::user::create_user(db).await?;
    let player = factory::player::PlayerFactory::new(db, &user.discord_id)
        .manually_removed(true)
        .build()
        .await?;

    let signed = PlayerRepository::new(db)
        .assign_to_team(player.id, team.id, 100)
        .await?;

    assert!(!signed.manually_removed);

    Ok(())
}

/// Tests assigning a player that does not exist.
///
/// Expected: Err(PlayerNotFound)
#[tokio::test]
async fn fails_for_missing_player() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::team::create_team(db).await?;

    let result = PlayerRepository::new(db)
        .assign_to_team(404, team.id, 100)
        .await;

    assert!(matches!(
        result,
        Err(AppError::LeagueErr(LeagueError::PlayerNotFound(404)))
    ));

    Ok(())
}
