use super::*;

/// Tests manually removing a player from a team.
///
/// Expected: Ok with no team, free agent status and manually_removed set
#[tokio::test]
async fn releases_with_manual_flag() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::team::create_team(db).await?;
    let (_user, player) = factory::helpers::create_signed_player(db, team.id, 300).await?;

    let repo = PlayerRepository::new(db);
    let released = repo.release(player.id, true).await?;

    assert_eq!(released.team_id, None);
    assert_eq!(released.status, PlayerStatus::FreeAgent);
    assert!(released.manually_removed);
    assert_eq!(repo.team_payroll(team.id).await?, 0);

    Ok(())
}

/// Tests putting a player on waivers.
///
/// Expected: Ok with waived status and salary kept
#[tokio::test]
async fn marks_player_waived() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::team::create_team(db).await?;
    let (_user, player) = factory::helpers::create_signed_player(db, team.id, 300).await?;

    let waived = PlayerRepository::new(db).mark_waived(player.id).await?;

    assert_eq!(waived.team_id, None);
    assert_eq!(waived.status, PlayerStatus::Waived);
    assert_eq!(waived.salary, 300);

    Ok(())
}
