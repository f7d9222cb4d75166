use super::*;

/// Tests clearing a team's owner and role.
///
/// Expected: Ok with owner and role set to None
#[tokio::test]
async fn clears_owner_and_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, team) = factory::helpers::create_team_with_owner(db).await?;

    let updated = TeamRepository::new(db)
        .update(UpdateTeamParam {
            id: team.id,
            owner_id: None,
            discord_role_id: None,
        })
        .await?;

    assert_eq!(updated.owner_id, None);
    assert_eq!(updated.discord_role_id, None);
    assert_eq!(updated.name, team.name);

    Ok(())
}

/// Tests updating a team that does not exist.
///
/// Expected: Err(TeamNotFound)
#[tokio::test]
async fn fails_for_missing_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TeamRepository::new(db)
        .update(UpdateTeamParam {
            id: 999,
            owner_id: None,
            discord_role_id: None,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::LeagueErr(LeagueError::TeamNotFound(999)))
    ));

    Ok(())
}
