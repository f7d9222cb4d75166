use super::*;

/// Tests creating a team with an owner and a role.
///
/// Verifies that Discord IDs survive the string column round trip and the
/// team can be found by name afterwards.
///
/// Expected: Ok with owner and role set
#[tokio::test]
async fn creates_team_with_owner_and_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let owner_id: u64 = owner.discord_id.parse().unwrap();

    let repo = TeamRepository::new(db);
    let team = repo
        .create(CreateTeamParam {
            name: "Harbor Hawks".to_string(),
            owner_id: Some(owner_id),
            discord_role_id: Some(777),
        })
        .await?;

    assert_eq!(team.owner_id, Some(owner_id));
    assert_eq!(team.discord_role_id, Some(777));

    let found = repo.find_by_name("Harbor Hawks").await?.unwrap();
    assert_eq!(found.id, team.id);

    Ok(())
}

/// Tests listing teams.
///
/// Expected: Ok with teams ordered by name
#[tokio::test]
async fn lists_teams_by_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::team::TeamFactory::new(db).name("Zephyrs").build().await?;
    factory::team::TeamFactory::new(db).name("Anchors").build().await?;

    let teams = TeamRepository::new(db).get_all().await?;
    let names: Vec<_> = teams.iter().map(|team| team.name.as_str()).collect();

    assert_eq!(names, vec!["Anchors", "Zephyrs"]);

    Ok(())
}
