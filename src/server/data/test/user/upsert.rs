use super::*;

/// Tests inserting a new user.
///
/// Verifies that upserting an unknown Discord ID creates the user with the
/// provided name and admin defaulting to false.
///
/// Expected: Ok with new non-admin user
#[tokio::test]
async fn creates_new_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam {
            discord_id: 4242,
            name: "Keeper".to_string(),
            is_admin: None,
        })
        .await?;

    assert_eq!(user.discord_id, 4242);
    assert_eq!(user.name, "Keeper");
    assert!(!user.admin);

    Ok(())
}

/// Tests that a regular login does not strip admin status.
///
/// Verifies that upserting an existing admin without an admin flag updates
/// the name but keeps the admin column untouched.
///
/// Expected: Ok with name updated and admin still true
#[tokio::test]
async fn keeps_admin_when_flag_absent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await?;
    let discord_id: u64 = admin.discord_id.parse().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam {
            discord_id,
            name: "Renamed".to_string(),
            is_admin: None,
        })
        .await?;

    assert_eq!(user.name, "Renamed");
    assert!(user.admin);

    Ok(())
}

/// Tests granting admin through upsert.
///
/// Expected: Ok with admin set to true on the existing user
#[tokio::test]
async fn grants_admin_when_flag_set() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let discord_id: u64 = user.discord_id.parse().unwrap();

    let repo = UserRepository::new(db);
    let updated = repo
        .upsert(UpsertUserParam {
            discord_id,
            name: user.name.clone(),
            is_admin: Some(true),
        })
        .await?;

    assert!(updated.admin);
    let found = repo.find_by_discord_id(discord_id).await?.unwrap();
    assert!(found.admin);

    Ok(())
}
