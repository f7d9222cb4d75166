use super::*;

/// Tests the owner of a team passes the ownership check.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_team_owner() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let owner = factory::user::UserFactory::new(db)
        .discord_id("111111111")
        .build()
        .await?;
    let team = factory::team::TeamFactory::new(db)
        .owner_id(&owner.discord_id)
        .build()
        .await?;

    AuthSession::new(session).set_user_id(111111111).await?;

    let user = AuthGuard::new(db, session)
        .require(&[Permission::TeamOwner(team.id)])
        .await?;

    assert_eq!(user.discord_id, 111111111);

    Ok(())
}

/// Tests a user cannot act for a team owned by someone else.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_other_teams_owner() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let owner = factory::user::create_user(db).await?;
    factory::user::UserFactory::new(db)
        .discord_id("222222222")
        .build()
        .await?;
    let team = factory::team::TeamFactory::new(db)
        .owner_id(&owner.discord_id)
        .build()
        .await?;

    AuthSession::new(session).set_user_id(222222222).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::TeamOwner(team.id)])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, message))) => {
            assert_eq!(user_id, 222222222);
            assert!(message.contains(&team.id.to_string()));
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }

    Ok(())
}

/// Tests admins act on behalf of any team without owning it.
///
/// Expected: Ok(User) with admin=true
#[tokio::test]
async fn admin_passes_ownership_check() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::user::create_admin(db).await?;
    let team = factory::team::create_team(db).await?;

    AuthSession::new(session)
        .set_user_id(admin.discord_id.parse().unwrap())
        .await?;

    let user = AuthGuard::new(db, session)
        .require(&[Permission::TeamOwner(team.id)])
        .await?;

    assert!(user.admin);

    Ok(())
}

/// Tests ownership checks against a missing team report the team as not found.
///
/// Expected: Err(LeagueError::TeamNotFound)
#[tokio::test]
async fn unknown_team_is_not_found() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;

    AuthSession::new(session)
        .set_user_id(user.discord_id.parse().unwrap())
        .await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::TeamOwner(4242)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::LeagueErr(LeagueError::TeamNotFound(4242)))
    ));

    Ok(())
}
