use super::*;

/// Tests placing a first bid on a free agent.
///
/// Expected: Ok with an active bid expiring after the configured duration
#[tokio::test]
async fn places_first_bid() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = LeagueSettings::default();

    let (owner, team) = factory::helpers::create_team_with_owner(db).await?;
    let (_user, player) = factory::helpers::create_free_agent(db).await?;

    let before = Utc::now();
    let bid = BidService::new(db, &settings)
        .place_bid(PlaceBidParam {
            user_id: owner.discord_id.parse().unwrap(),
            team_id: team.id,
            player_id: player.id,
            bid_amount: 150,
        })
        .await?;

    assert_eq!(bid.status, BidStatus::Active);
    assert!(!bid.finalized);
    assert!(bid.bid_expires >= before + Duration::hours(settings.bid_duration_hours));

    Ok(())
}

/// Tests that a bid must beat the current high bid.
///
/// Expected: Err(BidTooLow) for an equal amount
#[tokio::test]
async fn rejects_bid_not_above_high_bid() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = LeagueSettings::default();

    let (owner_a, team_a) = factory::helpers::create_team_with_owner(db).await?;
    let (owner_b, team_b) = factory::helpers::create_team_with_owner(db).await?;
    let (_user, player) = factory::helpers::create_free_agent(db).await?;
    factory::bid::create_bid(db, player.id, team_a.id, &owner_a.discord_id, 200).await?;

    let result = BidService::new(db, &settings)
        .place_bid(PlaceBidParam {
            user_id: owner_b.discord_id.parse().unwrap(),
            team_id: team_b.id,
            player_id: player.id,
            bid_amount: 200,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::LeagueErr(LeagueError::BidTooLow {
            amount: 200,
            current: 200
        }))
    ));

    Ok(())
}

/// Tests raising a team's own bid.
///
/// Verifies that the team's earlier open bid is cancelled so it holds only
/// one open bid on the player.
///
/// Expected: Ok with the earlier bid cancelled and finalized
#[tokio::test]
async fn raising_cancels_previous_team_bid() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = LeagueSettings::default();

    let (owner, team) = factory::helpers::create_team_with_owner(db).await?;
    let (_user, player) = factory::helpers::create_free_agent(db).await?;
    let first = factory::bid::create_bid(db, player.id, team.id, &owner.discord_id, 100).await?;

    let raised = BidService::new(db, &settings)
        .place_bid(PlaceBidParam {
            user_id: owner.discord_id.parse().unwrap(),
            team_id: team.id,
            player_id: player.id,
            bid_amount: 180,
        })
        .await?;

    let repo = BidRepository::new(db);
    let open = repo.get_open_by_player(player.id).await?;
    assert_eq!(open.len(), 1);
    assert_eq!(open[0].id, raised.id);

    let first = repo.find_by_id(first.id).await?.unwrap();
    assert_eq!(first.status, BidStatus::Cancelled);
    assert!(first.finalized);

    Ok(())
}

/// Tests that manually removed players cannot be bid on.
///
/// Expected: Err(PlayerManuallyRemoved)
#[tokio::test]
async fn rejects_manually_removed_player() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = LeagueSettings::default();

    let (owner, team) = factory::helpers::create_team_with_owner(db).await?;
    let user = factory::user::create_user(db).await?;
    let player = factory::player::PlayerFactory::new(db, &user.discord_id)
        .manually_removed(true)
        .build()
        .await?;

    let result = BidService::new(db, &settings)
        .place_bid(PlaceBidParam {
            user_id: owner.discord_id.parse().unwrap(),
            team_id: team.id,
            player_id: player.id,
            bid_amount: 100,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::LeagueErr(LeagueError::PlayerManuallyRemoved(_)))
    ));

    Ok(())
}

/// Tests that signed players cannot be bid on.
///
/// Expected: Err(PlayerNotFreeAgent)
#[tokio::test]
async fn rejects_signed_player() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = LeagueSettings::default();

    let (owner, team) = factory::helpers::create_team_with_owner(db).await?;
    let other = factory::team::create_team(db).await?;
    let (_user, player) = factory::helpers::create_signed_player(db, other.id, 100).await?;

    let result = BidService::new(db, &settings)
        .place_bid(PlaceBidParam {
            user_id: owner.discord_id.parse().unwrap(),
            team_id: team.id,
            player_id: player.id,
            bid_amount: 500,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::LeagueErr(LeagueError::PlayerNotFreeAgent(_)))
    ));

    Ok(())
}

/// Tests the salary cap check.
///
/// Verifies that the current payroll plus the bid may not exceed the cap.
///
/// Expected: Err(SalaryCapExceeded) above the cap, Ok exactly at the cap
#[tokio::test]
async fn enforces_salary_cap() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = LeagueSettings {
        salary_cap: Some(1_000),
        ..LeagueSettings::default()
    };

    let (owner, team) = factory::helpers::create_team_with_owner(db).await?;
    factory::helpers::create_signed_player(db, team.id, 700).await?;
    let (_user, player) = factory::helpers::create_free_agent(db).await?;
    let user_id: u64 = owner.discord_id.parse().unwrap();

    let service = BidService::new(db, &settings);
    let over = service
        .place_bid(PlaceBidParam {
            user_id,
            team_id: team.id,
            player_id: player.id,
            bid_amount: 301,
        })
        .await;

    assert!(matches!(
        over,
        Err(AppError::LeagueErr(LeagueError::SalaryCapExceeded {
            payroll: 700,
            amount: 301,
            cap: 1_000,
            ..
        }))
    ));

    let at_cap = service
        .place_bid(PlaceBidParam {
            user_id,
            team_id: team.id,
            player_id: player.id,
            bid_amount: 300,
        })
        .await;
    assert!(at_cap.is_ok());

    Ok(())
}

/// Tests a bid too large to add to the payroll is treated as over the cap.
///
/// Expected: Err(SalaryCapExceeded) and no bid stored
#[tokio::test]
async fn rejects_bid_overflowing_payroll() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = LeagueSettings {
        salary_cap: Some(1_000),
        ..LeagueSettings::default()
    };

    let (owner, team) = factory::helpers::create_team_with_owner(db).await?;
    factory::helpers::create_signed_player(db, team.id, 700).await?;
    let (_user, player) = factory::helpers::create_free_agent(db).await?;

    let result = BidService::new(db, &settings)
        .place_bid(PlaceBidParam {
            user_id: owner.discord_id.parse().unwrap(),
            team_id: team.id,
            player_id: player.id,
            bid_amount: i64::MAX,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::LeagueErr(LeagueError::SalaryCapExceeded {
            payroll: 700,
            amount: i64::MAX,
            ..
        }))
    ));
    assert!(BidRepository::new(db)
        .get_by_player(player.id)
        .await?
        .is_empty());

    Ok(())
}

/// Tests that non-positive amounts are rejected.
///
/// Expected: Err(NonPositiveBid)
#[tokio::test]
async fn rejects_zero_amount() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = LeagueSettings::default();

    let (owner, team) = factory::helpers::create_team_with_owner(db).await?;
    let (_user, player) = factory::helpers::create_free_agent(db).await?;

    let result = BidService::new(db, &settings)
        .place_bid(PlaceBidParam {
            user_id: owner.discord_id.parse().unwrap(),
            team_id: team.id,
            player_id: player.id,
            bid_amount: 0,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::LeagueErr(LeagueError::NonPositiveBid))
    ));

    Ok(())
}
