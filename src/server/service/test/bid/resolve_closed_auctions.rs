use super::*;

/// Tests the automatic pass on a closed auction.
///
/// Verifies that the highest expired bid wins and the other bids are lost.
///
/// Expected: Ok with one resolved player and a role change
#[tokio::test]
async fn assigns_highest_bid_when_closed() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = LeagueSettings::default();

    let (owner_a, team_a) = factory::helpers::create_team_with_owner(db).await?;
    let (owner_b, team_b) = factory::helpers::create_team_with_owner(db).await?;
    let (_user, player) = factory::helpers::create_free_agent(db).await?;
    factory::bid::BidFactory::new(db, player.id, team_a.id, &owner_a.discord_id)
        .amount(200)
        .expires_in(Duration::minutes(-10))
        .build()
        .await?;
    factory::bid::BidFactory::new(db, player.id, team_b.id, &owner_b.discord_id)
        .amount(350)
        .expires_in(Duration::minutes(-5))
        .build()
        .await?;

    let summary = BidService::new(db, &settings)
        .resolve_closed_auctions(Utc::now())
        .await?;

    assert_eq!(summary.resolved, 1);
    assert_eq!(summary.skipped, 0);
    assert_eq!(summary.roster_changes.len(), 1);

    let player = PlayerRepository::new(db).find_by_id(player.id).await?.unwrap();
    assert_eq!(player.team_id, Some(team_b.id));
    assert_eq!(player.salary, 350);

    let bids = BidRepository::new(db).get_by_player(player.id).await?;
    assert!(bids.iter().all(|bid| bid.finalized));
    assert_eq!(
        bids.iter().filter(|bid| bid.status == BidStatus::Won).count(),
        1
    );

    Ok(())
}

/// Tests that an auction stays open while any bid is unexpired.
///
/// Expected: Ok with nothing resolved and all bids still open
#[tokio::test]
async fn leaves_open_auction_alone() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = LeagueSettings::default();

    let (owner_a, team_a) = factory::helpers::create_team_with_owner(db).await?;
    let (owner_b, team_b) = factory::helpers::create_team_with_owner(db).await?;
    let (_user, player) = factory::helpers::create_free_agent(db).await?;
    factory::bid::BidFactory::new(db, player.id, team_a.id, &owner_a.discord_id)
        .amount(200)
        .expires_in(Duration::minutes(-10))
        .build()
        .await?;
    factory::bid::BidFactory::new(db, player.id, team_b.id, &owner_b.discord_id)
        .amount(350)
        .expires_in(Duration::hours(3))
        .build()
        .await?;

    let summary = BidService::new(db, &settings)
        .resolve_closed_auctions(Utc::now())
        .await?;

    assert_eq!(summary.resolved, 0);
    assert_eq!(
        BidRepository::new(db).get_open_by_player(player.id).await?.len(),
        2
    );

    Ok(())
}

/// Tests equal top bids.
///
/// Expected: Ok with the earlier of the two equal bids winning
#[tokio::test]
async fn tie_goes_to_earliest_bid() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = LeagueSettings::default();

    let (owner_a, team_a) = factory::helpers::create_team_with_owner(db).await?;
    let (owner_b, team_b) = factory::helpers::create_team_with_owner(db).await?;
    let (_user, player) = factory::helpers::create_free_agent(db).await?;
    let now = Utc::now();
    factory::bid::BidFactory::new(db, player.id, team_a.id, &owner_a.discord_id)
        .amount(300)
        .created_at(now - Duration::hours(2))
        .expires_in(Duration::minutes(-1))
        .build()
        .await?;
    factory::bid::BidFactory::new(db, player.id, team_b.id, &owner_b.discord_id)
        .amount(300)
        .created_at(now - Duration::hours(3))
        .expires_in(Duration::minutes(-1))
        .build()
        .await?;

    BidService::new(db, &settings)
        .resolve_closed_auctions(Utc::now())
        .await?;

    let player = PlayerRepository::new(db).find_by_id(player.id).await?.unwrap();
    assert_eq!(player.team_id, Some(team_b.id));

    Ok(())
}

/// Tests that manually removed players are never auto-assigned.
///
/// Expected: Ok with the auction skipped, the player unsigned and the bids
/// cancelled
#[tokio::test]
async fn skips_manually_removed_player() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = LeagueSettings::default();

    let (owner, team) = factory::helpers::create_team_with_owner(db).await?;
    let user = factory::user::create_user(db).await?;
    let player = factory::player::PlayerFactory::new(db, &user.discord_id)
        .manually_removed(true)
        .build()
        .await?;
    factory::bid::BidFactory::new(db, player.id, team.id, &owner.discord_id)
        .amount(500)
        .expires_in(Duration::minutes(-1))
        .build()
        .await?;

    let summary = BidService::new(db, &settings)
        .resolve_closed_auctions(Utc::now())
        .await?;

    assert_eq!(summary.resolved, 0);
    assert_eq!(summary.skipped, 1);
    assert!(summary.roster_changes.is_empty());

    let player = PlayerRepository::new(db).find_by_id(player.id).await?.unwrap();
    assert_eq!(player.team_id, None);
    assert!(player.manually_removed);

    let bids = BidRepository::new(db).get_by_player(player.id).await?;
    assert!(bids
        .iter()
        .all(|bid| bid.finalized && bid.status == BidStatus::Cancelled));

    Ok(())
}

/// Tests resolving several auctions in one pass.
///
/// Expected: Ok with every closed auction resolved independently
#[tokio::test]
async fn resolves_each_player_separately() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = LeagueSettings::default();

    let (owner, team) = factory::helpers::create_team_with_owner(db).await?;
    let (_a, first) = factory::helpers::create_free_agent(db).await?;
    let (_b, second) = factory::helpers::create_free_agent(db).await?;
    for player_id in [first.id, second.id] {
        factory::bid::BidFactory::new(db, player_id, team.id, &owner.discord_id)
            .expires_in(Duration::minutes(-1))
            .build()
            .await?;
    }

    let summary = BidService::new(db, &settings)
        .resolve_closed_auctions(Utc::now())
        .await?;

    assert_eq!(summary.resolved, 2);
    assert_eq!(
        PlayerRepository::new(db).get_by_team(team.id).await?.len(),
        2
    );

    Ok(())
}
