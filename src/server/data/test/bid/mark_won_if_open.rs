use super::*;

/// Tests finalizing an open bid as won.
///
/// Expected: Ok(1) and the bid is finalized with status won
#[tokio::test]
async fn marks_open_bid_won() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, team) = factory::helpers::create_team_with_owner(db).await?;
    let (_user, player) = factory::helpers::create_free_agent(db).await?;
    let bid = factory::bid::create_bid(db, player.id, team.id, &owner.discord_id, 300).await?;

    let repo = BidRepository::new(db);
    assert_eq!(repo.mark_won_if_open(bid.id, 300).await?, 1);

    let stored = repo.find_by_id(bid.id).await?.unwrap();
    assert_eq!(stored.status, BidStatus::Won);
    assert!(stored.finalized);

    Ok(())
}

/// Tests that an admin override amount is written to the winning bid.
///
/// Expected: Ok(1) and the stored amount equals the override
#[tokio::test]
async fn writes_override_amount() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, team) = factory::helpers::create_team_with_owner(db).await?;
    let (_user, player) = factory::helpers::create_free_agent(db).await?;
    let bid = factory::bid::create_bid(db, player.id, team.id, &owner.discord_id, 300).await?;

    let repo = BidRepository::new(db);
    assert_eq!(repo.mark_won_if_open(bid.id, 450).await?, 1);
    assert_eq!(repo.find_by_id(bid.id).await?.unwrap().bid_amount, 450);

    Ok(())
}

/// Tests that a second resolution of the same bid is rejected.
///
/// Expected: Ok(0) on the second call and the status stays won
#[tokio::test]
async fn second_resolution_affects_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, team) = factory::helpers::create_team_with_owner(db).await?;
    let (_user, player) = factory::helpers::create_free_agent(db).await?;
    let bid = factory::bid::create_bid(db, player.id, team.id, &owner.discord_id, 300).await?;

    let repo = BidRepository::new(db);
    repo.mark_won_if_open(bid.id, 300).await?;

    assert_eq!(repo.mark_won_if_open(bid.id, 500).await?, 0);
    assert_eq!(repo.find_by_id(bid.id).await?.unwrap().bid_amount, 300);

    Ok(())
}

/// Tests finalizing the losing bids after a win.
///
/// Expected: Ok(2) with both other bids lost and the winner untouched
#[tokio::test]
async fn finalizes_other_bids_as_lost() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, team) = factory::helpers::create_team_with_owner(db).await?;
    let (_user, player) = factory::helpers::create_free_agent(db).await?;
    let winner = factory::bid::create_bid(db, player.id, team.id, &owner.discord_id, 300).await?;
    let loser_a = factory::bid::create_bid(db, player.id, team.id, &owner.discord_id, 200).await?;
    let loser_b = factory::bid::create_bid(db, player.id, team.id, &owner.discord_id, 100).await?;

    let repo = BidRepository::new(db);
    let affected = repo
        .finalize_others(player.id, winner.id, BidStatus::Lost)
        .await?;

    assert_eq!(affected, 2);
    for id in [loser_a.id, loser_b.id] {
        let bid = repo.find_by_id(id).await?.unwrap();
        assert_eq!(bid.status, BidStatus::Lost);
        assert!(bid.finalized);
    }
    let winner = repo.find_by_id(winner.id).await?.unwrap();
    assert_eq!(winner.status, BidStatus::Active);
    assert!(!winner.finalized);

    Ok(())
}
