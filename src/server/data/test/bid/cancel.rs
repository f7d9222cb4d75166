use super::*;

/// Tests cancelling one team's open bids on a player.
///
/// Expected: Ok(1) with the other team's bid still open
#[tokio::test]
async fn cancels_only_team_bids() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner_a, team_a) = factory::helpers::create_team_with_owner(db).await?;
    let (owner_b, team_b) = factory::helpers::create_team_with_owner(db).await?;
    let (_user, player) = factory::helpers::create_free_agent(db).await?;

    factory::bid::create_bid(db, player.id, team_a.id, &owner_a.discord_id, 100).await?;
    let other = factory::bid::create_bid(db, player.id, team_b.id, &owner_b.discord_id, 150).await?;

    let repo = BidRepository::new(db);
    assert_eq!(repo.cancel_open_for_team(player.id, team_a.id).await?, 1);

    let open = repo.get_open_by_player(player.id).await?;
    assert_eq!(open.len(), 1);
    assert_eq!(open[0].id, other.id);

    Ok(())
}

/// Tests cancelling every open bid on a player.
///
/// Expected: Ok with no open bids and already finalized bids untouched
#[tokio::test]
async fn cancels_all_open_bids() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, team) = factory::helpers::create_team_with_owner(db).await?;
    let (_user, player) = factory::helpers::create_free_agent(db).await?;

    factory::bid::create_bid(db, player.id, team.id, &owner.discord_id, 100).await?;
    factory::bid::create_bid(db, player.id, team.id, &owner.discord_id, 120).await?;
    let lost = factory::bid::BidFactory::new(db, player.id, team.id, &owner.discord_id)
        .finalized("lost")
        .build()
        .await?;

    let repo = BidRepository::new(db);
    assert_eq!(repo.cancel_open_for_player(player.id).await?, 2);
    assert!(repo.get_open().await?.is_empty());
    assert_eq!(
        repo.find_by_id(lost.id).await?.unwrap().status,
        BidStatus::Lost
    );

    Ok(())
}
