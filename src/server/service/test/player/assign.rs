use super::*;

/// Tests an admin moving a player between teams.
///
/// Verifies the role change carries both the old and the new team role.
///
/// Expected: Ok with the player on the new team
#[tokio::test]
async fn moves_player_between_teams() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let old_team = factory::team::TeamFactory::new(db)
        .discord_role_id("111")
        .build()
        .await?;
    let new_team = factory::team::TeamFactory::new(db)
        .discord_role_id("222")
        .build()
        .await?;
    let (_user, player) = factory::helpers::create_signed_player(db, old_team.id, 100).await?;

    let (signed, change) = PlayerService::new(db)
        .assign(AssignPlayerParam {
            player_id: player.id,
            team_id: new_team.id,
            salary: 180,
        })
        .await?;

    assert_eq!(signed.team_id, Some(new_team.id));
    assert_eq!(signed.salary, 180);
    assert_eq!(change.previous_role_id, Some(111));
    assert_eq!(change.new_role_id, Some(222));

    Ok(())
}

/// Tests that assigning a free agent cancels the open auction.
///
/// Expected: Ok with all open bids on the player cancelled
#[tokio::test]
async fn cancels_open_bids() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, team) = factory::helpers::create_team_with_owner(db).await?;
    let (_user, player) = factory::helpers::create_free_agent(db).await?;
    factory::bid::create_bid(db, player.id, team.id, &owner.discord_id, 120).await?;

    PlayerService::new(db)
        .assign(AssignPlayerParam {
            player_id: player.id,
            team_id: team.id,
            salary: 100,
        })
        .await?;

    let bids = BidRepository::new(db).get_by_player(player.id).await?;
    assert!(bids
        .iter()
        .all(|bid| bid.finalized && bid.status == BidStatus::Cancelled));

    Ok(())
}

/// Tests assigning a free agent to a team without a Discord role.
///
/// Verifies the roster change owes no role update.
///
/// Expected: Ok with a no-op roster change
#[tokio::test]
async fn team_without_role_owes_no_role_update() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::team::TeamFactory::new(db).no_role().build().await?;
    let (user, player) = factory::helpers::create_free_agent(db).await?;

    let (signed, change) = PlayerService::new(db)
        .assign(AssignPlayerParam {
            player_id: player.id,
            team_id: team.id,
            salary: 50,
        })
        .await?;

    assert_eq!(signed.status, PlayerStatus::Signed);
    assert_eq!(change.discord_id.to_string(), user.discord_id);
    assert!(change.is_noop());

    Ok(())
}
