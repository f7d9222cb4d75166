use super::*;

/// Tests the scheduled waiver pass.
///
/// Verifies that only waivers past their deadline are processed.
///
/// Expected: Ok with one waiver processed and the open waiver still pending
#[tokio::test]
async fn processes_only_expired_waivers() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let settings = LeagueSettings::default();

    let waiving = factory::team::create_team(db).await?;
    let claiming = factory::team::create_team(db).await?;

    let expired_user = factory::user::create_user(db).await?;
    let expired_player = factory::player::PlayerFactory::new(db, &expired_user.discord_id)
        .waived(100)
        .build()
        .await?;
    let expired = factory::waiver::WaiverFactory::new(db, expired_player.id, waiving.id)
        .deadline_in(Duration::minutes(-1))
        .build()
        .await?;
    factory::waiver::create_claim(db, expired.id, claiming.id, Utc::now()).await?;

    let open_user = factory::user::create_user(db).await?;
    let open_player = factory::player::PlayerFactory::new(db, &open_user.discord_id)
        .waived(100)
        .build()
        .await?;
    let open = factory::waiver::create_waiver(db, open_player.id, waiving.id).await?;

    let service = WaiverService::new(db, &settings);
    let outcome = service.process_expired(Utc::now()).await?;

    assert_eq!(outcome.processed, 1);
    assert_eq!(outcome.roster_changes.len(), 1);

    let pending = service.get_pending().await?;
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, open.id);

    let signed = PlayerRepository::new(db)
        .find_by_id(expired_player.id)
        .await?
        .unwrap();
    assert_eq!(signed.team_id, Some(claiming.id));

    Ok(())
}
