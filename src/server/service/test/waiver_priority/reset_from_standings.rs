use super::*;

/// Tests rebuilding the ledger from results.
///
/// Verifies that the worst record receives priority 1 and teams without
/// matches are still ranked.
///
/// Expected: Ok with a dense ordering loser, idle team, winner
#[tokio::test]
async fn worst_record_gets_first_priority() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let winner = factory::team::TeamFactory::new(db).name("Alpha").build().await?;
    let loser = factory::team::TeamFactory::new(db).name("Bravo").build().await?;
    let idle = factory::team::TeamFactory::new(db).name("Charlie").build().await?;
    factory::team::create_priority(db, loser.id, 1).await?;
    factory::team::create_priority(db, winner.id, 2).await?;
    factory::league_match::create_match(db, winner.id, loser.id, 3, 0).await?;

    let service = WaiverPriorityService::new(db);
    let ordering = service.reset_from_standings().await?;

    let expected = vec![
        PriorityEntry { team_id: loser.id, priority_order: 1 },
        PriorityEntry { team_id: idle.id, priority_order: 2 },
        PriorityEntry { team_id: winner.id, priority_order: 3 },
    ];
    assert_eq!(ordering, expected);
    assert_eq!(service.get_ordered().await?, expected);

    Ok(())
}
