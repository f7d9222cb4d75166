use super::*;

/// Tests recording results and listing them.
///
/// Expected: Ok with matches listed most recently played first
#[tokio::test]
async fn lists_matches_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let home = factory::team::create_team(db).await?;
    let away = factory::team::create_team(db).await?;
    let now = Utc::now();

    let repo = LeagueMatchRepository::new(db);
    let older = repo
        .create(RecordMatchParam {
            home_team_id: home.id,
            away_team_id: away.id,
            home_score: 2,
            away_score: 1,
            played_at: now - Duration::days(7),
        })
        .await?;
    let newer = repo
        .create(RecordMatchParam {
            home_team_id: away.id,
            away_team_id: home.id,
            home_score: 0,
            away_score: 0,
            played_at: now,
        })
        .await?;

    let matches = repo.get_all().await?;
    let ids: Vec<i32> = matches.iter().map(|played| played.id).collect();

    assert_eq!(ids, vec![newer.id, older.id]);
    assert_eq!(matches[1].home_score, 2);

    Ok(())
}
