use super::*;

/// Tests recording a result and reading the standings.
///
/// Expected: Ok with the home team on three points at the top
#[tokio::test]
async fn recorded_result_feeds_standings() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let home = factory::team::create_team(db).await?;
    let away = factory::team::create_team(db).await?;

    LeagueMatchService::new(db)
        .record(RecordMatchParam {
            home_team_id: home.id,
            away_team_id: away.id,
            home_score: 2,
            away_score: 1,
            played_at: Utc::now(),
        })
        .await?;

    let standings = StandingsService::new(db).get().await?;

    assert_eq!(standings[0].team_id, home.id);
    assert_eq!(standings[0].points, 3);
    assert_eq!(standings[1].team_id, away.id);
    assert_eq!(standings[1].losses, 1);

    Ok(())
}

/// Tests recording a team against itself.
///
/// Expected: Err(SameTeamMatch)
#[tokio::test]
async fn rejects_same_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::team::create_team(db).await?;

    let result = LeagueMatchService::new(db)
        .record(RecordMatchParam {
            home_team_id: team.id,
            away_team_id: team.id,
            home_score: 1,
            away_score: 0,
            played_at: Utc::now(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::LeagueErr(LeagueError::SameTeamMatch))
    ));

    Ok(())
}

/// Tests recording a result with an unknown team.
///
/// Expected: Err(TeamNotFound)
#[tokio::test]
async fn rejects_unknown_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let home = factory::team::create_team(db).await?;

    let result = LeagueMatchService::new(db)
        .record(RecordMatchParam {
            home_team_id: home.id,
            away_team_id: 4040,
            home_score: 1,
            away_score: 0,
            played_at: Utc::now(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::LeagueErr(LeagueError::TeamNotFound(4040)))
    ));

    Ok(())
}

/// Tests scores above the accepted maximum are rejected.
///
/// Expected: Err(ScoreTooHigh) and nothing recorded
#[tokio::test]
async fn rejects_score_above_maximum() -> Result<(), AppError> {
    let test = TestBuilder::new().with_league_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let home = factory::team::create_team(db).await?;
    let away = factory::team::create_team(db).await?;

    let service = LeagueMatchService::new(db);
    let result = service
        .record(RecordMatchParam {
            home_team_id: home.id,
            away_team_id: away.id,
            home_score: i32::MAX,
            away_score: 0,
            played_at: Utc::now(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::LeagueErr(LeagueError::ScoreTooHigh {
            score: i32::MAX,
            max: MAX_SCORE,
        }))
    ));
    assert!(service.get_all().await?.is_empty());

    let at_max = service
        .record(RecordMatchParam {
            home_team_id: home.id,
            away_team_id: away.id,
            home_score: 0,
            away_score: MAX_SCORE,
            played_at: Utc::now(),
        })
        .await;
    assert!(at_max.is_ok());

    Ok(())
}
