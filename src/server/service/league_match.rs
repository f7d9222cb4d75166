use sea_orm::DatabaseConnection;

use crate::server::{
    data::{league_match::LeagueMatchRepository, team::TeamRepository},
    error::{league::LeagueError, AppError},
    model::league_match::{LeagueMatch, RecordMatchParam},
};

/// Highest score accepted for either side of a match.
pub const MAX_SCORE: i32 = 999;

pub struct LeagueMatchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeagueMatchService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a played match.
    ///
    /// # Returns
    /// - `Ok(LeagueMatch)` - The recorded result
    /// - `Err(AppError::LeagueErr(SameTeamMatch))` - Home and away are the same team
    /// - `Err(AppError::LeagueErr(NegativeScore))` - Either score is below zero
    /// - `Err(AppError::LeagueErr(ScoreTooHigh))` - Either score is above `MAX_SCORE`
    /// - `Err(AppError::LeagueErr(TeamNotFound))` - Either team does not exist
    pub async fn record(&self, param: RecordMatchParam) -> Result<LeagueMatch, AppError> {
        if param.home_team_id == param.away_team_id {
            return Err(LeagueError::SameTeamMatch.into());
        }
        if param.home_score < 0 || param.away_score < 0 {
            return Err(LeagueError::NegativeScore.into());
        }
        if let Some(score) = [param.home_score, param.away_score]
            .into_iter()
            .find(|score| *score > MAX_SCORE)
        {
            return Err(LeagueError::ScoreTooHigh {
                score,
                max: MAX_SCORE,
            }
            .into());
        }

        let team_repo = TeamRepository::new(self.db);
        for team_id in [param.home_team_id, param.away_team_id] {
            team_repo
                .find_by_id(team_id)
                .await?
                .ok_or(LeagueError::TeamNotFound(team_id))?;
        }

        let recorded = LeagueMatchRepository::new(self.db).create(param).await?;

        tracing::info!(
            "Recorded match {}: team {} {} - {} team {}",
            recorded.id,
            recorded.home_team_id,
            recorded.home_score,
            recorded.away_score,
            recorded.away_team_id
        );

        Ok(recorded)
    }

    pub async fn get_all(&self) -> Result<Vec<LeagueMatch>, AppError> {
        LeagueMatchRepository::new(self.db).get_all().await
    }
}
