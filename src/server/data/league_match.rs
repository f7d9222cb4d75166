//! League match result repository.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, EntityTrait, QueryOrder};

use crate::server::{
    error::AppError,
    model::league_match::{LeagueMatch, RecordMatchParam},
};

pub struct LeagueMatchRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LeagueMatchRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: RecordMatchParam) -> Result<LeagueMatch, AppError> {
        let entity = entity::league_match::ActiveModel {
            home_team_id: ActiveValue::Set(param.home_team_id),
            away_team_id: ActiveValue::Set(param.away_team_id),
            home_score: ActiveValue::Set(param.home_score),
            away_score: ActiveValue::Set(param.away_score),
            played_at: ActiveValue::Set(param.played_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(LeagueMatch::from_entity(entity))
    }

    /// Gets all recorded matches, most recently played first.
    pub async fn get_all(&self) -> Result<Vec<LeagueMatch>, AppError> {
        let entities = entity::prelude::LeagueMatch::find()
            .order_by_desc(entity::league_match::Column::PlayedAt)
            .order_by_desc(entity::league_match::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(LeagueMatch::from_entity).collect())
    }
}
