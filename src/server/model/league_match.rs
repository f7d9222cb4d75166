//! Match result domain models.

use chrono::{DateTime, Utc};

use crate::model::league_match::{LeagueMatchDto, RecordMatchDto};

/// A played match with its final score.
#[derive(Debug, Clone, PartialEq)]
pub struct LeagueMatch {
    pub id: i32,
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub home_score: i32,
    pub away_score: i32,
    pub played_at: DateTime<Utc>,
}

impl LeagueMatch {
    pub fn into_dto(self) -> LeagueMatchDto {
        LeagueMatchDto {
            id: self.id,
            home_team_id: self.home_team_id,
            away_team_id: self.away_team_id,
            home_score: self.home_score,
            away_score: self.away_score,
            played_at: self.played_at,
        }
    }

    pub fn from_entity(entity: entity::league_match::Model) -> Self {
        Self {
            id: entity.id,
            home_team_id: entity.home_team_id,
            away_team_id: entity.away_team_id,
            home_score: entity.home_score,
            away_score: entity.away_score,
            played_at: entity.played_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordMatchParam {
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub home_score: i32,
    pub away_score: i32,
    pub played_at: DateTime<Utc>,
}

impl RecordMatchParam {
    /// Builds the parameters from a request, defaulting `played_at` to `now`.
    pub fn from_dto(dto: RecordMatchDto, now: DateTime<Utc>) -> Self {
        Self {
            home_team_id: dto.home_team_id,
            away_team_id: dto.away_team_id,
            home_score: dto.home_score,
            away_score: dto.away_score,
            played_at: dto.played_at.unwrap_or(now),
        }
    }
}
