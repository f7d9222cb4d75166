use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct LeagueMatchDto {
    pub id: i32,
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub home_score: i32,
    pub away_score: i32,
    pub played_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct RecordMatchDto {
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub home_score: i32,
    pub away_score: i32,
    /// Defaults to the time the result is recorded.
    #[serde(default)]
    pub played_at: Option<DateTime<Utc>>,
}
