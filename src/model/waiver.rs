use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct WaiverDto {
    pub id: i32,
    pub player_id: i32,
    pub waiving_team_id: i32,
    pub waived_at: DateTime<Utc>,
    pub claim_deadline: DateTime<Utc>,
    /// `pending`, `claimed` or `cleared`
    pub status: String,
    pub claimed_by_team_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct WaivePlayerDto {
    pub player_id: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ClaimWaiverDto {
    pub team_id: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct WaiverClaimDto {
    pub id: i32,
    pub waiver_id: i32,
    pub team_id: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ProcessedWaiversDto {
    pub processed: usize,
}
