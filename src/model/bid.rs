use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::player::PlayerDto;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct BidDto {
    pub id: i32,
    pub player_id: i32,
    pub user_id: String,
    pub team_id: i32,
    pub bid_amount: i64,
    /// `active`, `won`, `lost` or `cancelled`
    pub status: String,
    pub finalized: bool,
    pub bid_expires: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PlaceBidDto {
    pub team_id: i32,
    pub player_id: i32,
    pub bid_amount: i64,
}

/// Manual resolution input; the bid itself names the winning team.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default, ToSchema)]
pub struct ResolveBidDto {
    /// Overrides the salary the player signs for. Defaults to the bid amount.
    #[serde(default)]
    pub bid_amount: Option<i64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ResolutionSummaryDto {
    pub resolved: usize,
    pub skipped: usize,
}

/// Outcome of a manual resolution: the winning bid and the newly signed player.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct BidResolutionDto {
    pub bid: BidDto,
    pub player: PlayerDto,
}
