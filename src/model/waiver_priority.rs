use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct WaiverPriorityDto {
    pub team_id: i32,
    /// 1 is the highest priority
    pub priority_order: i32,
}
