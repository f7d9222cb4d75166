use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AssignRolesDto {
    /// Discord ID of the member to resync
    pub discord_id: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AssignRolesResultDto {
    pub discord_id: String,
    /// Team role the member holds after the resync, if any
    pub role_id: Option<String>,
}
