use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::player::PlayerDto;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TeamDto {
    pub id: i32,
    pub name: String,
    pub owner_id: Option<String>,
    pub discord_role_id: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CreateTeamDto {
    pub name: String,
    pub owner_id: Option<String>,
    pub discord_role_id: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UpdateTeamDto {
    pub owner_id: Option<String>,
    pub discord_role_id: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct RosterDto {
    pub team: TeamDto,
    pub players: Vec<PlayerDto>,
    pub payroll: i64,
}
