use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PlayerDto {
    pub id: i32,
    pub user_id: String,
    pub team_id: Option<i32>,
    pub salary: i64,
    /// `free_agent`, `signed` or `waived`
    pub status: String,
    pub manually_removed: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AssignPlayerDto {
    pub team_id: i32,
    pub salary: i64,
}
