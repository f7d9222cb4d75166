//! Player domain models.
//!
//! A player row is created when a user confirms registration. Its team assignment is
//! mutated by bid resolution, waiver processing, or admin action.

use chrono::{DateTime, Utc};

use crate::{
    model::player::PlayerDto,
    server::{
        error::{internal::InternalError, AppError},
        util::parse::parse_u64_from_string,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerStatus {
    FreeAgent,
    Signed,
    Waived,
}

impl PlayerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FreeAgent => "free_agent",
            Self::Signed => "signed",
            Self::Waived => "waived",
        }
    }

    pub fn parse(value: &str) -> Result<Self, InternalError> {
        match value {
            "free_agent" => Ok(Self::FreeAgent),
            "signed" => Ok(Self::Signed),
            "waived" => Ok(Self::Waived),
            other => Err(InternalError::UnknownStatus {
                kind: "player",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i32,
    /// Discord ID of the user this player belongs to.
    pub user_id: u64,
    pub team_id: Option<i32>,
    pub salary: i64,
    pub status: PlayerStatus,
    /// Set by an admin removal; blocks automatic re-assignment.
    pub manually_removed: bool,
    pub created_at: DateTime<Utc>,
}

impl Player {
    pub fn into_dto(self) -> PlayerDto {
        PlayerDto {
            id: self.id,
            user_id: self.user_id.to_string(),
            team_id: self.team_id,
            salary: self.salary,
            status: self.status.as_str().to_string(),
            manually_removed: self.manually_removed,
        }
    }

    /// Converts an entity model to a player domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Player)` - The converted player
    /// - `Err(AppError::InternalErr(_))` - Stored user id or status is invalid
    pub fn from_entity(entity: entity::player::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            user_id: parse_u64_from_string(entity.user_id)?,
            team_id: entity.team_id,
            salary: entity.salary,
            status: PlayerStatus::parse(&entity.status)?,
            manually_removed: entity.manually_removed,
            created_at: entity.created_at,
        })
    }

    /// Whether the player can be won through bidding.
    pub fn is_free_agent(&self) -> bool {
        self.status == PlayerStatus::FreeAgent && self.team_id.is_none()
    }
}

/// Admin assignment of a player to a team.
#[derive(Debug, Clone)]
pub struct AssignPlayerParam {
    pub player_id: i32,
    pub team_id: i32,
    pub salary: i64,
}
