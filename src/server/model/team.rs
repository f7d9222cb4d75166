//! Team domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::team::{CreateTeamDto, TeamDto, UpdateTeamDto},
    server::{
        error::AppError,
        util::parse::{parse_discord_id_input, parse_optional_u64},
    },
};

/// A league team with an optional owning user and Discord role.
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub id: i32,
    pub name: String,
    /// Discord ID of the team owner, who may bid, waive and claim for the team.
    pub owner_id: Option<u64>,
    /// Discord role granted to every member signed to the team.
    pub discord_role_id: Option<u64>,
    pub created_at: DateTime<Utc>,
}

impl Team {
    pub fn into_dto(self) -> TeamDto {
        TeamDto {
            id: self.id,
            name: self.name,
            owner_id: self.owner_id.map(|id| id.to_string()),
            discord_role_id: self.discord_role_id.map(|id| id.to_string()),
        }
    }

    /// Converts an entity model to a team domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Team)` - The converted team
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored owner or role id is not a u64
    pub fn from_entity(entity: entity::team::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            owner_id: parse_optional_u64(entity.owner_id)?,
            discord_role_id: parse_optional_u64(entity.discord_role_id)?,
            created_at: entity.created_at,
        })
    }

    /// Whether the given user may act on behalf of this team.
    pub fn is_owned_by(&self, discord_id: u64) -> bool {
        self.owner_id == Some(discord_id)
    }
}

#[derive(Debug, Clone)]
pub struct CreateTeamParam {
    pub name: String,
    pub owner_id: Option<u64>,
    pub discord_role_id: Option<u64>,
}

impl TryFrom<CreateTeamDto> for CreateTeamParam {
    type Error = AppError;

    fn try_from(dto: CreateTeamDto) -> Result<Self, Self::Error> {
        Ok(Self {
            name: dto.name,
            owner_id: parse_discord_id_input("owner_id", dto.owner_id)?,
            discord_role_id: parse_discord_id_input("discord_role_id", dto.discord_role_id)?,
        })
    }
}

/// Replaces the owner and Discord role of a team.
#[derive(Debug, Clone)]
pub struct UpdateTeamParam {
    pub id: i32,
    pub owner_id: Option<u64>,
    pub discord_role_id: Option<u64>,
}

impl UpdateTeamParam {
    pub fn from_dto(id: i32, dto: UpdateTeamDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            owner_id: parse_discord_id_input("owner_id", dto.owner_id)?,
            discord_role_id: parse_discord_id_input("discord_role_id", dto.discord_role_id)?,
        })
    }
}
