//! Waiver domain models and claim arbitration.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::{
    model::waiver::{WaiverClaimDto, WaiverDto},
    server::{
        error::{internal::InternalError, AppError},
        model::roster::RosterChange,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaiverStatus {
    Pending,
    Claimed,
    Cleared,
}

impl WaiverStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Claimed => "claimed",
            Self::Cleared => "cleared",
        }
    }

    pub fn parse(value: &str) -> Result<Self, InternalError> {
        match value {
            "pending" => Ok(Self::Pending),
            "claimed" => Ok(Self::Claimed),
            "cleared" => Ok(Self::Cleared),
            other => Err(InternalError::UnknownStatus {
                kind: "waiver",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Waiver {
    pub id: i32,
    pub player_id: i32,
    pub waiving_team_id: i32,
    pub waived_at: DateTime<Utc>,
    pub claim_deadline: DateTime<Utc>,
    pub status: WaiverStatus,
    pub claimed_by_team_id: Option<i32>,
}

impl Waiver {
    pub fn into_dto(self) -> WaiverDto {
        WaiverDto {
            id: self.id,
            player_id: self.player_id,
            waiving_team_id: self.waiving_team_id,
            waived_at: self.waived_at,
            claim_deadline: self.claim_deadline,
            status: self.status.as_str().to_string(),
            claimed_by_team_id: self.claimed_by_team_id,
        }
    }

    pub fn from_entity(entity: entity::waiver::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            player_id: entity.player_id,
            waiving_team_id: entity.waiving_team_id,
            waived_at: entity.waived_at,
            claim_deadline: entity.claim_deadline,
            status: WaiverStatus::parse(&entity.status)?,
            claimed_by_team_id: entity.claimed_by_team_id,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WaiverClaim {
    pub id: i32,
    pub waiver_id: i32,
    pub team_id: i32,
    pub created_at: DateTime<Utc>,
}

impl WaiverClaim {
    pub fn into_dto(self) -> WaiverClaimDto {
        WaiverClaimDto {
            id: self.id,
            waiver_id: self.waiver_id,
            team_id: self.team_id,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::waiver_claim::Model) -> Self {
        Self {
            id: entity.id,
            waiver_id: entity.waiver_id,
            team_id: entity.team_id,
            created_at: entity.created_at,
        }
    }
}

/// Result of processing a waiver.
#[derive(Debug, Clone)]
pub struct WaiverResolution {
    pub waiver: Waiver,
    /// Role update owed when the player was claimed.
    pub roster_change: Option<RosterChange>,
}

/// Picks the claim that wins a waived player.
///
/// The claiming team with the best (lowest) priority order wins. Teams missing from the
/// ledger rank after every ranked team; remaining ties go to the earliest claim.
pub fn select_winning_claim<'a>(
    claims: &'a [WaiverClaim],
    priorities: &HashMap<i32, i32>,
) -> Option<&'a WaiverClaim> {
    claims.iter().min_by_key(|claim| {
        (
            priorities.get(&claim.team_id).copied().unwrap_or(i32::MAX),
            claim.created_at,
            claim.id,
        )
    })
}
