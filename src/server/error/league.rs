use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Violations of league business rules.
///
/// Each variant carries enough context for the client message; all of them are expected
/// outcomes of user input rather than server faults.
#[derive(Error, Debug, PartialEq)]
pub enum LeagueError {
    #[error("Bid {0} not found")]
    BidNotFound(i32),

    #[error("Bid {0} has already been finalized")]
    BidAlreadyFinalized(i32),

    #[error("Bid amount must be positive")]
    NonPositiveBid,

    #[error("Bid of {amount} does not beat the current high bid of {current}")]
    BidTooLow { amount: i64, current: i64 },

    #[error("Team {team_id} payroll of {payroll} plus {amount} exceeds the salary cap of {cap}")]
    SalaryCapExceeded {
        team_id: i32,
        payroll: i64,
        amount: i64,
        cap: i64,
    },

    #[error("Player {0} not found")]
    PlayerNotFound(i32),

    #[error("Player {0} is not a free agent")]
    PlayerNotFreeAgent(i32),

    #[error("Player {0} was manually removed and cannot be bid on")]
    PlayerManuallyRemoved(i32),

    #[error("Player {player_id} is not on team {team_id}")]
    PlayerNotOnTeam { player_id: i32, team_id: i32 },

    #[error("User is already registered as player {0}")]
    AlreadyRegistered(i32),

    #[error("Team {0} not found")]
    TeamNotFound(i32),

    #[error("A team named '{0}' already exists")]
    TeamNameTaken(String),

    #[error("Waiver {0} not found")]
    WaiverNotFound(i32),

    #[error("Waiver {0} is no longer pending")]
    WaiverClosed(i32),

    #[error("Claim deadline for waiver {0} has passed")]
    ClaimDeadlinePassed(i32),

    #[error("Team {0} cannot claim a player it waived")]
    OwnWaiverClaim(i32),

    #[error("Team {team_id} already claimed waiver {waiver_id}")]
    DuplicateClaim { waiver_id: i32, team_id: i32 },

    #[error("A team cannot play against itself")]
    SameTeamMatch,

    #[error("Scores cannot be negative")]
    NegativeScore,

    #[error("Score of {score} exceeds the maximum of {max}")]
    ScoreTooHigh { score: i32, max: i32 },
}

impl IntoResponse for LeagueError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::BidNotFound(_)
            | Self::PlayerNotFound(_)
            | Self::TeamNotFound(_)
            | Self::WaiverNotFound(_) => StatusCode::NOT_FOUND,
            Self::BidAlreadyFinalized(_)
            | Self::PlayerNotFreeAgent(_)
            | Self::AlreadyRegistered(_)
            | Self::TeamNameTaken(_)
            | Self::WaiverClosed(_)
            | Self::DuplicateClaim { .. } => StatusCode::CONFLICT,
            Self::NonPositiveBid
            | Self::BidTooLow { .. }
            | Self::SalaryCapExceeded { .. }
            | Self::PlayerManuallyRemoved(_)
            | Self::PlayerNotOnTeam { .. }
            | Self::ClaimDeadlinePassed(_)
            | Self::OwnWaiverClaim(_)
            | Self::SameTeamMatch
            | Self::NegativeScore
            | Self::ScoreTooHigh { .. } => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
