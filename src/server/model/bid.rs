//! Bid domain models and the winning-bid selection rule.

use chrono::{DateTime, Utc};

use crate::{
    model::bid::{BidDto, BidResolutionDto, ResolutionSummaryDto},
    server::{
        error::{internal::InternalError, AppError},
        model::{player::Player, roster::RosterChange},
        util::parse::parse_u64_from_string,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidStatus {
    Active,
    Won,
    Lost,
    Cancelled,
}

impl BidStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Won => "won",
            Self::Lost => "lost",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn parse(value: &str) -> Result<Self, InternalError> {
        match value {
            "active" => Ok(Self::Active),
            "won" => Ok(Self::Won),
            "lost" => Ok(Self::Lost),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(InternalError::UnknownStatus {
                kind: "bid",
                value: other.to_string(),
            }),
        }
    }
}

/// A team's offer for a free-agent player.
#[derive(Debug, Clone, PartialEq)]
pub struct Bid {
    pub id: i32,
    pub player_id: i32,
    /// Discord ID of the user who placed the bid.
    pub user_id: u64,
    pub team_id: i32,
    pub bid_amount: i64,
    pub status: BidStatus,
    /// Resolved and no longer actionable.
    pub finalized: bool,
    pub bid_expires: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Bid {
    pub fn into_dto(self) -> BidDto {
        BidDto {
            id: self.id,
            player_id: self.player_id,
            user_id: self.user_id.to_string(),
            team_id: self.team_id,
            bid_amount: self.bid_amount,
            status: self.status.as_str().to_string(),
            finalized: self.finalized,
            bid_expires: self.bid_expires,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::player_bid::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            player_id: entity.player_id,
            user_id: parse_u64_from_string(entity.user_id)?,
            team_id: entity.team_id,
            bid_amount: entity.bid_amount,
            status: BidStatus::parse(&entity.status)?,
            finalized: entity.finalized,
            bid_expires: entity.bid_expires,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for placing a bid.
#[derive(Debug, Clone)]
pub struct PlaceBidParam {
    /// Discord ID of the bidding user.
    pub user_id: u64,
    pub team_id: i32,
    pub player_id: i32,
    pub bid_amount: i64,
}

/// Parameters for inserting a bid row.
#[derive(Debug, Clone)]
pub struct CreateBidParam {
    pub player_id: i32,
    pub user_id: u64,
    pub team_id: i32,
    pub bid_amount: i64,
    pub bid_expires: DateTime<Utc>,
}

/// Result of resolving a single bid.
#[derive(Debug, Clone)]
pub struct BidResolution {
    pub bid: Bid,
    pub player: Player,
    pub roster_change: RosterChange,
}

impl BidResolution {
    /// Splits off the role update owed and converts the rest for the API response.
    pub fn into_parts(self) -> (BidResolutionDto, RosterChange) {
        (
            BidResolutionDto {
                bid: self.bid.into_dto(),
                player: self.player.into_dto(),
            },
            self.roster_change,
        )
    }
}

/// Outcome of an automatic resolution pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolutionSummary {
    /// Players assigned to a winning team.
    pub resolved: usize,
    /// Players whose closed auction was cancelled instead of assigned.
    pub skipped: usize,
    /// Role updates owed for every assigned player.
    pub roster_changes: Vec<RosterChange>,
}

impl ResolutionSummary {
    pub fn into_dto(self) -> ResolutionSummaryDto {
        ResolutionSummaryDto {
            resolved: self.resolved,
            skipped: self.skipped,
        }
    }
}

/// Picks the winning bid of a closed auction.
///
/// Highest amount wins; ties go to the earliest bid, then the lowest id.
pub fn select_winning_bid(bids: &[Bid]) -> Option<&Bid> {
    bids.iter().min_by(|a, b| {
        b.bid_amount
            .cmp(&a.bid_amount)
            .then(a.created_at.cmp(&b.created_at))
            .then(a.id.cmp(&b.id))
    })
}

/// An auction is closed once every open bid on the player has expired.
pub fn auction_closed(bids: &[Bid], now: DateTime<Utc>) -> bool {
    !bids.is_empty() && bids.iter().all(|bid| bid.bid_expires <= now)
}
