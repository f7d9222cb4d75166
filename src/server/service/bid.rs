//! Bid placement and resolution.
//!
//! Resolution, both manual and automatic, runs in one transaction per player. The winning
//! bid is claimed with a guarded `finalized = false` update so two concurrent resolutions
//! of the same auction cannot both assign the player.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};
use std::collections::BTreeMap;

use crate::server::{
    config::LeagueSettings,
    data::{bid::BidRepository, player::PlayerRepository, team::TeamRepository},
    error::{league::LeagueError, AppError},
    model::{
        bid::{
            auction_closed, select_winning_bid, Bid, BidResolution, BidStatus, CreateBidParam,
            PlaceBidParam, ResolutionSummary,
        },
        roster::RosterChange,
    },
};

/// What happened to one player's auction during an automatic pass.
#[derive(Debug)]
enum AuctionOutcome {
    Assigned(RosterChange),
    Cancelled,
    StillOpen,
}

pub struct BidService<'a> {
    db: &'a DatabaseConnection,
    settings: &'a LeagueSettings,
}

impl<'a> BidService<'a> {
    pub fn new(db: &'a DatabaseConnection, settings: &'a LeagueSettings) -> Self {
        Self { db, settings }
    }

    /// Places a bid on a free agent on behalf of a team.
    ///
    /// The team's earlier open bid on the same player is cancelled, so each team holds at
    /// most one open bid per player.
    ///
    /// # Returns
    /// - `Ok(Bid)` - The new active bid
    /// - `Err(AppError::LeagueErr(_))` - Unknown team or player, player not biddable, amount
    ///   not above the current high bid, or salary cap exceeded
    pub async fn place_bid(&self, param: PlaceBidParam) -> Result<Bid, AppError> {
        if param.bid_amount <= 0 {
            return Err(LeagueError::NonPositiveBid.into());
        }

        let txn = self.db.begin().await?;
        let bid_repo = BidRepository::new(&txn);
        let player_repo = PlayerRepository::new(&txn);

        TeamRepository::new(&txn)
            .find_by_id(param.team_id)
            .await?
            .ok_or(LeagueError::TeamNotFound(param.team_id))?;

        let player = player_repo
            .find_by_id(param.player_id)
            .await?
            .ok_or(LeagueError::PlayerNotFound(param.player_id))?;
        if player.manually_removed {
            return Err(LeagueError::PlayerManuallyRemoved(player.id).into());
        }
        if !player.is_free_agent() {
            return Err(LeagueError::PlayerNotFreeAgent(player.id).into());
        }

        if let Some(current) = bid_repo.highest_open_amount(player.id).await? {
            if param.bid_amount <= current {
                return Err(LeagueError::BidTooLow {
                    amount: param.bid_amount,
                    current,
                }
                .into());
            }
        }

        if let Some(cap) = self.settings.salary_cap {
            let payroll = player_repo.team_payroll(param.team_id).await?;
            let within_cap = payroll
                .checked_add(param.bid_amount)
                .is_some_and(|total| total <= cap);
            if !within_cap {
                return Err(LeagueError::SalaryCapExceeded {
                    team_id: param.team_id,
                    payroll,
                    amount: param.bid_amount,
                    cap,
                }
                .into());
            }
        }

        bid_repo
            .cancel_open_for_team(player.id, param.team_id)
            .await?;
        let bid = bid_repo
            .create(CreateBidParam {
                player_id: player.id,
                user_id: param.user_id,
                team_id: param.team_id,
                bid_amount: param.bid_amount,
                bid_expires: Utc::now() + Duration::hours(self.settings.bid_duration_hours),
            })
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Team {} bid {} on player {} (bid {}, expires {})",
            bid.team_id,
            bid.bid_amount,
            bid.player_id,
            bid.id,
            bid.bid_expires
        );

        Ok(bid)
    }

    /// Gets every bid placed on a player, newest first.
    pub async fn get_by_player(&self, player_id: i32) -> Result<Vec<Bid>, AppError> {
        PlayerRepository::new(self.db)
            .find_by_id(player_id)
            .await?
            .ok_or(LeagueError::PlayerNotFound(player_id))?;

        BidRepository::new(self.db).get_by_player(player_id).await
    }

    /// Resolves an auction in favour of the given bid.
    ///
    /// The player is signed to the bid's team at the bid amount, or at `amount` when an
    /// admin overrides it. Every other open bid on the player is marked lost. An explicit
    /// resolution clears the player's manual removal flag.
    ///
    /// # Arguments
    /// - `bid_id` - The winning bid
    /// - `amount` - Optional salary override
    ///
    /// # Returns
    /// - `Ok(BidResolution)` - Won bid, signed player and the role update owed
    /// - `Err(AppError::LeagueErr(BidNotFound))` - Unknown bid
    /// - `Err(AppError::LeagueErr(BidAlreadyFinalized))` - Bid already resolved, including
    ///   when a concurrent resolution finalized it first
    /// - `Err(AppError::LeagueErr(PlayerNotFreeAgent))` - Player was signed in the meantime
    pub async fn resolve_bid(
        &self,
        bid_id: i32,
        amount: Option<i64>,
    ) -> Result<BidResolution, AppError> {
        if matches!(amount, Some(amount) if amount <= 0) {
            return Err(LeagueError::NonPositiveBid.into());
        }

        let txn = self.db.begin().await?;
        let bid_repo = BidRepository::new(&txn);
        let player_repo = PlayerRepository::new(&txn);

        let bid = bid_repo
            .find_by_id(bid_id)
            .await?
            .ok_or(LeagueError::BidNotFound(bid_id))?;
        if bid.finalized {
            return Err(LeagueError::BidAlreadyFinalized(bid_id).into());
        }

        let player = player_repo
            .find_by_id(bid.player_id)
            .await?
            .ok_or(LeagueError::PlayerNotFound(bid.player_id))?;
        if !player.is_free_agent() {
            return Err(LeagueError::PlayerNotFreeAgent(player.id).into());
        }

        let team = TeamRepository::new(&txn)
            .find_by_id(bid.team_id)
            .await?
            .ok_or(LeagueError::TeamNotFound(bid.team_id))?;

        let final_amount = amount.unwrap_or(bid.bid_amount);
        if bid_repo.mark_won_if_open(bid.id, final_amount).await? == 0 {
            return Err(LeagueError::BidAlreadyFinalized(bid_id).into());
        }

        let signed = player_repo
            .assign_to_team(player.id, team.id, final_amount)
            .await?;
        let lost = bid_repo
            .finalize_others(player.id, bid.id, BidStatus::Lost)
            .await?;
        let won = bid_repo
            .find_by_id(bid.id)
            .await?
            .ok_or(LeagueError::BidNotFound(bid.id))?;

        txn.commit().await?;

        tracing::info!(
            "Resolved bid {}: player {} signed to team {} at {} ({} other bids lost)",
            won.id,
            signed.id,
            team.id,
            final_amount,
            lost
        );

        let roster_change = RosterChange {
            discord_id: signed.user_id,
            previous_role_id: None,
            new_role_id: team.discord_role_id,
        };

        Ok(BidResolution {
            bid: won,
            player: signed,
            roster_change,
        })
    }

    /// Resolves every auction whose open bids have all expired.
    ///
    /// Each player resolves in its own transaction; a failure on one player is logged and
    /// does not stop the pass. Players that were manually removed or signed elsewhere are
    /// never assigned; their open bids are cancelled and counted as skipped.
    pub async fn resolve_closed_auctions(
        &self,
        now: DateTime<Utc>,
    ) -> Result<ResolutionSummary, AppError> {
        let open = BidRepository::new(self.db).get_open().await?;

        let mut auctions: BTreeMap<i32, Vec<Bid>> = BTreeMap::new();
        for bid in open {
            auctions.entry(bid.player_id).or_default().push(bid);
        }

        let mut summary = ResolutionSummary::default();
        for (player_id, bids) in auctions {
            if !auction_closed(&bids, now) {
                continue;
            }

            match self.resolve_auction(player_id, now).await {
                Ok(AuctionOutcome::Assigned(change)) => {
                    summary.resolved += 1;
                    summary.roster_changes.push(change);
                }
                Ok(AuctionOutcome::Cancelled) => summary.skipped += 1,
                Ok(AuctionOutcome::StillOpen) => {
                    tracing::debug!("Auction for player {} reopened by a new bid", player_id)
                }
                Err(e) => {
                    tracing::error!("Failed to resolve auction for player {}: {}", player_id, e)
                }
            }
        }

        if summary.resolved > 0 || summary.skipped > 0 {
            tracing::info!(
                "Auction pass resolved {} players and skipped {}",
                summary.resolved,
                summary.skipped
            );
        }

        Ok(summary)
    }

    async fn resolve_auction(
        &self,
        player_id: i32,
        now: DateTime<Utc>,
    ) -> Result<AuctionOutcome, AppError> {
        let txn = self.db.begin().await?;
        let bid_repo = BidRepository::new(&txn);
        let player_repo = PlayerRepository::new(&txn);

        let bids = bid_repo.get_open_by_player(player_id).await?;
        if !auction_closed(&bids, now) {
            return Ok(AuctionOutcome::StillOpen);
        }

        let player = match player_repo.find_by_id(player_id).await? {
            Some(player) if player.is_free_agent() && !player.manually_removed => player,
            _ => {
                let cancelled = bid_repo.cancel_open_for_player(player_id).await?;
                txn.commit().await?;

                tracing::info!(
                    "Cancelled {} bids on player {} which is not assignable",
                    cancelled,
                    player_id
                );
                return Ok(AuctionOutcome::Cancelled);
            }
        };

        let Some(winner) = select_winning_bid(&bids) else {
            return Ok(AuctionOutcome::StillOpen);
        };
        let team = TeamRepository::new(&txn)
            .find_by_id(winner.team_id)
            .await?
            .ok_or(LeagueError::TeamNotFound(winner.team_id))?;

        if bid_repo
            .mark_won_if_open(winner.id, winner.bid_amount)
            .await?
            == 0
        {
            return Ok(AuctionOutcome::StillOpen);
        }

        let signed = player_repo
            .assign_to_team(player.id, team.id, winner.bid_amount)
            .await?;
        bid_repo
            .finalize_others(player.id, winner.id, BidStatus::Lost)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Auction closed: player {} signed to team {} at {} (bid {})",
            signed.id,
            team.id,
            signed.salary,
            winner.id
        );

        Ok(AuctionOutcome::Assigned(RosterChange {
            discord_id: signed.user_id,
            previous_role_id: None,
            new_role_id: team.discord_role_id,
        }))
    }
}
