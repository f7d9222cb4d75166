//! Waiving players and arbitrating claims through the priority ledger.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};
use std::collections::HashMap;

use crate::server::{
    config::LeagueSettings,
    data::{
        player::PlayerRepository, team::TeamRepository, waiver::WaiverRepository,
        waiver_priority::WaiverPriorityRepository,
    },
    error::{league::LeagueError, AppError},
    model::{
        player::PlayerStatus,
        roster::RosterChange,
        waiver::{select_winning_claim, Waiver, WaiverClaim, WaiverResolution, WaiverStatus},
    },
};

/// Outcome of processing every expired waiver.
#[derive(Debug, Clone, Default)]
pub struct ProcessedWaivers {
    pub processed: usize,
    pub roster_changes: Vec<RosterChange>,
}

pub struct WaiverService<'a> {
    db: &'a DatabaseConnection,
    settings: &'a LeagueSettings,
}

impl<'a> WaiverService<'a> {
    pub fn new(db: &'a DatabaseConnection, settings: &'a LeagueSettings) -> Self {
        Self { db, settings }
    }

    /// Puts a signed player on waivers.
    ///
    /// The player leaves the team immediately with status waived and keeps their salary.
    /// Other teams may claim them until the claim deadline.
    ///
    /// # Returns
    /// - `Ok((Waiver, RosterChange))` - The pending waiver and the role removal owed
    /// - `Err(AppError::LeagueErr(PlayerNotOnTeam))` - Player is not signed to the team
    pub async fn waive_player(
        &self,
        team_id: i32,
        player_id: i32,
    ) -> Result<(Waiver, RosterChange), AppError> {
        let txn = self.db.begin().await?;
        let player_repo = PlayerRepository::new(&txn);

        let team = TeamRepository::new(&txn)
            .find_by_id(team_id)
            .await?
            .ok_or(LeagueError::TeamNotFound(team_id))?;
        let player = player_repo
            .find_by_id(player_id)
            .await?
            .ok_or(LeagueError::PlayerNotFound(player_id))?;
        if player.team_id != Some(team.id) {
            return Err(LeagueError::PlayerNotOnTeam { player_id, team_id }.into());
        }

        let waived = player_repo.mark_waived(player.id).await?;
        let now = Utc::now();
        let waiver = WaiverRepository::new(&txn)
            .create(
                player.id,
                team.id,
                now,
                now + Duration::hours(self.settings.waiver_claim_hours),
            )
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Team {} waived player {} (waiver {}, deadline {})",
            team.id,
            player.id,
            waiver.id,
            waiver.claim_deadline
        );

        let change = RosterChange {
            discord_id: waived.user_id,
            previous_role_id: team.discord_role_id,
            new_role_id: None,
        };

        Ok((waiver, change))
    }

    /// Records a team's claim on a pending waiver.
    ///
    /// # Returns
    /// - `Ok(WaiverClaim)` - The recorded claim
    /// - `Err(AppError::LeagueErr(WaiverClosed))` - Waiver already processed
    /// - `Err(AppError::LeagueErr(ClaimDeadlinePassed))` - Claim window is over
    /// - `Err(AppError::LeagueErr(OwnWaiverClaim))` - Team claims its own waived player
    /// - `Err(AppError::LeagueErr(DuplicateClaim))` - Team already claimed this waiver
    pub async fn claim(
        &self,
        waiver_id: i32,
        team_id: i32,
        now: DateTime<Utc>,
    ) -> Result<WaiverClaim, AppError> {
        let txn = self.db.begin().await?;
        let waiver_repo = WaiverRepository::new(&txn);

        let waiver = waiver_repo
            .find_by_id(waiver_id)
            .await?
            .ok_or(LeagueError::WaiverNotFound(waiver_id))?;
        if waiver.status != WaiverStatus::Pending {
            return Err(LeagueError::WaiverClosed(waiver_id).into());
        }
        if now >= waiver.claim_deadline {
            return Err(LeagueError::ClaimDeadlinePassed(waiver_id).into());
        }

        TeamRepository::new(&txn)
            .find_by_id(team_id)
            .await?
            .ok_or(LeagueError::TeamNotFound(team_id))?;
        if waiver.waiving_team_id == team_id {
            return Err(LeagueError::OwnWaiverClaim(team_id).into());
        }
        if waiver_repo.find_claim(waiver_id, team_id).await?.is_some() {
            return Err(LeagueError::DuplicateClaim { waiver_id, team_id }.into());
        }

        let claim = waiver_repo.create_claim(waiver_id, team_id).await?;

        txn.commit().await?;

        tracing::info!("Team {} claimed waiver {}", team_id, waiver_id);

        Ok(claim)
    }

    pub async fn get_pending(&self) -> Result<Vec<Waiver>, AppError> {
        WaiverRepository::new(self.db).get_pending().await
    }

    /// Resolves a pending waiver.
    ///
    /// The claiming team with the best waiver priority wins the player at their current
    /// salary and moves to the back of the ledger. Without claims, or when the player was
    /// manually removed, the player becomes a free agent and the waiver is cleared. A player
    /// that left waivers some other way (such as an admin assignment) is left untouched.
    ///
    /// # Returns
    /// - `Ok(WaiverResolution)` - Processed waiver and the role update owed, if any
    /// - `Err(AppError::LeagueErr(WaiverClosed))` - Already processed, including by a
    ///   concurrent run
    pub async fn process_waiver(&self, waiver_id: i32) -> Result<WaiverResolution, AppError> {
        let txn = self.db.begin().await?;
        let waiver_repo = WaiverRepository::new(&txn);
        let player_repo = PlayerRepository::new(&txn);
        let priority_repo = WaiverPriorityRepository::new(&txn);

        let waiver = waiver_repo
            .find_by_id(waiver_id)
            .await?
            .ok_or(LeagueError::WaiverNotFound(waiver_id))?;
        if waiver.status != WaiverStatus::Pending {
            return Err(LeagueError::WaiverClosed(waiver_id).into());
        }

        let player = player_repo
            .find_by_id(waiver.player_id)
            .await?
            .ok_or(LeagueError::PlayerNotFound(waiver.player_id))?;
        let still_waived = player.status == PlayerStatus::Waived && player.team_id.is_none();

        let claims = waiver_repo.get_claims(waiver_id).await?;
        let priorities: HashMap<i32, i32> = priority_repo
            .get_ordered()
            .await?
            .into_iter()
            .map(|entry| (entry.team_id, entry.priority_order))
            .collect();
        let winner = if still_waived && !player.manually_removed {
            select_winning_claim(&claims, &priorities).map(|claim| claim.team_id)
        } else {
            None
        };

        let roster_change = match winner {
            Some(team_id) => {
                if waiver_repo
                    .close_if_pending(waiver_id, WaiverStatus::Claimed, Some(team_id))
                    .await?
                    == 0
                {
                    return Err(LeagueError::WaiverClosed(waiver_id).into());
                }

                let team = TeamRepository::new(&txn)
                    .find_by_id(team_id)
                    .await?
                    .ok_or(LeagueError::TeamNotFound(team_id))?;
                let signed = player_repo
                    .assign_to_team(player.id, team.id, player.salary)
                    .await?;
                priority_repo.move_to_back(team.id).await?;

                tracing::info!(
                    "Waiver {}: player {} claimed by team {}",
                    waiver_id,
                    signed.id,
                    team.id
                );

                Some(RosterChange {
                    discord_id: signed.user_id,
                    previous_role_id: None,
                    new_role_id: team.discord_role_id,
                })
            }
            None => {
                if waiver_repo
                    .close_if_pending(waiver_id, WaiverStatus::Cleared, None)
                    .await?
                    == 0
                {
                    return Err(LeagueError::WaiverClosed(waiver_id).into());
                }

                if still_waived {
                    player_repo
                        .release(player.id, player.manually_removed)
                        .await?;
                    tracing::info!(
                        "Waiver {}: player {} cleared to free agency",
                        waiver_id,
                        player.id
                    );
                } else {
                    tracing::debug!(
                        "Waiver {}: player {} already left waivers",
                        waiver_id,
                        player.id
                    );
                }

                None
            }
        };

        let waiver = waiver_repo
            .find_by_id(waiver_id)
            .await?
            .ok_or(LeagueError::WaiverNotFound(waiver_id))?;

        txn.commit().await?;

        Ok(WaiverResolution {
            waiver,
            roster_change,
        })
    }

    /// Processes every pending waiver whose claim deadline has passed.
    ///
    /// Waivers processed concurrently by someone else are skipped; other failures are
    /// logged and do not stop the pass.
    pub async fn process_expired(&self, now: DateTime<Utc>) -> Result<ProcessedWaivers, AppError> {
        let due = WaiverRepository::new(self.db)
            .get_expired_pending(now)
            .await?;

        let mut outcome = ProcessedWaivers::default();
        for waiver in due {
            match self.process_waiver(waiver.id).await {
                Ok(resolution) => {
                    outcome.processed += 1;
                    outcome.roster_changes.extend(resolution.roster_change);
                }
                Err(AppError::LeagueErr(LeagueError::WaiverClosed(id))) => {
                    tracing::debug!("Waiver {} was processed concurrently", id)
                }
                Err(e) => tracing::error!("Failed to process waiver {}: {}", waiver.id, e),
            }
        }

        if outcome.processed > 0 {
            tracing::info!("Processed {} expired waivers", outcome.processed);
        }

        Ok(outcome)
    }
}
