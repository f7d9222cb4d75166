//! Discord team role synchronisation.
//!
//! Role updates are best effort. They run after the database commit and a failure never
//! rolls back or fails the roster change that caused it.

use sea_orm::DatabaseConnection;
use serenity::{
    all::{GuildId, RoleId, UserId},
    http::Http,
};
use std::sync::Arc;

use crate::server::{
    data::{player::PlayerRepository, team::TeamRepository},
    error::AppError,
    model::roster::RosterChange,
};

const AUDIT_LOG_REASON: &str = "League roster change";

pub struct RoleSyncService<'a> {
    http: &'a Http,
    guild_id: GuildId,
}

impl<'a> RoleSyncService<'a> {
    pub fn new(http: &'a Http, guild_id: u64) -> Self {
        Self {
            http,
            guild_id: GuildId::new(guild_id),
        }
    }

    /// Removes the previous team role and adds the new one.
    ///
    /// # Returns
    /// - `Ok(())` - Roles updated, or nothing to do
    /// - `Err(AppError::DiscordErr)` - Discord API request failed
    pub async fn apply(&self, change: &RosterChange) -> Result<(), AppError> {
        if change.is_noop() {
            return Ok(());
        }

        let user_id = UserId::new(change.discord_id);

        if let Some(role_id) = change.previous_role_id {
            self.http
                .remove_member_role(
                    self.guild_id,
                    user_id,
                    RoleId::new(role_id),
                    Some(AUDIT_LOG_REASON),
                )
                .await?;
        }

        if let Some(role_id) = change.new_role_id {
            self.http
                .add_member_role(
                    self.guild_id,
                    user_id,
                    RoleId::new(role_id),
                    Some(AUDIT_LOG_REASON),
                )
                .await?;
        }

        tracing::debug!(
            "Synced roles of member {}: {:?} -> {:?}",
            change.discord_id,
            change.previous_role_id,
            change.new_role_id
        );

        Ok(())
    }

    /// Brings one member's team roles in line with the database.
    ///
    /// Every team role other than the member's current team role is removed, then the
    /// current team role is added.
    ///
    /// # Returns
    /// - `Ok(Option<u64>)` - The role the member now holds, if any
    pub async fn resync_member(
        &self,
        db: &DatabaseConnection,
        discord_id: u64,
    ) -> Result<Option<u64>, AppError> {
        let teams = TeamRepository::new(db).get_all().await?;
        let team_id = PlayerRepository::new(db)
            .find_by_user(discord_id)
            .await?
            .and_then(|player| player.team_id);
        let current_role = teams
            .iter()
            .find(|team| Some(team.id) == team_id)
            .and_then(|team| team.discord_role_id);
        let team_roles: Vec<u64> = teams
            .iter()
            .filter_map(|team| team.discord_role_id)
            .collect();

        let user_id = UserId::new(discord_id);
        for role_id in stale_roles(&team_roles, current_role) {
            self.http
                .remove_member_role(
                    self.guild_id,
                    user_id,
                    RoleId::new(role_id),
                    Some(AUDIT_LOG_REASON),
                )
                .await?;
        }
        if let Some(role_id) = current_role {
            self.http
                .add_member_role(
                    self.guild_id,
                    user_id,
                    RoleId::new(role_id),
                    Some(AUDIT_LOG_REASON),
                )
                .await?;
        }

        tracing::info!("Resynced team role of member {} to {:?}", discord_id, current_role);

        Ok(current_role)
    }
}

/// Applies a roster change in the background.
///
/// Failures are logged at warn level and otherwise ignored.
pub fn spawn_role_sync(http: Arc<Http>, guild_id: u64, change: RosterChange) {
    if change.is_noop() {
        return;
    }

    tokio::spawn(async move {
        if let Err(e) = RoleSyncService::new(&http, guild_id).apply(&change).await {
            tracing::warn!(
                "Failed to sync Discord roles for member {}: {}",
                change.discord_id,
                e
            );
        }
    });
}

/// Team roles a member should not hold, given their current team role.
fn stale_roles(team_roles: &[u64], current_role: Option<u64>) -> Vec<u64> {
    let mut stale: Vec<u64> = team_roles
        .iter()
        .copied()
        .filter(|role_id| Some(*role_id) != current_role)
        .collect();
    stale.sort_unstable();
    stale.dedup();
    stale
}
