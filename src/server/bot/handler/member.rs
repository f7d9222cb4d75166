use sea_orm::DatabaseConnection;
use serenity::all::{Context, Member};

use crate::server::{
    data::{player::PlayerRepository, team::TeamRepository},
    error::AppError,
    model::{player::PlayerStatus, roster::RosterChange},
    service::role_sync::RoleSyncService,
};

/// Handles the guild_member_addition event when a member joins the league server.
///
/// Members who are signed to a team get that team's role, so rejoining the server
/// restores it.
pub async fn handle_guild_member_addition(
    db: &DatabaseConnection,
    ctx: Context,
    guild_id: u64,
    new_member: Member,
) {
    let discord_id = new_member.user.id.get();

    let change = match signed_team_role(db, discord_id).await {
        Ok(Some(change)) => change,
        Ok(None) => return,
        Err(e) => {
            tracing::error!("Failed to look up team of joining member {}: {}", discord_id, e);
            return;
        }
    };

    if let Err(e) = RoleSyncService::new(&ctx.http, guild_id).apply(&change).await {
        tracing::warn!("Failed to restore team role of member {}: {}", discord_id, e);
    }
}

/// Builds the role grant owed to a signed player, if any.
async fn signed_team_role(
    db: &DatabaseConnection,
    discord_id: u64,
) -> Result<Option<RosterChange>, AppError> {
    let Some(player) = PlayerRepository::new(db).find_by_user(discord_id).await? else {
        return Ok(None);
    };
    let (PlayerStatus::Signed, Some(team_id)) = (player.status, player.team_id) else {
        return Ok(None);
    };
    let Some(team) = TeamRepository::new(db).find_by_id(team_id).await? else {
        return Ok(None);
    };

    Ok(team.discord_role_id.map(|role_id| RosterChange {
        discord_id,
        previous_role_id: None,
        new_role_id: Some(role_id),
    }))
}
