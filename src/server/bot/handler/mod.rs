use sea_orm::DatabaseConnection;
use serenity::all::{Context, EventHandler, Member, Ready};
use serenity::async_trait;

pub mod member;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    /// The league's Discord server; events from other servers are ignored.
    pub guild_id: u64,
}

impl Handler {
    pub fn new(db: DatabaseConnection, guild_id: u64) -> Self {
        Self { db, guild_id }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        if new_member.guild_id.get() != self.guild_id {
            return;
        }

        member::handle_guild_member_addition(&self.db, ctx, self.guild_id, new_member).await;
    }
}
