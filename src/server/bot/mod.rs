//! Discord bot integration.
//!
//! The bot connects to the league's Discord server through the gateway. Its HTTP client
//! is shared with the rest of the application for team role updates, so the bot must hold
//! the Manage Roles permission and rank above every team role.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Receive guild availability events
//! - `GUILD_MEMBERS` - Receive member join events (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
