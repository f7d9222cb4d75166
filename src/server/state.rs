//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;
use serenity::http::Http;
use std::sync::Arc;

use crate::server::config::{Config, LeagueSettings};

/// Type alias for the OAuth2 client configured for Discord authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// HTTP client for Discord OAuth and user API requests.
    ///
    /// Configured without redirect following, as required by the OAuth token exchange.
    pub http_client: reqwest::Client,

    /// OAuth2 client configured for Discord login.
    pub oauth_client: OAuth2Client,

    /// Discord HTTP client shared with the bot, used for role updates.
    pub discord_http: Arc<Http>,

    /// Discord guild the league runs in.
    pub discord_guild_id: u64,

    /// Application base URL, used as the post-login redirect target.
    pub app_url: String,

    /// Shared secret for cron endpoints and admin bootstrap; `None` disables both.
    pub admin_verification_key: Option<String>,

    /// Tunable league rules.
    pub league: LeagueSettings,
}

impl AppState {
    /// Assembles the shared state from the started services and the loaded configuration.
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        discord_http: Arc<Http>,
        config: &Config,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            discord_http,
            discord_guild_id: config.discord_guild_id,
            app_url: config.app_url.clone(),
            admin_verification_key: config.admin_verification_key.clone(),
            league: config.league.clone(),
        }
    }
}
