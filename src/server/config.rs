use std::num::NonZeroU64;

use crate::server::error::{config::ConfigError, AppError};

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_BID_DURATION_HOURS: i64 = 24;
const DEFAULT_WAIVER_CLAIM_HOURS: i64 = 48;

/// League rules that are tunable per deployment.
#[derive(Debug, Clone, PartialEq)]
pub struct LeagueSettings {
    /// How long a newly placed bid stays open before its auction can close.
    pub bid_duration_hours: i64,
    /// How long other teams may claim a waived player.
    pub waiver_claim_hours: i64,
    /// Maximum combined salary of a roster. `None` disables the check.
    pub salary_cap: Option<i64>,
}

impl Default for LeagueSettings {
    fn default() -> Self {
        Self {
            bid_duration_hours: DEFAULT_BID_DURATION_HOURS,
            waiver_claim_hours: DEFAULT_WAIVER_CLAIM_HOURS,
            salary_cap: None,
        }
    }
}

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub app_url: String,

    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: String,
    pub discord_bot_token: String,
    pub discord_guild_id: u64,

    pub discord_auth_url: String,
    pub discord_token_url: String,

    /// Shared secret for cron endpoints and first-admin bootstrap.
    pub admin_verification_key: Option<String>,

    pub league: LeagueSettings,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            app_url: required("APP_URL")?,
            discord_client_id: required("DISCORD_CLIENT_ID")?,
            discord_client_secret: required("DISCORD_CLIENT_SECRET")?,
            discord_redirect_url: required("DISCORD_REDIRECT_URL")?,
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            discord_guild_id: parse::<NonZeroU64>(
                "DISCORD_GUILD_ID",
                &required("DISCORD_GUILD_ID")?,
            )?
            .get(),
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
            admin_verification_key: std::env::var("ADMIN_VERIFICATION_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            league: LeagueSettings {
                bid_duration_hours: optional("BID_DURATION_HOURS")?
                    .unwrap_or(DEFAULT_BID_DURATION_HOURS),
                waiver_claim_hours: optional("WAIVER_CLAIM_HOURS")?
                    .unwrap_or(DEFAULT_WAIVER_CLAIM_HOURS),
                salary_cap: optional("SALARY_CAP")?,
            },
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional<T: std::str::FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(name) {
        Ok(value) => parse(name, &value).map(Some),
        Err(_) => Ok(None),
    }
}

fn parse<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value.parse::<T>().map_err(|_| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
    })
}
