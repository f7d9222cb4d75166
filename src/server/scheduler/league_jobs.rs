use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::http::Http;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    config::LeagueSettings,
    error::AppError,
    model::{bid::ResolutionSummary, waiver_priority::PriorityEntry},
    service::{
        bid::BidService,
        role_sync::spawn_role_sync,
        waiver::{ProcessedWaivers, WaiverService},
        waiver_priority::WaiverPriorityService,
    },
};

/// Every minute, on the minute.
const LEAGUE_TICK_SCHEDULE: &str = "0 * * * * *";
/// Mondays at 06:00 UTC.
const PRIORITY_RESET_SCHEDULE: &str = "0 0 6 * * Mon";

/// Starts the league scheduler
///
/// Runs two jobs:
/// - every minute, resolves closed auctions and processes waivers past their claim deadline
/// - weekly, resets the waiver priority ledger from the standings
///
/// Job failures are logged and never stop the scheduler.
///
/// # Arguments
/// - `db`: Database connection
/// - `discord_http`: Discord HTTP client used for role sync after roster changes
/// - `guild_id`: League Discord server
/// - `settings`: League rules
pub async fn start_scheduler(
    db: DatabaseConnection,
    discord_http: Arc<Http>,
    guild_id: u64,
    settings: LeagueSettings,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let tick_db = db.clone();
    let tick_http = discord_http.clone();
    let tick_settings = settings.clone();
    let tick = Job::new_async(LEAGUE_TICK_SCHEDULE, move |_uuid, _lock| {
        let db = tick_db.clone();
        let http = tick_http.clone();
        let settings = tick_settings.clone();

        Box::pin(async move {
            if let Err(e) = run_auction_pass(&db, &settings, http.clone(), guild_id).await {
                tracing::error!("Error resolving closed auctions: {}", e);
            }
            if let Err(e) = run_waiver_pass(&db, &settings, http, guild_id).await {
                tracing::error!("Error processing expired waivers: {}", e);
            }
        })
    })?;

    let reset_db = db.clone();
    let reset = Job::new_async(PRIORITY_RESET_SCHEDULE, move |_uuid, _lock| {
        let db = reset_db.clone();

        Box::pin(async move {
            if let Err(e) = run_priority_reset(&db).await {
                tracing::error!("Error resetting waiver priority: {}", e);
            }
        })
    })?;

    scheduler.add(tick).await?;
    scheduler.add(reset).await?;
    scheduler.start().await?;

    tracing::info!("League scheduler started");

    Ok(())
}

/// Resolves every closed auction and queues the resulting Discord role updates.
pub async fn run_auction_pass(
    db: &DatabaseConnection,
    settings: &LeagueSettings,
    discord_http: Arc<Http>,
    guild_id: u64,
) -> Result<ResolutionSummary, AppError> {
    let mut summary = BidService::new(db, settings)
        .resolve_closed_auctions(Utc::now())
        .await?;

    for change in std::mem::take(&mut summary.roster_changes) {
        spawn_role_sync(discord_http.clone(), guild_id, change);
    }

    Ok(summary)
}

/// Processes waivers past their claim deadline and queues the resulting role updates.
pub async fn run_waiver_pass(
    db: &DatabaseConnection,
    settings: &LeagueSettings,
    discord_http: Arc<Http>,
    guild_id: u64,
) -> Result<ProcessedWaivers, AppError> {
    let mut outcome = WaiverService::new(db, settings)
        .process_expired(Utc::now())
        .await?;

    for change in std::mem::take(&mut outcome.roster_changes) {
        spawn_role_sync(discord_http.clone(), guild_id, change);
    }

    Ok(outcome)
}

/// Recomputes the waiver priority ledger from the current standings.
pub async fn run_priority_reset(db: &DatabaseConnection) -> Result<Vec<PriorityEntry>, AppError> {
    WaiverPriorityService::new(db).reset_from_standings().await
}
