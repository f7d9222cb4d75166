use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto, bid::ResolutionSummaryDto, waiver::ProcessedWaiversDto,
        waiver_priority::WaiverPriorityDto,
    },
    server::{
        error::AppError,
        middleware::admin_key::AdminKeyGuard,
        scheduler::league_jobs::{run_auction_pass, run_priority_reset, run_waiver_pass},
        state::AppState,
    },
};

pub static CRON_TAG: &str = "cron";

#[utoipa::path(
    post,
    path = "/api/cron/bids",
    tag = CRON_TAG,
    params(
        ("x-admin-key" = String, Header, description = "Admin verification key")
    ),
    responses(
        (status = 200, description = "Closed auctions resolved", body = ResolutionSummaryDto),
        (status = 401, description = "Missing or invalid admin key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn resolve_bids(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AdminKeyGuard::new(state.admin_verification_key.as_deref()).require(&headers)?;

    let summary = run_auction_pass(
        &state.db,
        &state.league,
        state.discord_http.clone(),
        state.discord_guild_id,
    )
    .await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/cron/waivers",
    tag = CRON_TAG,
    params(
        ("x-admin-key" = String, Header, description = "Admin verification key")
    ),
    responses(
        (status = 200, description = "Expired waivers processed", body = ProcessedWaiversDto),
        (status = 401, description = "Missing or invalid admin key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn process_waivers(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AdminKeyGuard::new(state.admin_verification_key.as_deref()).require(&headers)?;

    let outcome = run_waiver_pass(
        &state.db,
        &state.league,
        state.discord_http.clone(),
        state.discord_guild_id,
    )
    .await?;

    Ok((
        StatusCode::OK,
        Json(ProcessedWaiversDto {
            processed: outcome.processed,
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/cron/waiver-priority",
    tag = CRON_TAG,
    params(
        ("x-admin-key" = String, Header, description = "Admin verification key")
    ),
    responses(
        (status = 200, description = "Ledger recomputed from standings", body = Vec<WaiverPriorityDto>),
        (status = 401, description = "Missing or invalid admin key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_waiver_priority(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AdminKeyGuard::new(state.admin_verification_key.as_deref()).require(&headers)?;

    let ledger = run_priority_reset(&state.db).await?;

    let dto: Vec<WaiverPriorityDto> = ledger.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}
