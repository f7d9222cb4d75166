use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        waiver::{ClaimWaiverDto, WaivePlayerDto, WaiverClaimDto, WaiverDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::{role_sync::spawn_role_sync, waiver::WaiverService},
        state::AppState,
    },
};

pub static WAIVER_TAG: &str = "waiver";

#[utoipa::path(
    post,
    path = "/api/teams/{team_id}/waivers",
    tag = WAIVER_TAG,
    params(
        ("team_id" = i32, Path, description = "ID of the team waiving the player")
    ),
    request_body = WaivePlayerDto,
    responses(
        (status = 201, description = "Player placed on waivers", body = WaiverDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not own the team", body = ErrorDto),
        (status = 404, description = "Team or player not found", body = ErrorDto),
        (status = 409, description = "Player is not signed to the team", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn waive_player(
    State(state): State<AppState>,
    session: Session,
    Path(team_id): Path<i32>,
    Json(payload): Json<WaivePlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TeamOwner(team_id)])
        .await?;

    let (waiver, change) = WaiverService::new(&state.db, &state.league)
        .waive_player(team_id, payload.player_id)
        .await?;

    spawn_role_sync(state.discord_http.clone(), state.discord_guild_id, change);

    Ok((StatusCode::CREATED, Json(waiver.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/waivers",
    tag = WAIVER_TAG,
    responses(
        (status = 200, description = "Waivers still open for claims", body = Vec<WaiverDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_waivers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let waivers = WaiverService::new(&state.db, &state.league)
        .get_pending()
        .await?;

    let dto: Vec<WaiverDto> = waivers.into_iter().map(|w| w.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    post,
    path = "/api/waivers/{waiver_id}/claims",
    tag = WAIVER_TAG,
    params(
        ("waiver_id" = i32, Path, description = "Waiver ID")
    ),
    request_body = ClaimWaiverDto,
    responses(
        (status = 201, description = "Claim recorded", body = WaiverClaimDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not own the claiming team", body = ErrorDto),
        (status = 404, description = "Waiver or team not found", body = ErrorDto),
        (status = 409, description = "Waiver closed, deadline passed, own waiver or duplicate claim", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn claim_waiver(
    State(state): State<AppState>,
    session: Session,
    Path(waiver_id): Path<i32>,
    Json(payload): Json<ClaimWaiverDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TeamOwner(payload.team_id)])
        .await?;

    let claim = WaiverService::new(&state.db, &state.league)
        .claim(waiver_id, payload.team_id, Utc::now())
        .await?;

    Ok((StatusCode::CREATED, Json(claim.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/admin/waivers/{waiver_id}/process",
    tag = WAIVER_TAG,
    params(
        ("waiver_id" = i32, Path, description = "Waiver ID")
    ),
    responses(
        (status = 200, description = "Waiver resolved as claimed or cleared", body = WaiverDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Waiver not found", body = ErrorDto),
        (status = 409, description = "Waiver already processed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn process_waiver(
    State(state): State<AppState>,
    session: Session,
    Path(waiver_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let resolution = WaiverService::new(&state.db, &state.league)
        .process_waiver(waiver_id)
        .await?;

    if let Some(change) = resolution.roster_change {
        spawn_role_sync(state.discord_http.clone(), state.discord_guild_id, change);
    }

    Ok((StatusCode::OK, Json(resolution.waiver.into_dto())))
}
