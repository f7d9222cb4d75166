use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        player::{AssignPlayerDto, PlayerDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::player::AssignPlayerParam,
        service::{player::PlayerService, role_sync::spawn_role_sync},
        state::AppState,
    },
};

pub static PLAYER_TAG: &str = "player";

#[utoipa::path(
    post,
    path = "/api/players",
    tag = PLAYER_TAG,
    responses(
        (status = 201, description = "Registered the current user as a free agent", body = PlayerDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 409, description = "User is already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_player(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let player = PlayerService::new(&state.db)
        .register(user.discord_id)
        .await?;

    Ok((StatusCode::CREATED, Json(player.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/players/free-agents",
    tag = PLAYER_TAG,
    responses(
        (status = 200, description = "Players open for bidding", body = Vec<PlayerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_free_agents(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let players = PlayerService::new(&state.db).free_agents().await?;

    let dto: Vec<PlayerDto> = players.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    post,
    path = "/api/admin/players/{player_id}/assign",
    tag = PLAYER_TAG,
    params(
        ("player_id" = i32, Path, description = "Player ID")
    ),
    request_body = AssignPlayerDto,
    responses(
        (status = 200, description = "Player signed to the team", body = PlayerDto),
        (status = 400, description = "Negative salary", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Player or team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_player(
    State(state): State<AppState>,
    session: Session,
    Path(player_id): Path<i32>,
    Json(payload): Json<AssignPlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let (player, change) = PlayerService::new(&state.db)
        .assign(AssignPlayerParam {
            player_id,
            team_id: payload.team_id,
            salary: payload.salary,
        })
        .await?;

    spawn_role_sync(state.discord_http.clone(), state.discord_guild_id, change);

    Ok((StatusCode::OK, Json(player.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/admin/players/{player_id}/remove",
    tag = PLAYER_TAG,
    params(
        ("player_id" = i32, Path, description = "Player ID")
    ),
    responses(
        (status = 200, description = "Player released and flagged as manually removed", body = PlayerDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_player(
    State(state): State<AppState>,
    session: Session,
    Path(player_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let (player, change) = PlayerService::new(&state.db).remove(player_id).await?;

    spawn_role_sync(state.discord_http.clone(), state.discord_guild_id, change);

    Ok((StatusCode::OK, Json(player.into_dto())))
}
