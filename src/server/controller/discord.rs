use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        discord::{AssignRolesDto, AssignRolesResultDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::role_sync::RoleSyncService,
        state::AppState,
        util::parse::parse_discord_id_input,
    },
};

pub static DISCORD_TAG: &str = "discord";

#[utoipa::path(
    post,
    path = "/api/discord/assign-roles",
    tag = DISCORD_TAG,
    request_body = AssignRolesDto,
    responses(
        (status = 200, description = "Member's team roles resynced", body = AssignRolesResultDto),
        (status = 400, description = "Invalid Discord id", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Discord API or internal error", body = ErrorDto)
    ),
)]
pub async fn assign_roles(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<AssignRolesDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let discord_id = parse_discord_id_input("discord_id", Some(payload.discord_id))?
        .ok_or_else(|| AppError::BadRequest("discord_id is required".to_string()))?;

    let role_id = RoleSyncService::new(&state.discord_http, state.discord_guild_id)
        .resync_member(&state.db, discord_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(AssignRolesResultDto {
            discord_id: discord_id.to_string(),
            role_id: role_id.map(|id| id.to_string()),
        }),
    ))
}
