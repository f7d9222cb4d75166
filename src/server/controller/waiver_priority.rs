use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, waiver_priority::WaiverPriorityDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::waiver_priority::WaiverPriorityService,
        state::AppState,
    },
};

pub static WAIVER_PRIORITY_TAG: &str = "waiver_priority";

#[utoipa::path(
    get,
    path = "/api/waiver-priority",
    tag = WAIVER_PRIORITY_TAG,
    responses(
        (status = 200, description = "Ledger ordered from highest priority", body = Vec<WaiverPriorityDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_waiver_priority(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let ledger = WaiverPriorityService::new(&state.db).get_ordered().await?;

    let dto: Vec<WaiverPriorityDto> = ledger.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    post,
    path = "/api/admin/waiver-priority/reset",
    tag = WAIVER_PRIORITY_TAG,
    responses(
        (status = 200, description = "Ledger recomputed from standings", body = Vec<WaiverPriorityDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_waiver_priority(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let ledger = WaiverPriorityService::new(&state.db)
        .reset_from_standings()
        .await?;

    let dto: Vec<WaiverPriorityDto> = ledger.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}
