use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        league_match::{LeagueMatchDto, RecordMatchDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::league_match::RecordMatchParam,
        service::league_match::LeagueMatchService,
        state::AppState,
    },
};

pub static MATCH_TAG: &str = "match";

#[utoipa::path(
    get,
    path = "/api/matches",
    tag = MATCH_TAG,
    responses(
        (status = 200, description = "Match results, most recent first", body = Vec<LeagueMatchDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_matches(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let matches = LeagueMatchService::new(&state.db).get_all().await?;

    let dto: Vec<LeagueMatchDto> = matches.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    post,
    path = "/api/matches",
    tag = MATCH_TAG,
    request_body = RecordMatchDto,
    responses(
        (status = 201, description = "Result recorded", body = LeagueMatchDto),
        (status = 400, description = "Same team on both sides or score out of range", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn record_match(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RecordMatchDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let league_match = LeagueMatchService::new(&state.db)
        .record(RecordMatchParam::from_dto(payload, Utc::now()))
        .await?;

    Ok((StatusCode::CREATED, Json(league_match.into_dto())))
}
