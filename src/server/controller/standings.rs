use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, standings::StandingDto},
    server::{error::AppError, service::standings::StandingsService, state::AppState},
};

pub static STANDINGS_TAG: &str = "standings";

#[utoipa::path(
    get,
    path = "/api/standings",
    tag = STANDINGS_TAG,
    responses(
        (status = 200, description = "League table in display order", body = Vec<StandingDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_standings(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let standings = StandingsService::new(&state.db).get().await?;

    let dto: Vec<StandingDto> = standings.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}
