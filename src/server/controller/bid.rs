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
        bid::{BidDto, BidResolutionDto, PlaceBidDto, ResolveBidDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::bid::PlaceBidParam,
        service::{bid::BidService, role_sync::spawn_role_sync},
        state::AppState,
    },
};

pub static BID_TAG: &str = "bid";

#[utoipa::path(
    post,
    path = "/api/bids",
    tag = BID_TAG,
    request_body = PlaceBidDto,
    responses(
        (status = 201, description = "Bid placed", body = BidDto),
        (status = 400, description = "Amount not positive, not above the highest bid, or over the salary cap", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not own the bidding team", body = ErrorDto),
        (status = 404, description = "Team or player not found", body = ErrorDto),
        (status = 409, description = "Player is not open for bidding", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn place_bid(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<PlaceBidDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::TeamOwner(payload.team_id)])
        .await?;

    let bid = BidService::new(&state.db, &state.league)
        .place_bid(PlaceBidParam {
            user_id: user.discord_id,
            team_id: payload.team_id,
            player_id: payload.player_id,
            bid_amount: payload.bid_amount,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(bid.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/players/{player_id}/bids",
    tag = BID_TAG,
    params(
        ("player_id" = i32, Path, description = "Player ID")
    ),
    responses(
        (status = 200, description = "Bids on the player, newest first", body = Vec<BidDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_player_bids(
    State(state): State<AppState>,
    Path(player_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let bids = BidService::new(&state.db, &state.league)
        .get_by_player(player_id)
        .await?;

    let dto: Vec<BidDto> = bids.into_iter().map(|bid| bid.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    post,
    path = "/api/admin/bids/{bid_id}/resolve",
    tag = BID_TAG,
    params(
        ("bid_id" = i32, Path, description = "ID of the winning bid")
    ),
    request_body = ResolveBidDto,
    responses(
        (status = 200, description = "Bid won and player signed", body = BidResolutionDto),
        (status = 400, description = "Override amount is not positive", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Bid not found", body = ErrorDto),
        (status = 409, description = "Bid already finalized or player no longer a free agent", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn resolve_bid(
    State(state): State<AppState>,
    session: Session,
    Path(bid_id): Path<i32>,
    Json(payload): Json<ResolveBidDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let resolution = BidService::new(&state.db, &state.league)
        .resolve_bid(bid_id, payload.bid_amount)
        .await?;

    let (dto, change) = resolution.into_parts();
    spawn_role_sync(state.discord_http.clone(), state.discord_guild_id, change);

    Ok((StatusCode::OK, Json(dto)))
}
