use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth, bid, cron, discord, league_match, player, standings, team, waiver, waiver_priority,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(info(
    title = "leagueboard",
    description = "Free agency, waivers and standings for a Discord league"
))]
struct ApiDoc;

/// Builds the API router and serves its OpenAPI document under `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        // auth
        .routes(routes!(auth::login))
        .routes(routes!(auth::callback))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        // teams
        .routes(routes!(team::get_teams))
        .routes(routes!(team::create_team))
        .routes(routes!(team::update_team))
        .routes(routes!(team::get_roster))
        // players
        .routes(routes!(player::register_player))
        .routes(routes!(player::get_free_agents))
        .routes(routes!(player::assign_player))
        .routes(routes!(player::remove_player))
        // bids
        .routes(routes!(bid::place_bid))
        .routes(routes!(bid::get_player_bids))
        .routes(routes!(bid::resolve_bid))
        // waivers
        .routes(routes!(waiver::waive_player))
        .routes(routes!(waiver::get_waivers))
        .routes(routes!(waiver::claim_waiver))
        .routes(routes!(waiver::process_waiver))
        .routes(routes!(waiver_priority::get_waiver_priority))
        .routes(routes!(waiver_priority::reset_waiver_priority))
        // matches and standings
        .routes(routes!(league_match::get_matches, league_match::record_match))
        .routes(routes!(standings::get_standings))
        // discord
        .routes(routes!(discord::assign_roles))
        // cron
        .routes(routes!(cron::resolve_bids))
        .routes(routes!(cron::process_waivers))
        .routes(routes!(cron::reset_waiver_priority))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
