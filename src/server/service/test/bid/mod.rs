use crate::server::{
    config::LeagueSettings,
    data::{bid::BidRepository, player::PlayerRepository},
    error::{league::LeagueError, AppError},
    model::{
        bid::{BidStatus, PlaceBidParam},
        player::PlayerStatus,
    },
    service::bid::BidService,
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod place_bid;
mod resolve_closed_auctions;
