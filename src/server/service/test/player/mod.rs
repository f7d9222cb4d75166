use crate::server::{
    data::bid::BidRepository,
    error::{league::LeagueError, AppError},
    model::{
        bid::BidStatus,
        player::{AssignPlayerParam, PlayerStatus},
    },
    service::player::PlayerService,
};
use test_utils::{builder::TestBuilder, factory};

mod assign;
