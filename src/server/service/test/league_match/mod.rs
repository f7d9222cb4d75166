use crate::server::{
    error::{league::LeagueError, AppError},
    model::league_match::RecordMatchParam,
    service::{
        league_match::{LeagueMatchService, MAX_SCORE},
        standings::StandingsService,
    },
};
use chrono::Utc;
use test_utils::{builder::TestBuilder, factory};

mod record;
