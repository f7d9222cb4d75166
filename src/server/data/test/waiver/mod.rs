use crate::server::{
    data::waiver::WaiverRepository,
    error::{league::LeagueError, AppError},
    model::waiver::WaiverStatus,
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod claims;
mod close_if_pending;
mod get_expired_pending;
