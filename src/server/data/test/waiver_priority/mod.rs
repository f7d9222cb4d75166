use crate::server::{
    data::waiver_priority::WaiverPriorityRepository, error::AppError,
    model::waiver_priority::PriorityEntry,
};
use test_utils::{builder::TestBuilder, factory};

mod ensure_team;
