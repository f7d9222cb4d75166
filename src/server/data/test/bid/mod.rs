use crate::server::{
    data::bid::BidRepository,
    error::AppError,
    model::bid::{BidStatus, CreateBidParam},
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod cancel;
mod mark_won_if_open;
