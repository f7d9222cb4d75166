//! SeaORM entity models for the league database.

pub mod prelude;

pub mod league_match;
pub mod player;
pub mod player_bid;
pub mod team;
pub mod user;
pub mod waiver;
pub mod waiver_claim;
pub mod waiver_priority;
