//! Data transfer objects exchanged over the HTTP API.
//!
//! Domain models in `server::model` convert into these at the controller boundary.
//! Discord ids are serialized as strings since they exceed the safe integer range of JSON
//! clients.

pub mod api;
pub mod bid;
pub mod discord;
pub mod league_match;
pub mod player;
pub mod standings;
pub mod team;
pub mod user;
pub mod waiver;
pub mod waiver_priority;
