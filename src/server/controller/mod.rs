//! HTTP handlers.
//!
//! Handlers check access through `AuthGuard` or `AdminKeyGuard`, convert DTOs into domain
//! parameters, call a service and convert the result back. Discord role updates owed by a
//! roster change are queued here, after the service has committed.

pub mod auth;
pub mod bid;
pub mod cron;
pub mod discord;
pub mod league_match;
pub mod player;
pub mod standings;
pub mod team;
pub mod waiver;
pub mod waiver_priority;
