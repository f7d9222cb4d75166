//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing league rules and validation
//! - **Orchestration**: Coordinating multiple repository calls and external services
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Running multi-step roster mutations atomically
//!
//! Services that change a roster return a `RosterChange` instead of touching Discord
//! themselves; callers hand it to `role_sync::spawn_role_sync` after the commit.

pub mod auth;
pub mod bid;
pub mod league_match;
pub mod player;
pub mod role_sync;
pub mod standings;
pub mod team;
pub mod waiver;
pub mod waiver_priority;

#[cfg(test)]
mod test;
