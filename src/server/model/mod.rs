//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.

pub mod bid;
pub mod league_match;
pub mod player;
pub mod roster;
pub mod standings;
pub mod team;
pub mod user;
pub mod waiver;
pub mod waiver_priority;
