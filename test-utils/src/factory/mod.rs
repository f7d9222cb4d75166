//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Parent rows referenced by foreign keys must exist first;
//! the `helpers` module bundles the common parent chains.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::user::create_user(&db).await?;
//!     let team = factory::team::create_team(&db).await?;
//!
//!     // Free agent with its backing user
//!     let (user, player) = factory::helpers::create_free_agent(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let bid = factory::bid::BidFactory::new(&db, player.id, team.id, &user.discord_id)
//!     .amount(500)
//!     .expires_in(chrono::Duration::minutes(-5))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `team` - Create team entities and ledger entries
//! - `player` - Create player entities
//! - `bid` - Create player bid entities
//! - `waiver` - Create waiver and waiver claim entities
//! - `league_match` - Create match result entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod bid;
pub mod helpers;
pub mod league_match;
pub mod player;
pub mod team;
pub mod user;
pub mod waiver;

pub use bid::create_bid;
pub use league_match::create_match;
pub use player::create_player;
pub use team::{create_priority, create_team};
pub use user::create_user;
pub use waiver::{create_claim, create_waiver};
