//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user and a team owned by that user.
///
/// # Returns
/// - `Ok((owner, team))` - The owning user and the team
/// - `Err(DbErr)` - Database error during creation
pub async fn create_team_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::team::Model), DbErr> {
    let owner = crate::factory::user::create_user(db).await?;
    let team = crate::factory::team::TeamFactory::new(db)
        .owner_id(&owner.discord_id)
        .build()
        .await?;

    Ok((owner, team))
}

/// Creates a user registered as a free-agent player.
///
/// # Returns
/// - `Ok((user, player))` - The backing user and the player
/// - `Err(DbErr)` - Database error during creation
pub async fn create_free_agent(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::player::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let player = crate::factory::player::create_player(db, &user.discord_id).await?;

    Ok((user, player))
}

/// Creates a user registered as a player signed to the given team.
///
/// # Arguments
/// - `db` - Database connection
/// - `team_id` - Team the player is signed to
/// - `salary` - Contract salary
///
/// # Returns
/// - `Ok((user, player))` - The backing user and the signed player
/// - `Err(DbErr)` - Database error during creation
pub async fn create_signed_player(
    db: &DatabaseConnection,
    team_id: i32,
    salary: i64,
) -> Result<(entity::user::Model, entity::player::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let player = crate::factory::player::PlayerFactory::new(db, &user.discord_id)
        .signed_to(team_id, salary)
        .build()
        .await?;

    Ok((user, player))
}
