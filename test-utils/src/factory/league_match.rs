//! League match factory for creating recorded results.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Records a played match between two existing teams.
///
/// # Arguments
/// - `db` - Database connection
/// - `home_team_id` - Home team
/// - `away_team_id` - Away team
/// - `home_score` - Goals scored by the home team
/// - `away_score` - Goals scored by the away team
///
/// # Returns
/// - `Ok(entity::league_match::Model)` - Created match, played now
/// - `Err(DbErr)` - Database error during insert
pub async fn create_match(
    db: &DatabaseConnection,
    home_team_id: i32,
    away_team_id: i32,
    home_score: i32,
    away_score: i32,
) -> Result<entity::league_match::Model, DbErr> {
    let now = Utc::now();
    entity::league_match::ActiveModel {
        home_team_id: ActiveValue::Set(home_team_id),
        away_team_id: ActiveValue::Set(away_team_id),
        home_score: ActiveValue::Set(home_score),
        away_score: ActiveValue::Set(away_score),
        played_at: ActiveValue::Set(now),
        created_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
