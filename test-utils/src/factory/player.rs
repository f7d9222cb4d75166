//! Player factory for creating test player entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test players with customizable fields.
///
/// Players default to unsigned free agents with zero salary.
///
/// # Example
///
/// ```rust,ignore
/// let player = PlayerFactory::new(&db, &user.discord_id)
///     .signed_to(team.id, 300)
///     .build()
///     .await?;
/// ```
pub struct PlayerFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    team_id: Option<i32>,
    salary: i64,
    status: String,
    manually_removed: bool,
}

impl<'a> PlayerFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: impl Into<String>) -> Self {
        Self {
            db,
            user_id: user_id.into(),
            team_id: None,
            salary: 0,
            status: "free_agent".to_string(),
            manually_removed: false,
        }
    }

    /// Signs the player to a team at the given salary.
    pub fn signed_to(mut self, team_id: i32, salary: i64) -> Self {
        self.team_id = Some(team_id);
        self.salary = salary;
        self.status = "signed".to_string();
        self
    }

    /// Puts the player on waivers with no team.
    pub fn waived(mut self, salary: i64) -> Self {
        self.team_id = None;
        self.salary = salary;
        self.status = "waived".to_string();
        self
    }

    pub fn manually_removed(mut self, manually_removed: bool) -> Self {
        self.manually_removed = manually_removed;
        self
    }

    pub async fn build(self) -> Result<entity::player::Model, DbErr> {
        entity::player::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            team_id: ActiveValue::Set(self.team_id),
            salary: ActiveValue::Set(self.salary),
            status: ActiveValue::Set(self.status),
            manually_removed: ActiveValue::Set(self.manually_removed),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a free-agent player for an existing user.
pub async fn create_player(
    db: &DatabaseConnection,
    user_id: impl Into<String>,
) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db, user_id).build().await
}
