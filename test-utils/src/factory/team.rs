//! Team factory for creating test team entities and waiver priority entries.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test teams with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let team = TeamFactory::new(&db)
///     .name("Harbor Hawks")
///     .owner_id(&owner.discord_id)
///     .discord_role_id("5550001")
///     .build()
///     .await?;
/// ```
pub struct TeamFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    owner_id: Option<String>,
    discord_role_id: Option<String>,
}

impl<'a> TeamFactory<'a> {
    /// Creates a new TeamFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Team {id}"`
    /// - owner_id: `None`
    /// - discord_role_id: numeric string from the shared counter
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Team {}", id),
            owner_id: None,
            discord_role_id: Some((900_000 + id).to_string()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the owning user. The user must already exist.
    pub fn owner_id(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = Some(owner_id.into());
        self
    }

    pub fn discord_role_id(mut self, role_id: impl Into<String>) -> Self {
        self.discord_role_id = Some(role_id.into());
        self
    }

    pub fn no_role(mut self) -> Self {
        self.discord_role_id = None;
        self
    }

    pub async fn build(self) -> Result<entity::team::Model, DbErr> {
        entity::team::ActiveModel {
            name: ActiveValue::Set(self.name),
            owner_id: ActiveValue::Set(self.owner_id),
            discord_role_id: ActiveValue::Set(self.discord_role_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a team with default values and no owner.
pub async fn create_team(db: &DatabaseConnection) -> Result<entity::team::Model, DbErr> {
    TeamFactory::new(db).build().await
}

/// Inserts a waiver priority ledger entry for a team.
///
/// # Arguments
/// - `db` - Database connection
/// - `team_id` - Team the entry belongs to
/// - `priority_order` - Position in the ledger, 1 being the highest priority
pub async fn create_priority(
    db: &DatabaseConnection,
    team_id: i32,
    priority_order: i32,
) -> Result<entity::waiver_priority::Model, DbErr> {
    entity::waiver_priority::ActiveModel {
        team_id: ActiveValue::Set(team_id),
        priority_order: ActiveValue::Set(priority_order),
    }
    .insert(db)
    .await
}
