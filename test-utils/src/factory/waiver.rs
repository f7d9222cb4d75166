//! Waiver factory for creating test waiver and waiver claim entities.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test waivers.
///
/// Waivers default to pending with a claim deadline 48 hours from now.
pub struct WaiverFactory<'a> {
    db: &'a DatabaseConnection,
    player_id: i32,
    waiving_team_id: i32,
    waived_at: DateTime<Utc>,
    claim_deadline: DateTime<Utc>,
    status: String,
}

impl<'a> WaiverFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, player_id: i32, waiving_team_id: i32) -> Self {
        let now = Utc::now();
        Self {
            db,
            player_id,
            waiving_team_id,
            waived_at: now,
            claim_deadline: now + Duration::hours(48),
            status: "pending".to_string(),
        }
    }

    /// Sets the claim deadline relative to now. Negative durations create expired waivers.
    pub fn deadline_in(mut self, duration: Duration) -> Self {
        self.claim_deadline = Utc::now() + duration;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::waiver::Model, DbErr> {
        entity::waiver::ActiveModel {
            player_id: ActiveValue::Set(self.player_id),
            waiving_team_id: ActiveValue::Set(self.waiving_team_id),
            waived_at: ActiveValue::Set(self.waived_at),
            claim_deadline: ActiveValue::Set(self.claim_deadline),
            status: ActiveValue::Set(self.status),
            claimed_by_team_id: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending waiver with the default deadline.
pub async fn create_waiver(
    db: &DatabaseConnection,
    player_id: i32,
    waiving_team_id: i32,
) -> Result<entity::waiver::Model, DbErr> {
    WaiverFactory::new(db, player_id, waiving_team_id)
        .build()
        .await
}

/// Creates a claim on a waiver.
///
/// # Arguments
/// - `created_at` - Claim time, used to control tie-breaking between unranked teams
pub async fn create_claim(
    db: &DatabaseConnection,
    waiver_id: i32,
    team_id: i32,
    created_at: DateTime<Utc>,
) -> Result<entity::waiver_claim::Model, DbErr> {
    entity::waiver_claim::ActiveModel {
        waiver_id: ActiveValue::Set(waiver_id),
        team_id: ActiveValue::Set(team_id),
        created_at: ActiveValue::Set(created_at),
        ..Default::default()
    }
    .insert(db)
    .await
}
