//! Bid factory for creating test player bid entities.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bids with customizable fields.
///
/// Bids default to active and unfinalized, 100 in amount, expiring 24 hours from now.
pub struct BidFactory<'a> {
    db: &'a DatabaseConnection,
    player_id: i32,
    team_id: i32,
    user_id: String,
    bid_amount: i64,
    status: String,
    finalized: bool,
    created_at: DateTime<Utc>,
    bid_expires: DateTime<Utc>,
}

impl<'a> BidFactory<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        player_id: i32,
        team_id: i32,
        user_id: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            db,
            player_id,
            team_id,
            user_id: user_id.into(),
            bid_amount: 100,
            status: "active".to_string(),
            finalized: false,
            created_at: now,
            bid_expires: now + Duration::hours(24),
        }
    }

    pub fn amount(mut self, bid_amount: i64) -> Self {
        self.bid_amount = bid_amount;
        self
    }

    /// Sets the expiry relative to now. Negative durations create already-expired bids.
    pub fn expires_in(mut self, duration: Duration) -> Self {
        self.bid_expires = Utc::now() + duration;
        self
    }

    /// Sets the creation time, used to control tie-breaking between equal bids.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Marks the bid as already resolved with the given status.
    pub fn finalized(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self.finalized = true;
        self
    }

    pub async fn build(self) -> Result<entity::player_bid::Model, DbErr> {
        entity::player_bid::ActiveModel {
            player_id: ActiveValue::Set(self.player_id),
            user_id: ActiveValue::Set(self.user_id),
            team_id: ActiveValue::Set(self.team_id),
            bid_amount: ActiveValue::Set(self.bid_amount),
            status: ActiveValue::Set(self.status),
            finalized: ActiveValue::Set(self.finalized),
            bid_expires: ActiveValue::Set(self.bid_expires),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open bid with the given amount.
pub async fn create_bid(
    db: &DatabaseConnection,
    player_id: i32,
    team_id: i32,
    user_id: impl Into<String>,
    bid_amount: i64,
) -> Result<entity::player_bid::Model, DbErr> {
    BidFactory::new(db, player_id, team_id, user_id)
        .amount(bid_amount)
        .build()
        .await
}
