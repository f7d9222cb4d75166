//! Waiver and waiver claim data repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder, SqlErr,
};

use crate::server::{
    error::{league::LeagueError, AppError},
    model::waiver::{Waiver, WaiverClaim, WaiverStatus},
};

pub struct WaiverRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WaiverRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Opens a pending waiver for a player.
    pub async fn create(
        &self,
        player_id: i32,
        waiving_team_id: i32,
        waived_at: DateTime<Utc>,
        claim_deadline: DateTime<Utc>,
    ) -> Result<Waiver, AppError> {
        let entity = entity::waiver::ActiveModel {
            player_id: ActiveValue::Set(player_id),
            waiving_team_id: ActiveValue::Set(waiving_team_id),
            waived_at: ActiveValue::Set(waived_at),
            claim_deadline: ActiveValue::Set(claim_deadline),
            status: ActiveValue::Set(WaiverStatus::Pending.as_str().to_string()),
            claimed_by_team_id: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Waiver::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Waiver>, AppError> {
        entity::prelude::Waiver::find_by_id(id)
            .one(self.db)
            .await?
            .map(Waiver::from_entity)
            .transpose()
    }

    /// Gets pending waivers, soonest deadline first.
    pub async fn get_pending(&self) -> Result<Vec<Waiver>, AppError> {
        entity::prelude::Waiver::find()
            .filter(entity::waiver::Column::Status.eq(WaiverStatus::Pending.as_str()))
            .order_by_asc(entity::waiver::Column::ClaimDeadline)
            .order_by_asc(entity::waiver::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Waiver::from_entity)
            .collect()
    }

    /// Gets pending waivers whose claim deadline is at or before `now`.
    pub async fn get_expired_pending(&self, now: DateTime<Utc>) -> Result<Vec<Waiver>, AppError> {
        entity::prelude::Waiver::find()
            .filter(entity::waiver::Column::Status.eq(WaiverStatus::Pending.as_str()))
            .filter(entity::waiver::Column::ClaimDeadline.lte(now))
            .order_by_asc(entity::waiver::Column::ClaimDeadline)
            .order_by_asc(entity::waiver::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Waiver::from_entity)
            .collect()
    }

    /// Closes a waiver if it is still pending.
    ///
    /// # Returns
    /// - `Ok(1)` - This caller closed the waiver
    /// - `Ok(0)` - The waiver was already processed
    pub async fn close_if_pending(
        &self,
        waiver_id: i32,
        status: WaiverStatus,
        claimed_by_team_id: Option<i32>,
    ) -> Result<u64, AppError> {
        let result = entity::prelude::Waiver::update_many()
            .set(entity::waiver::ActiveModel {
                status: ActiveValue::Set(status.as_str().to_string()),
                claimed_by_team_id: ActiveValue::Set(claimed_by_team_id),
                ..Default::default()
            })
            .filter(entity::waiver::Column::Id.eq(waiver_id))
            .filter(entity::waiver::Column::Status.eq(WaiverStatus::Pending.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Records a team's claim on a waiver.
    ///
    /// # Returns
    /// - `Ok(WaiverClaim)` - The stored claim
    /// - `Err(AppError::LeagueErr(DuplicateClaim))` - The team already holds a claim on this
    ///   waiver, reported by the unique index on (waiver_id, team_id)
    pub async fn create_claim(
        &self,
        waiver_id: i32,
        team_id: i32,
    ) -> Result<WaiverClaim, AppError> {
        let result = entity::waiver_claim::ActiveModel {
            waiver_id: ActiveValue::Set(waiver_id),
            team_id: ActiveValue::Set(team_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await;

        match result {
            Ok(entity) => Ok(WaiverClaim::from_entity(entity)),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(LeagueError::DuplicateClaim { waiver_id, team_id }.into())
            }
            Err(err) => Err(err.into()),
        }
    }

    pub async fn find_claim(
        &self,
        waiver_id: i32,
        team_id: i32,
    ) -> Result<Option<WaiverClaim>, AppError> {
        let entity = entity::prelude::WaiverClaim::find()
            .filter(entity::waiver_claim::Column::WaiverId.eq(waiver_id))
            .filter(entity::waiver_claim::Column::TeamId.eq(team_id))
            .one(self.db)
            .await?;

        Ok(entity.map(WaiverClaim::from_entity))
    }

    /// Gets all claims on a waiver, earliest first.
    pub async fn get_claims(&self, waiver_id: i32) -> Result<Vec<WaiverClaim>, AppError> {
        let entities = entity::prelude::WaiverClaim::find()
            .filter(entity::waiver_claim::Column::WaiverId.eq(waiver_id))
            .order_by_asc(entity::waiver_claim::Column::CreatedAt)
            .order_by_asc(entity::waiver_claim::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(WaiverClaim::from_entity).collect())
    }
}
