//! Waiver priority ledger repository.
//!
//! Reorderings are computed in the domain layer and written back here one row at a time,
//! so callers should run them inside a transaction.

use sea_orm::{
    sea_query::OnConflict, ActiveValue, ConnectionTrait, EntityTrait, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::waiver_priority::{rotate_to_back, PriorityEntry},
};

pub struct WaiverPriorityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WaiverPriorityRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the ledger ordered from highest priority (order 1) down.
    pub async fn get_ordered(&self) -> Result<Vec<PriorityEntry>, AppError> {
        let entities = entity::prelude::WaiverPriority::find()
            .order_by_asc(entity::waiver_priority::Column::PriorityOrder)
            .order_by_asc(entity::waiver_priority::Column::TeamId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(PriorityEntry::from_entity).collect())
    }

    /// Writes the given entries, inserting teams not yet in the ledger.
    pub async fn apply(&self, entries: &[PriorityEntry]) -> Result<(), AppError> {
        for entry in entries {
            entity::prelude::WaiverPriority::insert(entity::waiver_priority::ActiveModel {
                team_id: ActiveValue::Set(entry.team_id),
                priority_order: ActiveValue::Set(entry.priority_order),
            })
            .on_conflict(
                OnConflict::column(entity::waiver_priority::Column::TeamId)
                    .update_column(entity::waiver_priority::Column::PriorityOrder)
                    .to_owned(),
            )
            .exec(self.db)
            .await?;
        }

        Ok(())
    }

    /// Replaces the whole ledger with a new ordering.
    pub async fn replace_all(&self, entries: &[PriorityEntry]) -> Result<(), AppError> {
        entity::prelude::WaiverPriority::delete_many()
            .exec(self.db)
            .await?;

        self.apply(entries).await
    }

    /// Moves a team to the back of the ledger after a successful waiver claim.
    ///
    /// Teams behind the claiming team move up by one; everyone else keeps their order.
    ///
    /// # Returns
    /// - `Ok(Vec<PriorityEntry>)` - The entries whose order changed
    pub async fn move_to_back(&self, team_id: i32) -> Result<Vec<PriorityEntry>, AppError> {
        let ledger = self.get_ordered().await?;
        let changed = rotate_to_back(&ledger, team_id);
        self.apply(&changed).await?;

        Ok(changed)
    }

    /// Returns the team's ledger entry, appending it at the back if missing.
    pub async fn ensure_team(&self, team_id: i32) -> Result<PriorityEntry, AppError> {
        if let Some(entity) = entity::prelude::WaiverPriority::find_by_id(team_id)
            .one(self.db)
            .await?
        {
            return Ok(PriorityEntry::from_entity(entity));
        }

        let last = entity::prelude::WaiverPriority::find()
            .order_by_desc(entity::waiver_priority::Column::PriorityOrder)
            .one(self.db)
            .await?;

        let entry = PriorityEntry {
            team_id,
            priority_order: last.map(|entity| entity.priority_order).unwrap_or(0) + 1,
        };
        self.apply(&[entry]).await?;

        Ok(entry)
    }
}
