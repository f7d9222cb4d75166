//! Player bid data repository.
//!
//! Status transitions that finalize a bid are written as guarded `UPDATE ... WHERE
//! finalized = false` statements. The affected row count tells the caller whether it won
//! the race against a concurrent resolution of the same bid.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    error::AppError,
    model::bid::{Bid, BidStatus, CreateBidParam},
};

pub struct BidRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BidRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an active, unfinalized bid.
    pub async fn create(&self, param: CreateBidParam) -> Result<Bid, AppError> {
        let entity = entity::player_bid::ActiveModel {
            player_id: ActiveValue::Set(param.player_id),
            user_id: ActiveValue::Set(param.user_id.to_string()),
            team_id: ActiveValue::Set(param.team_id),
            bid_amount: ActiveValue::Set(param.bid_amount),
            status: ActiveValue::Set(BidStatus::Active.as_str().to_string()),
            finalized: ActiveValue::Set(false),
            bid_expires: ActiveValue::Set(param.bid_expires),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Bid::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Bid>, AppError> {
        entity::prelude::PlayerBid::find_by_id(id)
            .one(self.db)
            .await?
            .map(Bid::from_entity)
            .transpose()
    }

    /// Gets every bid ever placed on a player, newest first.
    pub async fn get_by_player(&self, player_id: i32) -> Result<Vec<Bid>, AppError> {
        entity::prelude::PlayerBid::find()
            .filter(entity::player_bid::Column::PlayerId.eq(player_id))
            .order_by_desc(entity::player_bid::Column::CreatedAt)
            .order_by_desc(entity::player_bid::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Bid::from_entity)
            .collect()
    }

    /// Gets the unfinalized bids on a player, oldest first.
    pub async fn get_open_by_player(&self, player_id: i32) -> Result<Vec<Bid>, AppError> {
        entity::prelude::PlayerBid::find()
            .filter(entity::player_bid::Column::PlayerId.eq(player_id))
            .filter(entity::player_bid::Column::Finalized.eq(false))
            .order_by_asc(entity::player_bid::Column::CreatedAt)
            .order_by_asc(entity::player_bid::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Bid::from_entity)
            .collect()
    }

    /// Gets every unfinalized bid across all players, grouped by player.
    pub async fn get_open(&self) -> Result<Vec<Bid>, AppError> {
        entity::prelude::PlayerBid::find()
            .filter(entity::player_bid::Column::Finalized.eq(false))
            .order_by_asc(entity::player_bid::Column::PlayerId)
            .order_by_asc(entity::player_bid::Column::CreatedAt)
            .order_by_asc(entity::player_bid::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Bid::from_entity)
            .collect()
    }

    /// Highest amount among the open bids on a player, if any.
    pub async fn highest_open_amount(&self, player_id: i32) -> Result<Option<i64>, AppError> {
        let top = entity::prelude::PlayerBid::find()
            .filter(entity::player_bid::Column::PlayerId.eq(player_id))
            .filter(entity::player_bid::Column::Finalized.eq(false))
            .order_by_desc(entity::player_bid::Column::BidAmount)
            .one(self.db)
            .await?;

        Ok(top.map(|bid| bid.bid_amount))
    }

    /// Marks a bid as won at the final amount if nobody finalized it first.
    ///
    /// # Arguments
    /// - `bid_id` - Bid to mark as won
    /// - `amount` - Final amount, which may differ from the bid when an admin overrides it
    ///
    /// # Returns
    /// - `Ok(1)` - This caller finalized the bid
    /// - `Ok(0)` - The bid was already finalized or does not exist
    pub async fn mark_won_if_open(&self, bid_id: i32, amount: i64) -> Result<u64, AppError> {
        let mut won = finalize_as(BidStatus::Won);
        won.bid_amount = ActiveValue::Set(amount);

        let result = entity::prelude::PlayerBid::update_many()
            .set(won)
            .filter(entity::player_bid::Column::Id.eq(bid_id))
            .filter(entity::player_bid::Column::Finalized.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Finalizes every other open bid on the player with the given status.
    pub async fn finalize_others(
        &self,
        player_id: i32,
        except_bid_id: i32,
        status: BidStatus,
    ) -> Result<u64, AppError> {
        let result = entity::prelude::PlayerBid::update_many()
            .set(finalize_as(status))
            .filter(entity::player_bid::Column::PlayerId.eq(player_id))
            .filter(entity::player_bid::Column::Id.ne(except_bid_id))
            .filter(entity::player_bid::Column::Finalized.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Cancels a team's open bids on a player, used when the team raises its own bid.
    pub async fn cancel_open_for_team(
        &self,
        player_id: i32,
        team_id: i32,
    ) -> Result<u64, AppError> {
        let result = entity::prelude::PlayerBid::update_many()
            .set(finalize_as(BidStatus::Cancelled))
            .filter(entity::player_bid::Column::PlayerId.eq(player_id))
            .filter(entity::player_bid::Column::TeamId.eq(team_id))
            .filter(entity::player_bid::Column::Finalized.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Cancels every open bid on a player.
    pub async fn cancel_open_for_player(&self, player_id: i32) -> Result<u64, AppError> {
        let result = entity::prelude::PlayerBid::update_many()
            .set(finalize_as(BidStatus::Cancelled))
            .filter(entity::player_bid::Column::PlayerId.eq(player_id))
            .filter(entity::player_bid::Column::Finalized.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

fn finalize_as(status: BidStatus) -> entity::player_bid::ActiveModel {
    entity::player_bid::ActiveModel {
        status: ActiveValue::Set(status.as_str().to_string()),
        finalized: ActiveValue::Set(true),
        ..Default::default()
    }
}
