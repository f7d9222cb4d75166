//! Player data repository.
//!
//! Holds the roster mutations used by bid resolution, waiver processing and admin actions.
//! Each mutation loads the row, changes the relevant columns and writes it back on the
//! connection it was given, so callers control the transaction boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    error::{league::LeagueError, AppError},
    model::player::{Player, PlayerStatus},
};

pub struct PlayerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a free-agent player for a user.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the registering user
    ///
    /// # Returns
    /// - `Ok(Player)` - New player with status free agent and zero salary
    /// - `Err(AppError::DbErr)` - Insert failed, e.g. the user is already a player
    pub async fn create(&self, user_id: u64) -> Result<Player, AppError> {
        let entity = entity::player::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
            team_id: ActiveValue::Set(None),
            salary: ActiveValue::Set(0),
            status: ActiveValue::Set(PlayerStatus::FreeAgent.as_str().to_string()),
            manually_removed: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Player::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Player>, AppError> {
        entity::prelude::Player::find_by_id(id)
            .one(self.db)
            .await?
            .map(Player::from_entity)
            .transpose()
    }

    pub async fn find_by_user(&self, user_id: u64) -> Result<Option<Player>, AppError> {
        entity::prelude::Player::find()
            .filter(entity::player::Column::UserId.eq(user_id.to_string()))
            .one(self.db)
            .await?
            .map(Player::from_entity)
            .transpose()
    }

    /// Gets the players signed to a team, highest salary first.
    pub async fn get_by_team(&self, team_id: i32) -> Result<Vec<Player>, AppError> {
        entity::prelude::Player::find()
            .filter(entity::player::Column::TeamId.eq(team_id))
            .order_by_desc(entity::player::Column::Salary)
            .order_by_asc(entity::player::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Player::from_entity)
            .collect()
    }

    /// Gets all free agents, including manually removed ones, oldest registration first.
    pub async fn get_free_agents(&self) -> Result<Vec<Player>, AppError> {
        entity::prelude::Player::find()
            .filter(entity::player::Column::Status.eq(PlayerStatus::FreeAgent.as_str()))
            .filter(entity::player::Column::TeamId.is_null())
            .order_by_asc(entity::player::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(Player::from_entity)
            .collect()
    }

    /// Sum of salaries of every player signed to the team, saturating at `i64::MAX`.
    pub async fn team_payroll(&self, team_id: i32) -> Result<i64, AppError> {
        let players = self.get_by_team(team_id).await?;
        Ok(players
            .iter()
            .fold(0i64, |total, player| total.saturating_add(player.salary)))
    }

    /// Signs a player to a team at the given salary.
    ///
    /// Clears the manual removal flag, since every caller is an explicit assignment.
    pub async fn assign_to_team(
        &self,
        player_id: i32,
        team_id: i32,
        salary: i64,
    ) -> Result<Player, AppError> {
        let mut active_model = self.load(player_id).await?;
        active_model.team_id = ActiveValue::Set(Some(team_id));
        active_model.salary = ActiveValue::Set(salary);
        active_model.status = ActiveValue::Set(PlayerStatus::Signed.as_str().to_string());
        active_model.manually_removed = ActiveValue::Set(false);

        Player::from_entity(active_model.update(self.db).await?)
    }

    /// Removes a player from their team, making them a free agent.
    ///
    /// # Arguments
    /// - `player_id` - Player to release
    /// - `manually_removed` - Whether an admin removed the player; blocks automatic
    ///   re-assignment until an explicit assignment clears it
    pub async fn release(
        &self,
        player_id: i32,
        manually_removed: bool,
    ) -> Result<Player, AppError> {
        let mut active_model = self.load(player_id).await?;
        active_model.team_id = ActiveValue::Set(None);
        active_model.status = ActiveValue::Set(PlayerStatus::FreeAgent.as_str().to_string());
        active_model.manually_removed = ActiveValue::Set(manually_removed);

        Player::from_entity(active_model.update(self.db).await?)
    }

    /// Puts a player on waivers: no team, status waived, salary kept.
    pub async fn mark_waived(&self, player_id: i32) -> Result<Player, AppError> {
        let mut active_model = self.load(player_id).await?;
        active_model.team_id = ActiveValue::Set(None);
        active_model.status = ActiveValue::Set(PlayerStatus::Waived.as_str().to_string());

        Player::from_entity(active_model.update(self.db).await?)
    }

    async fn load(&self, player_id: i32) -> Result<entity::player::ActiveModel, AppError> {
        let player = entity::prelude::Player::find_by_id(player_id)
            .one(self.db)
            .await?
            .ok_or(LeagueError::PlayerNotFound(player_id))?;

        Ok(player.into())
    }
}
