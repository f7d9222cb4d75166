//! Team data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    error::{league::LeagueError, AppError},
    model::team::{CreateTeamParam, Team, UpdateTeamParam},
};

pub struct TeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new team.
    ///
    /// Name uniqueness is checked by the service before calling this.
    pub async fn create(&self, param: CreateTeamParam) -> Result<Team, AppError> {
        let entity = entity::team::ActiveModel {
            name: ActiveValue::Set(param.name),
            owner_id: ActiveValue::Set(param.owner_id.map(|id| id.to_string())),
            discord_role_id: ActiveValue::Set(param.discord_role_id.map(|id| id.to_string())),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Team::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Team>, AppError> {
        entity::prelude::Team::find_by_id(id)
            .one(self.db)
            .await?
            .map(Team::from_entity)
            .transpose()
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Team>, AppError> {
        entity::prelude::Team::find()
            .filter(entity::team::Column::Name.eq(name))
            .one(self.db)
            .await?
            .map(Team::from_entity)
            .transpose()
    }

    /// Gets all teams ordered alphabetically by name.
    pub async fn get_all(&self) -> Result<Vec<Team>, AppError> {
        entity::prelude::Team::find()
            .order_by_asc(entity::team::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(Team::from_entity)
            .collect()
    }

    /// Replaces the owner and Discord role of a team.
    ///
    /// # Returns
    /// - `Ok(Team)` - The updated team
    /// - `Err(AppError::LeagueErr(TeamNotFound))` - No team with that id
    pub async fn update(&self, param: UpdateTeamParam) -> Result<Team, AppError> {
        let team = entity::prelude::Team::find_by_id(param.id)
            .one(self.db)
            .await?
            .ok_or(LeagueError::TeamNotFound(param.id))?;

        let mut active_model: entity::team::ActiveModel = team.into();
        active_model.owner_id = ActiveValue::Set(param.owner_id.map(|id| id.to_string()));
        active_model.discord_role_id =
            ActiveValue::Set(param.discord_role_id.map(|id| id.to_string()));

        Team::from_entity(active_model.update(self.db).await?)
    }
}
