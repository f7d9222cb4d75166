use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{team::TeamRepository, user::UserRepository, waiver_priority::WaiverPriorityRepository},
    error::{league::LeagueError, AppError},
    model::team::{CreateTeamParam, Team, UpdateTeamParam},
};

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a team and appends it to the back of the waiver priority ledger.
    ///
    /// # Arguments
    /// - `param` - Team name, optional owner and optional Discord role
    ///
    /// # Returns
    /// - `Ok(Team)` - The created team
    /// - `Err(AppError::BadRequest)` - Blank name
    /// - `Err(AppError::NotFound)` - Owner is not a known user
    /// - `Err(AppError::LeagueErr(TeamNameTaken))` - Another team already uses the name
    pub async fn create(&self, param: CreateTeamParam) -> Result<Team, AppError> {
        let name = param.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest("Team name cannot be empty".to_string()));
        }

        if TeamRepository::new(self.db)
            .find_by_name(&name)
            .await?
            .is_some()
        {
            return Err(LeagueError::TeamNameTaken(name).into());
        }

        if let Some(owner_id) = param.owner_id {
            self.ensure_user_exists(owner_id).await?;
        }

        let txn = self.db.begin().await?;

        let team = TeamRepository::new(&txn)
            .create(CreateTeamParam { name, ..param })
            .await?;
        let entry = WaiverPriorityRepository::new(&txn)
            .ensure_team(team.id)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Created team {} ({}) at waiver priority {}",
            team.name,
            team.id,
            entry.priority_order
        );

        Ok(team)
    }

    /// Replaces the owner and Discord role of a team.
    pub async fn update(&self, param: UpdateTeamParam) -> Result<Team, AppError> {
        if let Some(owner_id) = param.owner_id {
            self.ensure_user_exists(owner_id).await?;
        }

        let team = TeamRepository::new(self.db).update(param).await?;

        tracing::info!("Updated team {} ({})", team.name, team.id);

        Ok(team)
    }

    pub async fn get_all(&self) -> Result<Vec<Team>, AppError> {
        TeamRepository::new(self.db).get_all().await
    }

    async fn ensure_user_exists(&self, discord_id: u64) -> Result<(), AppError> {
        UserRepository::new(self.db)
            .find_by_discord_id(discord_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", discord_id)))
    }
}
