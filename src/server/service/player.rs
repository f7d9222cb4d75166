//! Player registration and admin roster management.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::team::RosterDto,
    server::{
        data::{bid::BidRepository, player::PlayerRepository, team::TeamRepository},
        error::{league::LeagueError, AppError},
        model::{
            player::{AssignPlayerParam, Player},
            roster::RosterChange,
            team::Team,
        },
    },
};

/// A team with its signed players.
#[derive(Debug, Clone)]
pub struct Roster {
    pub team: Team,
    pub players: Vec<Player>,
    pub payroll: i64,
}

impl Roster {
    pub fn into_dto(self) -> RosterDto {
        RosterDto {
            team: self.team.into_dto(),
            players: self.players.into_iter().map(|p| p.into_dto()).collect(),
            payroll: self.payroll,
        }
    }
}

pub struct PlayerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a user as a free-agent player.
    ///
    /// # Returns
    /// - `Ok(Player)` - The new free agent
    /// - `Err(AppError::LeagueErr(AlreadyRegistered))` - The user already has a player
    pub async fn register(&self, discord_id: u64) -> Result<Player, AppError> {
        let repo = PlayerRepository::new(self.db);

        if let Some(existing) = repo.find_by_user(discord_id).await? {
            return Err(LeagueError::AlreadyRegistered(existing.id).into());
        }

        let player = repo.create(discord_id).await?;

        tracing::info!("User {} registered as player {}", discord_id, player.id);

        Ok(player)
    }

    /// Signs a player directly to a team, bypassing bidding.
    ///
    /// Open bids on the player are cancelled and the manual removal flag is cleared.
    ///
    /// # Returns
    /// - `Ok((Player, RosterChange))` - Signed player and the role update owed
    /// - `Err(AppError::BadRequest)` - Negative salary
    /// - `Err(AppError::LeagueErr(_))` - Unknown player or team
    pub async fn assign(
        &self,
        param: AssignPlayerParam,
    ) -> Result<(Player, RosterChange), AppError> {
        if param.salary < 0 {
            return Err(AppError::BadRequest("Salary cannot be negative".to_string()));
        }

        let txn = self.db.begin().await?;
        let player_repo = PlayerRepository::new(&txn);
        let team_repo = TeamRepository::new(&txn);

        let player = player_repo
            .find_by_id(param.player_id)
            .await?
            .ok_or(LeagueError::PlayerNotFound(param.player_id))?;
        let team = team_repo
            .find_by_id(param.team_id)
            .await?
            .ok_or(LeagueError::TeamNotFound(param.team_id))?;
        let previous_role_id = match player.team_id {
            Some(team_id) => team_repo
                .find_by_id(team_id)
                .await?
                .and_then(|team| team.discord_role_id),
            None => None,
        };

        let signed = player_repo
            .assign_to_team(player.id, team.id, param.salary)
            .await?;
        let cancelled = BidRepository::new(&txn)
            .cancel_open_for_player(player.id)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Assigned player {} to team {} at salary {} ({} open bids cancelled)",
            signed.id,
            team.id,
            signed.salary,
            cancelled
        );

        let change = RosterChange {
            discord_id: signed.user_id,
            previous_role_id,
            new_role_id: team.discord_role_id,
        };

        Ok((signed, change))
    }

    /// Removes a player from their team and blocks automatic re-assignment.
    ///
    /// The player becomes a free agent with `manually_removed` set and every open bid on
    /// them is cancelled.
    pub async fn remove(&self, player_id: i32) -> Result<(Player, RosterChange), AppError> {
        let txn = self.db.begin().await?;
        let player_repo = PlayerRepository::new(&txn);

        let player = player_repo
            .find_by_id(player_id)
            .await?
            .ok_or(LeagueError::PlayerNotFound(player_id))?;
        let previous_role_id = match player.team_id {
            Some(team_id) => TeamRepository::new(&txn)
                .find_by_id(team_id)
                .await?
                .and_then(|team| team.discord_role_id),
            None => None,
        };

        let released = player_repo.release(player.id, true).await?;
        BidRepository::new(&txn)
            .cancel_open_for_player(player.id)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Manually removed player {} from team {:?}",
            released.id,
            player.team_id
        );

        let change = RosterChange {
            discord_id: released.user_id,
            previous_role_id,
            new_role_id: None,
        };

        Ok((released, change))
    }

    /// Gets a team's signed players and payroll.
    pub async fn roster(&self, team_id: i32) -> Result<Roster, AppError> {
        let team = TeamRepository::new(self.db)
            .find_by_id(team_id)
            .await?
            .ok_or(LeagueError::TeamNotFound(team_id))?;
        let players = PlayerRepository::new(self.db).get_by_team(team_id).await?;
        let payroll = players.iter().map(|player| player.salary).sum();

        Ok(Roster {
            team,
            players,
            payroll,
        })
    }

    pub async fn free_agents(&self) -> Result<Vec<Player>, AppError> {
        PlayerRepository::new(self.db).get_free_agents().await
    }
}
