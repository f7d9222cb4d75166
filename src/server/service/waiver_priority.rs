//! Waiver priority ledger queries and the standings based reset.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        league_match::LeagueMatchRepository, team::TeamRepository,
        waiver_priority::WaiverPriorityRepository,
    },
    error::AppError,
    model::{
        standings::Standing,
        waiver_priority::{dense_ordering, PriorityEntry},
    },
    service::standings::compute_standings,
};

pub struct WaiverPriorityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WaiverPriorityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the ledger ordered from highest priority down.
    pub async fn get_ordered(&self) -> Result<Vec<PriorityEntry>, AppError> {
        WaiverPriorityRepository::new(self.db).get_ordered().await
    }

    /// Rebuilds the whole ledger from the current standings.
    ///
    /// The team with the worst record receives priority 1. Every team is ranked, including
    /// teams that have not played yet.
    pub async fn reset_from_standings(&self) -> Result<Vec<PriorityEntry>, AppError> {
        let teams = TeamRepository::new(self.db).get_all().await?;
        let matches = LeagueMatchRepository::new(self.db).get_all().await?;
        let standings = compute_standings(&teams, &matches);

        let ordering = dense_ordering(&reset_order(standings));

        let txn = self.db.begin().await?;
        WaiverPriorityRepository::new(&txn)
            .replace_all(&ordering)
            .await?;
        txn.commit().await?;

        tracing::info!("Reset waiver priority for {} teams", ordering.len());

        Ok(ordering)
    }
}

/// Orders teams for the priority reset: ascending points, then wins, then goal
/// differential, then team name.
fn reset_order(mut standings: Vec<Standing>) -> Vec<i32> {
    standings.sort_by(|a, b| {
        a.points
            .cmp(&b.points)
            .then(a.wins.cmp(&b.wins))
            .then(a.goal_differential().cmp(&b.goal_differential()))
            .then(a.team_name.cmp(&b.team_name))
    });

    standings.into_iter().map(|standing| standing.team_id).collect()
}
