//! League standings computed from recorded match results.

use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::server::{
    data::{league_match::LeagueMatchRepository, team::TeamRepository},
    error::AppError,
    model::{league_match::LeagueMatch, standings::Standing, team::Team},
};

const POINTS_FOR_WIN: u32 = 3;
const POINTS_FOR_DRAW: u32 = 1;

pub struct StandingsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StandingsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the standings table in display order.
    pub async fn get(&self) -> Result<Vec<Standing>, AppError> {
        let teams = TeamRepository::new(self.db).get_all().await?;
        let matches = LeagueMatchRepository::new(self.db).get_all().await?;

        Ok(compute_standings(&teams, &matches))
    }
}

/// Aggregates match results into one standing per team.
///
/// Every team gets a row, including teams without matches. Results referencing unknown
/// teams are ignored. Rows are sorted by points, wins, goal differential and goals for,
/// all descending, then by team name.
pub fn compute_standings(teams: &[Team], matches: &[LeagueMatch]) -> Vec<Standing> {
    let mut table: HashMap<i32, Standing> = teams
        .iter()
        .map(|team| (team.id, Standing::new(team.id, team.name.clone())))
        .collect();

    for played in matches {
        if !table.contains_key(&played.home_team_id) || !table.contains_key(&played.away_team_id)
        {
            continue;
        }

        if let Some(home) = table.get_mut(&played.home_team_id) {
            record_result(home, played.home_score, played.away_score);
        }
        if let Some(away) = table.get_mut(&played.away_team_id) {
            record_result(away, played.away_score, played.home_score);
        }
    }

    let mut standings: Vec<Standing> = table.into_values().collect();
    standings.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.wins.cmp(&a.wins))
            .then(b.goal_differential().cmp(&a.goal_differential()))
            .then(b.goals_for.cmp(&a.goals_for))
            .then(a.team_name.cmp(&b.team_name))
    });

    standings
}

fn record_result(standing: &mut Standing, scored: i32, conceded: i32) {
    standing.played += 1;
    standing.goals_for = standing.goals_for.saturating_add(scored);
    standing.goals_against = standing.goals_against.saturating_add(conceded);

    match scored.cmp(&conceded) {
        std::cmp::Ordering::Greater => {
            standing.wins += 1;
            standing.points += POINTS_FOR_WIN;
        }
        std::cmp::Ordering::Equal => {
            standing.draws += 1;
            standing.points += POINTS_FOR_DRAW;
        }
        std::cmp::Ordering::Less => standing.losses += 1,
    }
}
