//! Standings table rows.

use crate::model::standings::StandingDto;

/// Aggregated record of one team over all recorded matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    pub team_id: i32,
    pub team_name: String,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub points: u32,
}

impl Standing {
    pub fn new(team_id: i32, team_name: String) -> Self {
        Self {
            team_id,
            team_name,
            played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            points: 0,
        }
    }

    pub fn goal_differential(&self) -> i32 {
        self.goals_for.saturating_sub(self.goals_against)
    }

    pub fn into_dto(self) -> StandingDto {
        StandingDto {
            goal_differential: self.goal_differential(),
            team_id: self.team_id,
            team_name: self.team_name,
            played: self.played,
            wins: self.wins,
            draws: self.draws,
            losses: self.losses,
            goals_for: self.goals_for,
            goals_against: self.goals_against,
            points: self.points,
        }
    }
}
