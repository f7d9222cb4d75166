//! Waiver priority ledger entries and reordering rules.
//!
//! Order 1 is the highest priority. Orders form a dense `1..=N` sequence.

use crate::model::waiver_priority::WaiverPriorityDto;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityEntry {
    pub team_id: i32,
    pub priority_order: i32,
}

impl PriorityEntry {
    pub fn into_dto(self) -> WaiverPriorityDto {
        WaiverPriorityDto {
            team_id: self.team_id,
            priority_order: self.priority_order,
        }
    }

    pub fn from_entity(entity: entity::waiver_priority::Model) -> Self {
        Self {
            team_id: entity.team_id,
            priority_order: entity.priority_order,
        }
    }
}

/// Moves `team_id` to the back of the ledger after a successful claim.
///
/// The claiming team takes the prior maximum order and every team that was behind it moves
/// up by one. A team missing from the ledger is appended at `max + 1`. Only entries whose
/// order changes are returned.
pub fn rotate_to_back(entries: &[PriorityEntry], team_id: i32) -> Vec<PriorityEntry> {
    let max_order = entries
        .iter()
        .map(|entry| entry.priority_order)
        .max()
        .unwrap_or(0);

    let Some(current) = entries.iter().find(|entry| entry.team_id == team_id) else {
        return vec![PriorityEntry {
            team_id,
            priority_order: max_order + 1,
        }];
    };

    if current.priority_order == max_order {
        return Vec::new();
    }

    let mut changed: Vec<PriorityEntry> = entries
        .iter()
        .filter(|entry| entry.priority_order > current.priority_order)
        .map(|entry| PriorityEntry {
            team_id: entry.team_id,
            priority_order: entry.priority_order - 1,
        })
        .collect();

    changed.push(PriorityEntry {
        team_id,
        priority_order: max_order,
    });

    changed
}

/// Assigns dense priority orders to teams already sorted best-priority first.
pub fn dense_ordering(team_ids: &[i32]) -> Vec<PriorityEntry> {
    team_ids
        .iter()
        .enumerate()
        .map(|(index, &team_id)| PriorityEntry {
            team_id,
            priority_order: index as i32 + 1,
        })
        .collect()
}
