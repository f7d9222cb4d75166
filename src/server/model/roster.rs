//! Roster change notifications for Discord role sync.

/// A member whose team changed and whose Discord roles need updating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterChange {
    /// Discord ID of the affected member.
    pub discord_id: u64,
    /// Role of the team the member left, if any.
    pub previous_role_id: Option<u64>,
    /// Role of the team the member joined, if any.
    pub new_role_id: Option<u64>,
}

impl RosterChange {
    /// Whether applying this change would touch any role at all.
    pub fn is_noop(&self) -> bool {
        self.previous_role_id == self.new_role_id
    }
}
