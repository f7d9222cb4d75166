pub use super::league_match::Entity as LeagueMatch;
pub use super::player::Entity as Player;
pub use super::player_bid::Entity as PlayerBid;
pub use super::team::Entity as Team;
pub use super::user::Entity as User;
pub use super::waiver::Entity as Waiver;
pub use super::waiver_claim::Entity as WaiverClaim;
pub use super::waiver_priority::Entity as WaiverPriority;
