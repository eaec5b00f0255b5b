pub use super::league::Entity as League;
pub use super::league_invitation::Entity as LeagueInvitation;
pub use super::league_joined::Entity as LeagueJoined;
pub use super::league_leaderboard::Entity as LeagueLeaderboard;
pub use super::league_member::Entity as LeagueMember;
