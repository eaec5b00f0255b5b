use thiserror::Error;

/// Failures of league operations that are reported back to the member who ran the command.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LeagueError {
    /// No league with this name exists in the guild.
    #[error("Invalid league name: {0}")]
    LeagueNotFound(String),

    /// A league with this name already exists in the guild.
    #[error("A league named {0} already exists!")]
    DuplicateLeague(String),

    /// League names must contain at least one non-whitespace character.
    #[error("League names cannot be empty")]
    InvalidName,

    /// The owner is always on the leaderboard of their own league.
    #[error("The owner of the league {0} cannot be removed from it")]
    CannotRemoveOwner(String),

    /// The member has never been invited to any league in this guild.
    #[error("<@{0}> is not setup for leagues yet.")]
    MemberNotRegistered(u64),

    /// The member has a record in the guild but has not joined this league.
    #[error("<@{member}> is not in the league `{league}`!")]
    MemberNotInLeague { member: u64, league: String },

    /// The member has no pending invitation to this league.
    #[error("<@{member}> has no pending invitation to the league `{league}`")]
    InvitationNotFound { member: u64, league: String },
}
