//! Domain models for per-guild member records.

use chrono::{DateTime, Utc};

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// A member's record within a guild.
///
/// Created the first time the member is invited to, or creates, a league in the guild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueMember {
    pub id: i32,
    pub guild_id: u64,
    pub user_id: u64,
    pub created_at: DateTime<Utc>,
}

impl LeagueMember {
    /// Converts an entity model to the member domain model
    ///
    /// # Returns
    /// - `Ok(LeagueMember)` - The converted member record
    /// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse a stored snowflake
    pub fn from_entity(entity: entity::league_member::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_u64_from_string(entity.guild_id)?,
            user_id: parse_u64_from_string(entity.user_id)?,
            created_at: entity.created_at,
        })
    }
}

/// A member record together with the league names it references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRecord {
    pub member: LeagueMember,
    /// League names with a pending invitation, oldest first.
    pub invitations: Vec<String>,
    /// League names the member has joined, oldest first.
    pub joined_leagues: Vec<String>,
}

impl MemberRecord {
    pub fn has_joined(&self, league_name: &str) -> bool {
        self.joined_leagues.iter().any(|name| name == league_name)
    }
}
