//! Domain & parameter models for league operations
//!
//! Defines the league domain model, its leaderboard, the parameter models used to
//! create leagues, and the outcomes reported back by mutating operations.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::{
    error::AppError,
    util::parse::{parse_json_column, parse_u64_from_string},
};

/// The league domain model
///
/// A named group inside a guild, owned by the member who created it. `jobs` and
/// `latest` are carried for completeness of the stored record and start out empty.
#[derive(Debug, Clone, PartialEq)]
pub struct League {
    pub id: i32,
    pub guild_id: u64,
    pub name: String,
    pub owner_id: u64,
    pub jobs: Map<String, Value>,
    pub latest: Vec<Value>,
    pub created_at: DateTime<Utc>,
}

impl League {
    /// Converts an entity model to the league domain model
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(League)` - The converted league domain model
    /// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse a stored snowflake
    /// - `Err(AppError::InternalErr(MalformedJsonColumn))` - `jobs` or `latest` is not valid JSON
    pub fn from_entity(entity: entity::league::Model) -> Result<Self, AppError> {
        let guild_id = parse_u64_from_string(entity.guild_id)?;
        let owner_id = parse_u64_from_string(entity.owner_id)?;
        let jobs = parse_json_column("jobs", &entity.jobs)?;
        let latest = parse_json_column("latest", &entity.latest)?;

        Ok(Self {
            id: entity.id,
            guild_id,
            name: entity.name,
            owner_id,
            jobs,
            latest,
            created_at: entity.created_at,
        })
    }
}

/// A single member's score within a league.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub user_id: u64,
    pub score: i32,
}

impl LeaderboardEntry {
    pub fn from_entity(entity: entity::league_leaderboard::Model) -> Result<Self, AppError> {
        Ok(Self {
            user_id: parse_u64_from_string(entity.user_id)?,
            score: entity.score,
        })
    }
}

/// A league together with its leaderboard, as returned by `info`.
///
/// The leaderboard is ordered by score descending, ties broken by user ID.
#[derive(Debug, Clone, PartialEq)]
pub struct LeagueSummary {
    pub league: League,
    pub leaderboard: Vec<LeaderboardEntry>,
}

impl LeagueSummary {
    /// IDs of every member on the leaderboard, in leaderboard order.
    pub fn member_ids(&self) -> Vec<u64> {
        self.leaderboard.iter().map(|entry| entry.user_id).collect()
    }

    /// The score of a member, if they are on the leaderboard.
    pub fn score_of(&self, user_id: u64) -> Option<i32> {
        self.leaderboard
            .iter()
            .find(|entry| entry.user_id == user_id)
            .map(|entry| entry.score)
    }
}

/// Parameters for creating a new league
#[derive(Debug, Clone)]
pub struct CreateLeagueParam {
    pub guild_id: u64,
    pub name: String,
    pub owner_id: u64,
}

/// Result of inviting a set of members to a league.
///
/// Members who already had a pending invitation or who already joined the league
/// are reported as skipped rather than invited twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InviteOutcome {
    pub invited: Vec<u64>,
    pub skipped: Vec<u64>,
}

/// Result of a remove request.
///
/// A requester who does not own the league is not an error condition; the bot
/// answers them with a normal reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    NotOwner { owner_id: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(jobs: &str, latest: &str) -> entity::league::Model {
        entity::league::Model {
            id: 1,
            guild_id: "100".to_string(),
            name: "Chess".to_string(),
            owner_id: "200".to_string(),
            jobs: jobs.to_string(),
            latest: latest.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn converts_entity_with_empty_collections() {
        let league = League::from_entity(entity("{}", "[]")).unwrap();

        assert_eq!(league.guild_id, 100);
        assert_eq!(league.owner_id, 200);
        assert!(league.jobs.is_empty());
        assert!(league.latest.is_empty());
    }

    #[test]
    fn rejects_malformed_jobs_column() {
        let result = League::from_entity(entity("[]", "[]"));

        assert!(result.is_err());
    }

    #[test]
    fn summary_reports_members_and_scores() {
        let summary = LeagueSummary {
            league: League::from_entity(entity("{}", "[]")).unwrap(),
            leaderboard: vec![
                LeaderboardEntry {
                    user_id: 300,
                    score: 5,
                },
                LeaderboardEntry {
                    user_id: 200,
                    score: 0,
                },
            ],
        };

        assert_eq!(summary.member_ids(), vec![300, 200]);
        assert_eq!(summary.score_of(300), Some(5));
        assert_eq!(summary.score_of(999), None);
    }
}
