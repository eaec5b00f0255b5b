//! Application state shared by every bot event handler.
//!
//! `AppState` is built once during startup and cloned into the serenity event
//! handler. All fields are cheap to clone:
//! - `DatabaseConnection` is a connection pool (clones share the pool)
//! - `TimezoneResolver` is behind an `Arc` so its cache is shared
//! - `LeagueLocks` shares its registry through an `Arc`

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::service::{league::LeagueLocks, timezone::TimezoneResolver};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for league data.
    pub db: DatabaseConnection,

    /// City to timezone resolver used by the `timezone` command.
    pub resolver: Arc<TimezoneResolver>,

    /// Per-league locks serializing mutating league commands.
    pub league_locks: LeagueLocks,

    /// Prefix every chat command starts with, e.g. `~`.
    pub command_prefix: String,
}

impl AppState {
    /// Creates the application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool with migrations applied
    /// - `resolver` - Shared timezone resolver
    /// - `command_prefix` - Chat command prefix
    ///
    /// # Returns
    /// - `AppState` - State with an empty league lock registry
    pub fn new(db: DatabaseConnection, resolver: Arc<TimezoneResolver>, command_prefix: String) -> Self {
        Self {
            db,
            resolver,
            league_locks: LeagueLocks::new(),
            command_prefix,
        }
    }
}
