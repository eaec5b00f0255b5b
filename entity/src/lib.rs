//! SeaORM entity models for the league tables.
//!
//! Every table is partitioned by the Discord guild it belongs to. Snowflake ids
//! (guilds and users) are stored as strings.

pub mod prelude;

pub mod league;
pub mod league_invitation;
pub mod league_joined;
pub mod league_leaderboard;
pub mod league_member;
