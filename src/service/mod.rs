//! Business logic layer between the bot's command handlers and the data layer.
//!
//! - `league` - League operations, per-league mutation locks and transactions
//! - `timezone` - City to IANA timezone resolution with retries and memoization

pub mod league;
pub mod timezone;
