//! Domain & parameter models.
//!
//! Repositories convert SeaORM entity models into these types at the data layer
//! boundary so that entity models never leak into services or the bot.

pub mod league;
pub mod member;
pub mod timezone;
