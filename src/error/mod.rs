//! Error types and chat reply classification.
//!
//! This module provides the application's error hierarchy. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors. Command handlers
//! return `AppError` and the bot decides, through `is_user_facing`, whether the error
//! message is shown to the member or replaced by a generic failure reply.

pub mod command;
pub mod config;
pub mod internal;
pub mod league;
pub mod timezone;

use thiserror::Error;

use crate::error::{
    command::CommandError, config::ConfigError, internal::InternalError, league::LeagueError,
    timezone::TimezoneError,
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most variants
/// use `#[from]` for automatic error conversion with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// League operation rejected because of the state of the league or member.
    ///
    /// Shown to the member as-is.
    #[error(transparent)]
    LeagueErr(#[from] LeagueError),

    /// City could not be resolved to a timezone.
    ///
    /// `CityNotFound` is shown to the member; transport failures are not.
    #[error(transparent)]
    TimezoneErr(#[from] TimezoneError),

    /// Chat command could not be parsed.
    ///
    /// Shown to the member as-is.
    #[error(transparent)]
    CommandErr(#[from] CommandError),

    /// Unexpected data encountered in the database.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// HTTP client construction error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Internal error with custom message.
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Whether the error message is meant for the member who ran the command.
    ///
    /// Everything else is logged and answered with a generic failure message so that
    /// database and transport details never reach the chat.
    pub fn is_user_facing(&self) -> bool {
        match self {
            Self::LeagueErr(_) | Self::CommandErr(_) => true,
            Self::TimezoneErr(err) => matches!(
                err,
                TimezoneError::CityNotFound(_) | TimezoneError::TimezoneNotFound { .. }
            ),
            _ => false,
        }
    }
}
