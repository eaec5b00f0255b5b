use std::str::FromStr;
use std::time::Duration;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_COMMAND_PREFIX: &str = "~";
const DEFAULT_GEOCODING_URL: &str = "https://nominatim.openstreetmap.org/search.php";
const DEFAULT_GEOCODING_USER_AGENT: &str = "leaguebot/0.1";
const DEFAULT_GEOCODING_TIMEOUT_SECS: u64 = 10;
const DEFAULT_GEOCODING_MAX_RETRIES: u32 = 2;
const DEFAULT_GEOCODING_CACHE_TTL_SECS: u64 = 300;

pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,
    pub command_prefix: String,

    pub geocoding_url: url::Url,
    pub geocoding_user_agent: String,
    pub geocoding_timeout: Duration,
    pub geocoding_max_retries: u32,
    pub geocoding_cache_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, or `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and all values valid
    /// - `Err(AppError::ConfigErr(MissingEnvVar))` - A required variable is unset
    /// - `Err(AppError::ConfigErr(InvalidEnvVar))` - A value cannot be parsed
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let required = |key: &str| -> Result<String, ConfigError> {
            lookup(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            command_prefix: lookup("COMMAND_PREFIX")
                .unwrap_or_else(|| DEFAULT_COMMAND_PREFIX.to_string()),
            geocoding_url: parse_or("GEOCODING_URL", lookup("GEOCODING_URL"), || {
                url::Url::parse(DEFAULT_GEOCODING_URL).map_err(|_| ConfigError::InvalidEnvVar {
                    key: "GEOCODING_URL".to_string(),
                    value: DEFAULT_GEOCODING_URL.to_string(),
                })
            })?,
            geocoding_user_agent: lookup("GEOCODING_USER_AGENT")
                .unwrap_or_else(|| DEFAULT_GEOCODING_USER_AGENT.to_string()),
            geocoding_timeout: Duration::from_secs(parse_or(
                "GEOCODING_TIMEOUT_SECS",
                lookup("GEOCODING_TIMEOUT_SECS"),
                || Ok(DEFAULT_GEOCODING_TIMEOUT_SECS),
            )?),
            geocoding_max_retries: parse_or(
                "GEOCODING_MAX_RETRIES",
                lookup("GEOCODING_MAX_RETRIES"),
                || Ok(DEFAULT_GEOCODING_MAX_RETRIES),
            )?,
            geocoding_cache_ttl: Duration::from_secs(parse_or(
                "GEOCODING_CACHE_TTL_SECS",
                lookup("GEOCODING_CACHE_TTL_SECS"),
                || Ok(DEFAULT_GEOCODING_CACHE_TTL_SECS),
            )?),
        })
    }
}

/// Parses an optional variable, falling back to `default` when unset.
fn parse_or<T: FromStr>(
    key: &str,
    value: Option<String>,
    default: impl FnOnce() -> Result<T, ConfigError>,
) -> Result<T, ConfigError> {
    match value {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidEnvVar {
                key: key.to_string(),
                value,
            }),
        None => default(),
    }
}
