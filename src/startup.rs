use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    error::AppError,
    service::timezone::{NominatimGeocoder, RetryPolicy, TimezoneCache, TimezoneResolver},
};

/// Installs the global tracing subscriber.
///
/// Log levels come from `RUST_LOG` when set, otherwise everything at `info` and above
/// is printed. When a global subscriber is already installed it is kept and the
/// failed install is logged through it at `debug`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Err(e) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        tracing::debug!("Tracing subscriber already installed: {}", e);
    }
}

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so that the league tables exist before the bot
/// handles its first command.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the timezone resolver from configuration.
///
/// Loads the offline timezone index on the blocking pool, since building it decodes
/// the embedded polygon data.
///
/// # Returns
/// - `Ok(Arc<TimezoneResolver>)` - Resolver backed by the configured geocoding endpoint
/// - `Err(AppError::ReqwestErr)` - The HTTP client could not be constructed
/// - `Err(AppError::InternalError)` - The index loading task failed
pub async fn setup_timezone_resolver(config: &Config) -> Result<Arc<TimezoneResolver>, AppError> {
    let geocoder = NominatimGeocoder::new(
        config.geocoding_url.clone(),
        config.geocoding_user_agent.clone(),
        config.geocoding_timeout,
    )?;

    let finder = tokio::task::spawn_blocking(tzf_rs::DefaultFinder::new)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to load timezone index: {}", e)))?;

    tracing::debug!("Timezone index loaded");

    Ok(Arc::new(TimezoneResolver::new(
        Arc::new(geocoder),
        Arc::new(finder),
        TimezoneCache::new(config.geocoding_cache_ttl),
        RetryPolicy {
            max_retries: config.geocoding_max_retries,
            ..RetryPolicy::default()
        },
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that installing the subscriber a second time keeps the first one.
    ///
    /// Expected: no panic, and events still reach the installed subscriber
    #[test]
    fn repeated_init_keeps_subscriber() {
        init_tracing();
        init_tracing();

        tracing::info!("subscriber still installed");
    }
}
