mod bot;
mod config;
mod data;
mod error;
mod model;
mod service;
mod startup;
mod state;
mod util;

use crate::{config::Config, error::AppError, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let resolver = startup::setup_timezone_resolver(&config).await?;

    let state = AppState::new(db, resolver, config.command_prefix.clone());

    tracing::info!("Starting leaguebot");

    let client = bot::start::init_bot(&config, state).await?;
    bot::start::start_bot(client).await
}
