use serenity::all::{Client, GatewayIntents};

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;
use crate::state::AppState;

/// Builds the Discord client with the bot's event handler.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `state` - Shared application state handed to the event handler
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError::DiscordErr)` - The client could not be built
pub async fn init_bot(config: &Config, state: AppState) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(Handler::new(state))
        .await?;

    Ok(client)
}

/// Starts the Discord bot in a blocking manner
///
/// Connects to the gateway and processes events until the connection shuts down.
///
/// # Arguments
/// - `client` - Client built by `init_bot`
///
/// # Returns
/// - `Ok(())` - The bot shut down cleanly
/// - `Err(AppError::DiscordErr)` - Connecting to or staying on the gateway failed
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
