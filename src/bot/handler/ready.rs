//! Ready event handler for bot initialization.
//!
//! The `ready` event fires once per gateway connection after authentication. It is
//! used to log the connection and set the bot's activity.

use serenity::all::{ActivityData, Context, Ready};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context for setting activity status
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord in {} guild(s)",
        ready.user.name,
        ready.guilds.len()
    );

    ctx.set_activity(Some(ActivityData::custom("Managing leagues")));
}
