//! Message handler: the chat command entry point.
//!
//! Every guild message from a non-bot author is parsed as a command. Recognised
//! commands are dispatched to the league or timezone handler and the resulting embed
//! is sent back to the channel. Errors meant for the member are shown with their
//! message; all other errors are logged and answered with a generic failure embed.

use serenity::all::{Context, CreateEmbed, CreateMessage, GuildId, Message, UserId};

use crate::{
    bot::{
        command::{self, Command},
        reply,
    },
    error::AppError,
    service::league::LeagueService,
    state::AppState,
};

/// Handle message creation in a channel
pub async fn handle_message(state: &AppState, ctx: Context, message: Message) {
    if message.author.bot {
        return;
    }

    // Leagues are per guild; direct messages have nothing to act on
    let Some(guild_id) = message.guild_id else {
        return;
    };

    let embed = match command::parse(&state.command_prefix, &message.content) {
        Ok(Some(command)) => {
            tracing::debug!(
                "Dispatching {:?} from {} in guild {}",
                command,
                message.author.id,
                guild_id
            );

            match dispatch(state, guild_id, message.author.id, command).await {
                Ok(embed) => embed,
                Err(err) => error_embed(&err),
            }
        }
        Ok(None) => return,
        Err(err) => error_embed(&AppError::from(err)),
    };

    if let Err(e) = message
        .channel_id
        .send_message(&ctx.http, CreateMessage::new().embed(embed))
        .await
    {
        tracing::error!(
            "Failed to send reply in channel {}: {}",
            message.channel_id,
            e
        );
    }
}

async fn dispatch(
    state: &AppState,
    guild_id: GuildId,
    author_id: UserId,
    command: Command,
) -> Result<CreateEmbed, AppError> {
    match command {
        Command::League(command) => {
            let service = LeagueService::new(&state.db, &state.league_locks);
            super::league::execute(
                &service,
                &state.command_prefix,
                guild_id.get(),
                author_id.get(),
                command,
            )
            .await
        }
        Command::Timezone { city } => super::timezone::execute(&state.resolver, &city).await,
    }
}

/// Renders an error as a reply embed.
///
/// User-facing errors are shown as-is; anything else is logged and replaced by a
/// generic failure.
fn error_embed(err: &AppError) -> CreateEmbed {
    if err.is_user_facing() {
        return reply::user_error(err.to_string());
    }

    tracing::error!("Command failed: {}", err);
    reply::failure()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{command::CommandError, league::LeagueError};

    fn description(embed: CreateEmbed) -> String {
        serde_json::to_value(embed).unwrap()["description"]
            .as_str()
            .unwrap()
            .to_string()
    }

    #[test]
    fn user_facing_errors_show_their_message() {
        let err = AppError::from(LeagueError::MemberNotInLeague {
            member: 2,
            league: "Chess".to_string(),
        });

        assert_eq!(description(error_embed(&err)), err.to_string());
    }

    #[test]
    fn command_errors_show_their_message() {
        let err = AppError::from(CommandError::MissingArgument("league name"));

        assert_eq!(
            description(error_embed(&err)),
            "Missing argument: league name"
        );
    }

    #[test]
    fn internal_errors_are_hidden() {
        let err = AppError::from(sea_orm::DbErr::Custom("disk I/O error".to_string()));

        let text = description(error_embed(&err));

        assert!(!text.contains("disk"));
    }
}
