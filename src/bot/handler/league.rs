//! League command handler.
//!
//! Maps each `LeagueCommand` onto the matching `LeagueService` operation and renders
//! the result. `remove` by someone other than the owner is answered with the
//! "not the owner" embed rather than an error.

use serenity::all::CreateEmbed;

use crate::{
    bot::{command::LeagueCommand, reply},
    error::AppError,
    model::league::RemoveOutcome,
    service::league::LeagueService,
};

/// Executes a league command on behalf of `author_id`.
///
/// # Arguments
/// - `service` - League service bound to the application's database and locks
/// - `prefix` - Command prefix, used in the usage reply
/// - `guild_id` - Guild the command was sent in
/// - `author_id` - Member who sent the command
/// - `command` - Parsed league command
///
/// # Returns
/// - `Ok(CreateEmbed)` - Reply to send, including the not-owner reply
/// - `Err(AppError)` - The operation failed
pub async fn execute(
    service: &LeagueService<'_>,
    prefix: &str,
    guild_id: u64,
    author_id: u64,
    command: LeagueCommand,
) -> Result<CreateEmbed, AppError> {
    let embed = match command {
        LeagueCommand::Usage => reply::usage(prefix),
        LeagueCommand::Info { name } => reply::league_info(&service.info(guild_id, &name).await?),
        LeagueCommand::Create { name } => {
            reply::league_created(&service.create(guild_id, &name, author_id).await?)
        }
        LeagueCommand::Invite { name, members } => {
            let outcome = service.invite(guild_id, &name, &members).await?;
            reply::invitations_sent(name.trim(), &outcome)
        }
        LeagueCommand::Remove { member, name } => {
            match service.remove(guild_id, &name, member, author_id).await? {
                RemoveOutcome::Removed => reply::member_removed(name.trim(), member),
                RemoveOutcome::NotOwner { .. } => reply::not_owner(name.trim()),
            }
        }
        LeagueCommand::Accept { name } => {
            reply::invitation_accepted(&service.accept(guild_id, &name, author_id).await?)
        }
        LeagueCommand::Decline { name } => {
            service.decline(guild_id, &name, author_id).await?;
            reply::invitation_declined(name.trim())
        }
        LeagueCommand::Invitations => {
            reply::pending_invitations(&service.invitations(guild_id, author_id).await?)
        }
    };

    Ok(embed)
}
