//! Discord bot integration for the league and timezone commands.
//!
//! The bot listens to guild messages, parses prefixed chat commands with `command`,
//! runs them through the services, and answers with embeds from `reply`. It is
//! initialized during startup and runs until the gateway connection shuts down.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild availability events
//! - `GUILD_MESSAGES` - Receive messages sent in guild channels
//! - `MESSAGE_CONTENT` - Read the text of those messages (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod command;
pub mod handler;
pub mod reply;
pub mod start;
