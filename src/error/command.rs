use thiserror::Error;

/// Failures while parsing a chat command into its arguments.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// A required argument was not supplied.
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    /// The argument could not be read as a member mention or user ID.
    #[error("Invalid member: {0}")]
    InvalidMember(String),

    /// A double-quoted argument was opened but never closed.
    #[error("Unterminated quote in: {0}")]
    UnterminatedQuote(String),

    /// The subcommand is not one the bot knows.
    #[error("Unknown league command: {0}")]
    UnknownSubcommand(String),
}
