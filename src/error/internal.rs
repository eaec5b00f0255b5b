use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Snowflakes are stored as strings; a stored value that no longer parses means
    /// the row was written by something other than this bot.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// A JSON text column held something other than the expected JSON shape.
    #[error("Malformed JSON in column '{column}': {source}")]
    MalformedJsonColumn {
        /// Name of the column being decoded
        column: &'static str,
        /// The underlying decode error
        #[source]
        source: serde_json::Error,
    },
}
