use thiserror::Error;

/// Failures while resolving a city name to an IANA timezone.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimezoneError {
    /// The geocoding service returned no match for the city.
    #[error("Could not find a city named {0}")]
    CityNotFound(String),

    /// The coordinates fall outside every timezone polygon of the offline index.
    #[error("No timezone found at latitude {latitude}, longitude {longitude}")]
    TimezoneNotFound { latitude: String, longitude: String },

    /// The geocoding request did not complete within the configured timeout.
    #[error("Geocoding request timed out: {0}")]
    Timeout(String),

    /// The geocoding request failed before a response was received.
    #[error("Geocoding request failed: {0}")]
    Transport(String),

    /// The geocoding service answered with a non-success status.
    #[error("Geocoding service responded with status {status}: {message}")]
    Status { status: u16, message: String },

    /// The geocoding response body was not the expected JSON.
    #[error("Invalid geocoding response: {0}")]
    Decode(String),

    /// The offline lookup task did not run to completion.
    #[error("Timezone lookup task failed: {0}")]
    Lookup(String),
}

impl TimezoneError {
    /// Whether a retry of the same request might succeed.
    ///
    /// Timeouts, transport failures, rate limiting and server errors are transient;
    /// everything else is an answer that will not change on retry.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Timeout(_) | Self::Transport(_) => true,
            Self::Status { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}
