//! Error handling for the dwmstat status generator.

/// A specialized `Result` type for dwmstat operations.
pub type Result<T> = std::result::Result<T, StatusError>;

/// Result of a single Value Reader invocation.
pub type ReadResult<T> = std::result::Result<T, ReadError>;

/// Why a single reading could not be produced for this tick.
///
/// Collectors always absorb these and degrade to an empty fragment or the
/// unknown marker; they never reach the aggregator or the scheduler.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReadError {
    /// File missing or unreadable, command not found, non-zero exit or timeout
    #[error("{origin} unavailable: {reason}")]
    SourceUnavailable { origin: String, reason: String },

    /// Content was read but did not have the expected shape
    #[error("failed to parse {origin}: {reason}")]
    ParseFailed { origin: String, reason: String },
}

impl ReadError {
    /// Create a new unavailable-source error
    pub fn unavailable(origin: impl Into<String>, reason: impl ToString) -> Self {
        Self::SourceUnavailable {
            origin: origin.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a new parse failure
    pub fn parse_failed(origin: impl Into<String>, reason: impl ToString) -> Self {
        Self::ParseFailed {
            origin: origin.into(),
            reason: reason.to_string(),
        }
    }
}

/// The main error type for dwmstat operations.
#[derive(Debug, thiserror::Error)]
pub enum StatusError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file parsing failed
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Status could not be published to the display
    #[error("Publish error: {0}")]
    Publish(String),
}

impl StatusError {
    /// Create a new parse error
    pub fn parse_error(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a new configuration error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new publish error
    pub fn publish_error(msg: impl Into<String>) -> Self {
        Self::Publish(msg.into())
    }
}

impl From<serde_json::Error> for StatusError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse_error(err.to_string())
    }
}
