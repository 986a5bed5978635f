/// Crate-wide result type for channel-configuration operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Typed errors shared across the configuration store and schema helpers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input payload or parameter is invalid.
    #[error("invalid channel configuration: {message}")]
    InvalidInput { message: String },

    /// A requested configuration id does not exist.
    #[error("unknown channel configuration: {id}")]
    UnknownConfig { id: i64 },

    /// A bot already has a default configuration.
    #[error("bot '{bot_id}' already has a default configuration")]
    DuplicateDefault { bot_id: String },

    /// JSON (de)serialization failed.
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

impl Error {
    #[must_use]
    pub fn invalid_input(message: impl std::fmt::Display) -> Self {
        Self::InvalidInput {
            message: message.to_string(),
        }
    }

    #[must_use]
    pub fn unknown_config(id: i64) -> Self {
        Self::UnknownConfig { id }
    }

    #[must_use]
    pub fn duplicate_default(bot_id: impl Into<String>) -> Self {
        Self::DuplicateDefault {
            bot_id: bot_id.into(),
        }
    }
}
