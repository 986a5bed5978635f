use botdeck_common::FromMessage;

/// Crate-wide result type for directory operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Typed errors for directory lookups.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Plain contextual message.
    #[error("{0}")]
    Message(String),

    /// Transport-level failure (connect, timeout, decode).
    #[error("directory request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The upstream answered with a non-success status.
    #[error("directory returned HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// JSON (de)serialization failed.
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

impl Error {
    #[must_use]
    pub fn status(url: impl Into<String>, status: u16) -> Self {
        Self::Status {
            url: url.into(),
            status,
        }
    }
}

impl FromMessage for Error {
    fn from_message(message: String) -> Self {
        Self::Message(message)
    }
}

botdeck_common::impl_context!();
