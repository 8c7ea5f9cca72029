//! Error types for quakemap-core.

/// Errors raised while decoding feeds.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The document parsed but is not the expected GeoJSON shape
    #[error("Invalid feed: {message}")]
    InvalidFeed {
        /// What was wrong with the document
        message: String,
    },
}

/// Result type alias for quakemap-core operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new invalid feed error.
    pub fn invalid_feed<S: Into<String>>(message: S) -> Self {
        Error::InvalidFeed {
            message: message.into(),
        }
    }
}
