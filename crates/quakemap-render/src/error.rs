//! Error types for quakemap-render

use thiserror::Error;

/// Result type alias for quakemap-render operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while assembling or rendering a map
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Map settings that cannot produce a usable view
    #[error("Invalid map settings: {message}")]
    InvalidSettings {
        /// What is wrong
        message: String,
    },

    /// Document could not be serialized for embedding
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Creates a new invalid settings error.
    pub fn invalid_settings<S: Into<String>>(message: S) -> Self {
        Error::InvalidSettings {
            message: message.into(),
        }
    }
}
