//! Error types for quakemap-cli

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for quakemap-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in quakemap-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Feed acquisition failed
    #[error("Feed error: {0}")]
    Client(#[from] quakemap_client::Error),

    /// Map assembly or rendering failed
    #[error("Render error: {0}")]
    Render(#[from] quakemap_render::Error),

    /// Configuration could not be resolved, parsed or written
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// File system failure
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path involved.
    pub fn io_with_path(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
