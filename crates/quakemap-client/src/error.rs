//! Error types for quakemap-client

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for quakemap-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while acquiring feeds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("{url} returned HTTP {status}")]
    Status {
        /// Requested URL
        url: String,
        /// Response status code
        status: u16,
    },

    /// The payload was fetched but could not be decoded
    #[error("Failed to decode {location}: {source}")]
    Decode {
        /// Where the payload came from
        location: String,
        /// Decoding failure
        #[source]
        source: quakemap_core::Error,
    },

    /// Local feed file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Client setup problem
    #[error("Configuration error: {message}")]
    Config {
        /// What is misconfigured
        message: String,
    },
}

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Wraps a decoding failure with the location it came from.
    pub fn decode(location: impl ToString, source: quakemap_core::Error) -> Self {
        Error::Decode {
            location: location.to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = Error::Status {
            url: "https://example.test/feed".to_string(),
            status: 503,
        };
        assert_eq!(err.to_string(), "https://example.test/feed returned HTTP 503");
    }

    #[test]
    fn test_io_display() {
        let err = Error::Io {
            path: PathBuf::from("/tmp/missing.geojson"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().starts_with("Failed to read /tmp/missing.geojson"));
    }

    #[test]
    fn test_decode_display() {
        let err = Error::decode(
            "plates.json",
            quakemap_core::Error::invalid_feed("must be a JSON object"),
        );
        assert_eq!(
            err.to_string(),
            "Failed to decode plates.json: Invalid feed: must be a JSON object"
        );
    }
}
