//! Feed sources.
//!
//! A [`FeedSource`] turns a [`FeedLocation`] into raw bytes. The standard
//! source fetches remote locations with `reqwest` and reads local ones with
//! `tokio::fs`.

use std::time::Duration;

use async_trait::async_trait;

use crate::feeds::FeedLocation;
use crate::{Error, Result};

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("quakemap/", env!("CARGO_PKG_VERSION"));

/// Fetches raw feed documents.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Returns the document body at `location`.
    async fn fetch(&self, location: &FeedLocation) -> Result<Vec<u8>>;
}

/// HTTP(S) plus local-file source.
#[derive(Debug, Clone)]
pub struct StandardFeedSource {
    http: reqwest::Client,
}

impl StandardFeedSource {
    /// Creates a source whose requests time out after `timeout`.
    ///
    /// `None` leaves requests without a deadline.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
        })
    }

    async fn fetch_remote(&self, url: &reqwest::Url) -> Result<Vec<u8>> {
        tracing::info!(url = %url, "Fetching feed");

        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        tracing::debug!(url = %url, bytes = body.len(), "Feed downloaded");
        Ok(body.to_vec())
    }

    async fn fetch_local(&self, path: &std::path::Path) -> Result<Vec<u8>> {
        tracing::info!(path = %path.display(), "Reading feed file");

        tokio::fs::read(path).await.map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[async_trait]
impl FeedSource for StandardFeedSource {
    async fn fetch(&self, location: &FeedLocation) -> Result<Vec<u8>> {
        match location {
            FeedLocation::Remote(url) => self.fetch_remote(url).await,
            FeedLocation::Local(path) => self.fetch_local(path).await,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_reads_local_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("feed.geojson");
        std::fs::write(&path, br#"{"features":[]}"#).unwrap();

        let source = StandardFeedSource::new(None).unwrap();
        let body = source.fetch(&FeedLocation::Local(path)).await.unwrap();
        assert_eq!(body, br#"{"features":[]}"#);
    }

    #[tokio::test]
    async fn test_missing_local_file() {
        let source = StandardFeedSource::new(None).unwrap();
        let location = FeedLocation::Local(PathBuf::from("/nonexistent/quakemap/feed.geojson"));
        let err = source.fetch(&location).await.unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_user_agent() {
        assert!(USER_AGENT.starts_with("quakemap/"));
    }
}
