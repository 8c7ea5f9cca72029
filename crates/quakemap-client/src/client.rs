//! Feed acquisition client.

use std::sync::Arc;
use std::time::Duration;

use quakemap_core::{BoundaryCollection, EarthquakeFeed};

use crate::feeds::FeedLocation;
use crate::source::{FeedSource, StandardFeedSource};
use crate::{Error, Result};

/// Both documents a render needs.
#[derive(Debug, Clone)]
pub struct Acquired {
    /// Parsed earthquake feed.
    pub feed: EarthquakeFeed,
    /// Plate-boundary document.
    pub boundaries: BoundaryCollection,
}

/// Fetches and decodes the earthquake and plate-boundary feeds.
#[derive(Clone)]
pub struct FeedClient {
    source: Arc<dyn FeedSource>,
}

impl std::fmt::Debug for FeedClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedClient").finish_non_exhaustive()
    }
}

impl FeedClient {
    /// Creates a client over an arbitrary source.
    pub fn new(source: Arc<dyn FeedSource>) -> Self {
        Self { source }
    }

    /// Creates a client backed by [`StandardFeedSource`].
    pub fn standard(timeout: Option<Duration>) -> Result<Self> {
        Ok(Self::new(Arc::new(StandardFeedSource::new(timeout)?)))
    }

    /// Fetches and decodes the earthquake feed.
    pub async fn fetch_earthquakes(&self, location: &FeedLocation) -> Result<EarthquakeFeed> {
        let body = self.source.fetch(location).await?;
        let feed = EarthquakeFeed::from_slice(&body).map_err(|e| Error::decode(location, e))?;

        tracing::info!(
            location = %location,
            features = feed.features.len(),
            title = feed.metadata.as_ref().and_then(|m| m.title.as_deref()).unwrap_or("-"),
            "Earthquake feed loaded"
        );
        Ok(feed)
    }

    /// Fetches and decodes the plate-boundary document.
    pub async fn fetch_boundaries(&self, location: &FeedLocation) -> Result<BoundaryCollection> {
        let body = self.source.fetch(location).await?;
        let boundaries =
            BoundaryCollection::from_slice(&body).map_err(|e| Error::decode(location, e))?;

        tracing::info!(
            location = %location,
            features = ?boundaries.feature_count(),
            "Plate boundaries loaded"
        );
        Ok(boundaries)
    }

    /// Fetches both documents concurrently.
    ///
    /// The requests are independent; the first failure is returned and the
    /// other request is dropped.
    pub async fn acquire(
        &self,
        earthquakes: &FeedLocation,
        plates: &FeedLocation,
    ) -> Result<Acquired> {
        let (feed, boundaries) = tokio::try_join!(
            self.fetch_earthquakes(earthquakes),
            self.fetch_boundaries(plates)
        )?;
        Ok(Acquired { feed, boundaries })
    }
}
