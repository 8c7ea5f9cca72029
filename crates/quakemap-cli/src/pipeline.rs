//! Acquire → transform → assemble → write.

use std::path::PathBuf;

use quakemap_client::{FeedClient, FeedLocation};
use quakemap_core::transform;
use quakemap_render::{MapDocument, render_html};

use crate::config::QuakemapConfig;
use crate::{Error, Result};

/// What a render produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSummary {
    /// Written file.
    pub output: PathBuf,
    /// Events drawn.
    pub events: usize,
    /// Events skipped for lacking geometry.
    pub skipped: usize,
    /// Page size in bytes.
    pub bytes: usize,
}

/// Runs the full pipeline with the standard feed source.
pub async fn run_render(config: &QuakemapConfig) -> Result<RenderSummary> {
    let client = FeedClient::standard(config.feeds.timeout())?;
    run_render_with(&client, config).await
}

/// Runs the full pipeline with the given client.
///
/// Nothing is written unless both feeds were acquired and the page rendered.
pub async fn run_render_with(
    client: &FeedClient,
    config: &QuakemapConfig,
) -> Result<RenderSummary> {
    let earthquakes = FeedLocation::parse(&config.feeds.earthquakes);
    let plates = FeedLocation::parse(&config.feeds.plates);

    let acquired = client.acquire(&earthquakes, &plates).await?;
    let overlays = transform(&acquired.feed, acquired.boundaries);
    let stats = overlays.stats();

    tracing::info!(
        events = stats.events,
        skipped = stats.skipped,
        max_radius = ?stats.max_radius,
        "Feed transformed"
    );

    let doc = MapDocument::assemble(&overlays, &config.map)?;
    let page = render_html(&doc)?;

    let output = config.output.path.clone();
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| Error::io_with_path(e, parent))?;
    }
    tokio::fs::write(&output, page.as_bytes())
        .await
        .map_err(|e| Error::io_with_path(e, &output))?;

    tracing::info!(path = %output.display(), bytes = page.len(), "Map written");

    Ok(RenderSummary {
        output,
        events: stats.events,
        skipped: stats.skipped,
        bytes: page.len(),
    })
}
