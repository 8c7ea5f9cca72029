//! # quakemap-client
//!
//! Acquires the two documents a Quakemap render needs:
//! - the earthquake feed (USGS summary GeoJSON by default)
//! - the tectonic plate-boundary GeoJSON
//!
//! Both are fetched through a [`FeedSource`], concurrently, and decoded into
//! `quakemap-core` types. No retries and no caching: a failed fetch is
//! returned to the caller.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod client;
pub mod error;
pub mod feeds;
pub mod source;

pub use client::{Acquired, FeedClient};
pub use error::{Error, Result};
pub use feeds::{DEFAULT_PLATES_URL, FeedLocation, FeedPeriod};
pub use source::{FeedSource, StandardFeedSource};
