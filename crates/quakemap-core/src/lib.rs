//! Quakemap core: the feed model, marker styling and the feature transform.
//!
//! This crate has no network or rendering dependencies. It turns a parsed
//! earthquake feed plus a plate-boundary document into the overlay
//! collections a map renderer consumes.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`types`]: GeoJSON feed model
//! - [`markup`]: HTML text escaping
//! - [`style`]: Marker size and depth colour derivations
//! - [`transform`]: Feed to overlay transform

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod markup;
pub mod style;
pub mod transform;
pub mod types;

#[cfg(test)]
mod proptests;

pub use error::{Error, Result};
pub use markup::escape_html;
pub use style::{BoundaryStyle, CircleStyle, DepthBucket, color_for_depth, marker_size};
pub use transform::{
    BoundaryLayer, ClusterMarker, HeatPoint, OverlayStats, Overlays, StyledCircle, transform,
};
pub use types::{BoundaryCollection, EarthquakeFeature, EarthquakeFeed, FeedMetadata, Geometry};
