//! # quakemap-render
//!
//! Presentation assembly. Turns transformed overlays into a [`MapDocument`]
//! (base tiles, overlay switcher, legend, initial view) and renders it as a
//! standalone HTML page driven by Leaflet, Leaflet.markercluster and
//! Leaflet.heat. Tiling, clustering and heat rendering happen in the browser.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod document;
pub mod error;
pub mod html;

pub use document::{
    Corner, HeatStyle, Legend, LegendEntry, MapDocument, MapSettings, OverlayKind, OverlayToggle,
    TileLayer, View,
};
pub use error::{Error, Result};
pub use html::{MAP_CONTAINER_ID, render_html};
