//! Feed to overlay transform.
//!
//! Every located feature contributes exactly one entry to each of the three
//! point overlays, in input order. Features without usable geometry are
//! skipped and counted.

use serde::{Deserialize, Serialize};

use crate::markup::escape_html;
use crate::style::{BoundaryStyle, color_for_depth, marker_size};
use crate::types::{BoundaryCollection, EarthquakeFeature, EarthquakeFeed};

/// A marker handed to the clustering layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterMarker {
    /// `[latitude, longitude]`.
    pub position: [f64; 2],
    /// Popup HTML.
    pub popup: String,
}

/// A coordinate contributed to the heat layer, `[latitude, longitude]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatPoint(pub [f64; 2]);

/// A circle sized by magnitude and coloured by depth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyledCircle {
    /// `[latitude, longitude]`.
    pub position: [f64; 2],
    /// Radius in metres.
    pub radius: f64,
    /// Fill colour.
    pub color: String,
    /// Popup HTML, identical to the cluster marker's.
    pub popup: String,
}

/// The plate-boundary document and its line style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryLayer {
    /// Untouched GeoJSON.
    pub data: BoundaryCollection,
    /// Line style.
    pub style: BoundaryStyle,
}

/// Everything the presentation stage draws on top of the base map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overlays {
    /// Clustered point markers.
    pub markers: Vec<ClusterMarker>,
    /// Heat-map coordinates.
    pub heat: Vec<HeatPoint>,
    /// Styled circles.
    pub circles: Vec<StyledCircle>,
    /// Plate boundaries.
    pub boundaries: BoundaryLayer,
    /// Number of input features dropped for lacking geometry.
    #[serde(skip)]
    pub skipped: usize,
}

/// Summary numbers for logging.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OverlayStats {
    /// Events drawn.
    pub events: usize,
    /// Events skipped.
    pub skipped: usize,
    /// Largest circle radius, if any event was drawn.
    pub max_radius: Option<f64>,
}

impl Overlays {
    /// Summary of the overlay contents.
    pub fn stats(&self) -> OverlayStats {
        let max_radius = self
            .circles
            .iter()
            .map(|c| c.radius)
            .fold(None, |acc: Option<f64>, r| Some(acc.map_or(r, |m| m.max(r))));
        OverlayStats {
            events: self.markers.len(),
            skipped: self.skipped,
            max_radius,
        }
    }

    /// True when no event made it onto the map.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

/// Builds the overlay collections from a feed and a boundary document.
pub fn transform(feed: &EarthquakeFeed, boundaries: BoundaryCollection) -> Overlays {
    let capacity = feed.features.len();
    let mut markers = Vec::with_capacity(capacity);
    let mut heat = Vec::with_capacity(capacity);
    let mut circles = Vec::with_capacity(capacity);
    let mut skipped = 0;

    for feature in &feed.features {
        let Some(geometry) = feature.geometry.as_ref() else {
            skipped += 1;
            continue;
        };
        let Some(position) = geometry.lat_lon() else {
            skipped += 1;
            continue;
        };

        let depth = geometry.depth_km();
        let popup = popup_html(feature, depth);

        markers.push(ClusterMarker {
            position,
            popup: popup.clone(),
        });
        heat.push(HeatPoint(position));
        circles.push(StyledCircle {
            position,
            radius: marker_size(feature.magnitude()),
            color: color_for_depth(depth).color().to_string(),
            popup,
        });
    }

    tracing::debug!(
        events = markers.len(),
        skipped,
        boundaries = ?boundaries.feature_count(),
        "Transformed feed into overlays"
    );

    Overlays {
        markers,
        heat,
        circles,
        boundaries: BoundaryLayer {
            data: boundaries,
            style: BoundaryStyle::default(),
        },
        skipped,
    }
}

fn popup_html(feature: &EarthquakeFeature, depth_km: f64) -> String {
    format!(
        "<h3>{}</h3><hr><p>Magnitude: {}</p><p>Depth: {} km</p>",
        escape_html(feature.title()),
        feature.magnitude(),
        depth_km
    )
}
