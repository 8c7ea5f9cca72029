//! Map document assembly.
//!
//! A [`MapDocument`] is everything the page script needs, in one
//! serializable value: base tile layers, the four overlays, which of them
//! start visible, the initial view, and the legend.

use serde::{Deserialize, Serialize};

use quakemap_core::{CircleStyle, DepthBucket, Overlays};

use crate::{Error, Result};

/// Highest zoom level the default tile servers publish.
pub const MAX_ZOOM: u8 = 19;

/// A raster tile source offered as a base layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileLayer {
    /// Name shown in the layer switcher.
    pub name: String,
    /// URL template with `{s}`, `{z}`, `{x}`, `{y}` placeholders.
    pub url: String,
    /// Attribution HTML required by the tile provider.
    pub attribution: String,
    /// Highest zoom served by the source.
    #[serde(default = "default_max_zoom", alias = "max_zoom")]
    pub max_zoom: u8,
}

impl TileLayer {
    /// OpenStreetMap standard tiles.
    pub fn street() -> Self {
        Self {
            name: "Street Map".to_string(),
            url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors".to_string(),
            max_zoom: MAX_ZOOM,
        }
    }

    /// OpenTopoMap tiles.
    pub fn topographic() -> Self {
        Self {
            name: "Topographic Map".to_string(),
            url: "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "Map data: &copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors, <a href=\"http://viewfinderpanoramas.org\">SRTM</a> | Map style: &copy; <a href=\"https://opentopomap.org\">OpenTopoMap</a> (<a href=\"https://creativecommons.org/licenses/by-sa/3.0/\">CC-BY-SA</a>)".to_string(),
            max_zoom: 17,
        }
    }
}

fn default_max_zoom() -> u8 {
    MAX_ZOOM
}

/// The four data overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayKind {
    /// Clustered markers.
    Earthquakes,
    /// Heat map.
    Heatmap,
    /// Magnitude/depth circles.
    Circles,
    /// Plate boundaries.
    Plates,
}

impl OverlayKind {
    /// Switcher order.
    pub const ALL: [OverlayKind; 4] = [
        OverlayKind::Earthquakes,
        OverlayKind::Heatmap,
        OverlayKind::Circles,
        OverlayKind::Plates,
    ];

    /// Label shown in the layer switcher.
    pub const fn label(self) -> &'static str {
        match self {
            OverlayKind::Earthquakes => "Earthquakes",
            OverlayKind::Heatmap => "Heatmap",
            OverlayKind::Circles => "Circles",
            OverlayKind::Plates => "Tectonic Plates",
        }
    }
}

/// Screen corner for a Leaflet control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Corner {
    /// Top left.
    TopLeft,
    /// Top right.
    TopRight,
    /// Bottom left.
    BottomLeft,
    /// Bottom right.
    #[default]
    BottomRight,
}

/// Heat layer kernel settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatStyle {
    /// Point radius in pixels.
    pub radius: u32,
    /// Blur in pixels.
    pub blur: u32,
}

impl Default for HeatStyle {
    fn default() -> Self {
        Self {
            radius: 20,
            blur: 35,
        }
    }
}

/// Fixed presentation choices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapSettings {
    /// Page title.
    pub title: String,
    /// Initial centre, `[latitude, longitude]`.
    pub center: [f64; 2],
    /// Initial zoom level.
    pub zoom: u8,
    /// Overlays switched on when the page loads.
    pub default_overlays: Vec<OverlayKind>,
    /// Corner holding the legend.
    pub legend_position: Corner,
    /// Heat layer settings.
    pub heat: HeatStyle,
    /// Circle stroke and fill settings.
    pub circle: CircleStyle,
    /// Base layers; the first one is shown initially.
    pub base_layers: Vec<TileLayer>,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            title: "Earthquakes and Tectonic Plates".to_string(),
            center: [37.09, -95.71],
            zoom: 5,
            default_overlays: vec![OverlayKind::Earthquakes],
            legend_position: Corner::BottomRight,
            heat: HeatStyle::default(),
            circle: CircleStyle::default(),
            base_layers: vec![TileLayer::street(), TileLayer::topographic()],
        }
    }
}

impl MapSettings {
    /// Rejects settings that cannot produce a usable view.
    pub fn validate(&self) -> Result<()> {
        if self.base_layers.is_empty() {
            return Err(Error::invalid_settings("at least one base layer is required"));
        }
        let [lat, lon] = self.center;
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(Error::invalid_settings(format!(
                "center [{lat}, {lon}] is not a valid latitude/longitude"
            )));
        }
        if self.zoom > MAX_ZOOM {
            return Err(Error::invalid_settings(format!(
                "zoom {} exceeds the maximum of {MAX_ZOOM}",
                self.zoom
            )));
        }
        Ok(())
    }
}

/// One colour swatch in the legend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    /// Swatch colour.
    pub color: &'static str,
    /// Depth range label.
    pub label: &'static str,
}

/// The static depth legend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    /// Heading text.
    pub title: &'static str,
    /// Corner the legend sits in.
    pub position: Corner,
    /// Swatches, shallowest first.
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    /// The six depth buckets at the given corner.
    pub fn depth(position: Corner) -> Self {
        Self {
            title: "Depth (km)",
            position,
            entries: DepthBucket::ALL
                .iter()
                .map(|b| LegendEntry {
                    color: b.color(),
                    label: b.label(),
                })
                .collect(),
        }
    }
}

/// A switcher entry for one overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayToggle {
    /// Which overlay.
    pub kind: OverlayKind,
    /// Switcher label.
    pub label: &'static str,
    /// Shown on load.
    pub visible: bool,
}

/// The initial view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct View {
    /// `[latitude, longitude]`.
    pub center: [f64; 2],
    /// Zoom level.
    pub zoom: u8,
}

/// Everything the page script needs to build the map.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapDocument<'a> {
    /// Page title.
    pub title: &'a str,
    /// Initial view.
    pub view: View,
    /// Mutually exclusive base layers; the first starts visible.
    pub base_layers: &'a [TileLayer],
    /// Independently toggleable overlays, in switcher order.
    pub overlay_toggles: Vec<OverlayToggle>,
    /// Overlay data.
    pub overlays: &'a Overlays,
    /// Heat settings.
    pub heat: HeatStyle,
    /// Circle settings.
    pub circle: &'a CircleStyle,
    /// Depth legend.
    pub legend: Legend,
}

impl<'a> MapDocument<'a> {
    /// Assembles the document from transformed overlays and fixed settings.
    pub fn assemble(overlays: &'a Overlays, settings: &'a MapSettings) -> Result<Self> {
        settings.validate()?;

        let overlay_toggles = OverlayKind::ALL
            .iter()
            .map(|&kind| OverlayToggle {
                kind,
                label: kind.label(),
                visible: settings.default_overlays.contains(&kind),
            })
            .collect();

        tracing::debug!(
            base_layers = settings.base_layers.len(),
            markers = overlays.markers.len(),
            zoom = settings.zoom,
            "Assembled map document"
        );

        Ok(Self {
            title: &settings.title,
            view: View {
                center: settings.center,
                zoom: settings.zoom,
            },
            base_layers: &settings.base_layers,
            overlay_toggles,
            overlays,
            heat: settings.heat,
            circle: &settings.circle,
            legend: Legend::depth(settings.legend_position),
        })
    }

    /// Overlays that start visible.
    pub fn visible_overlays(&self) -> Vec<OverlayKind> {
        self.overlay_toggles
            .iter()
            .filter(|t| t.visible)
            .map(|t| t.kind)
            .collect()
    }
}
