//! GeoJSON feed model.
//!
//! Only the fields the map needs are decoded; everything else in the USGS
//! payload is ignored by serde. Per-feature fields decode leniently: a
//! `null` where a value is expected reads as the default, so one odd record
//! never rejects the whole feed.

use serde::{Deserialize, Deserializer, Serialize};

use crate::{Error, Result};

/// A parsed earthquake feed (a GeoJSON `FeatureCollection`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EarthquakeFeed {
    /// Feed-level metadata, when the publisher sends it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<FeedMetadata>,

    /// Event records in publisher order.
    pub features: Vec<EarthquakeFeature>,
}

impl EarthquakeFeed {
    /// Creates a feed from a list of features.
    pub fn new(features: Vec<EarthquakeFeature>) -> Self {
        Self {
            metadata: None,
            features,
        }
    }

    /// Decodes a feed from raw JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// The `metadata` block of a USGS summary feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedMetadata {
    /// Human readable feed title, e.g. "USGS All Earthquakes, Past Week".
    #[serde(default)]
    pub title: Option<String>,

    /// Number of events the publisher reports.
    #[serde(default)]
    pub count: Option<u64>,
}

/// A single seismic event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarthquakeFeature {
    /// Point geometry; absent or `null` for events without a location.
    #[serde(default)]
    pub geometry: Option<Geometry>,

    /// Event attributes; `null` reads as empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: Properties,
}

impl EarthquakeFeature {
    /// Creates a located feature.
    pub fn new(
        longitude: f64,
        latitude: f64,
        depth_km: f64,
        mag: f64,
        title: impl Into<String>,
    ) -> Self {
        Self {
            geometry: Some(Geometry::point(longitude, latitude, depth_km)),
            properties: Properties {
                mag: Some(mag),
                title: title.into(),
            },
        }
    }

    /// Creates a feature that carries no geometry.
    pub fn unlocated(mag: f64, title: impl Into<String>) -> Self {
        Self {
            geometry: None,
            properties: Properties {
                mag: Some(mag),
                title: title.into(),
            },
        }
    }

    /// Magnitude, with a missing value read as zero.
    pub fn magnitude(&self) -> f64 {
        self.properties.mag.unwrap_or(0.0)
    }

    /// Event title.
    pub fn title(&self) -> &str {
        &self.properties.title
    }
}

/// Event attributes used by the map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Properties {
    /// Magnitude; USGS publishes `null` for some automatic solutions.
    #[serde(default)]
    pub mag: Option<f64>,

    /// Display title, e.g. "M 4.5 - 10 km SW of Somewhere".
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
}

/// GeoJSON point geometry: `[longitude, latitude, depth_km]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// Raw coordinate array; individual entries may be `null`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub coordinates: Vec<Option<f64>>,
}

impl Geometry {
    /// Builds a point geometry.
    pub fn point(longitude: f64, latitude: f64, depth_km: f64) -> Self {
        Self {
            coordinates: vec![Some(longitude), Some(latitude), Some(depth_km)],
        }
    }

    /// `[latitude, longitude]`, or `None` unless both are present.
    pub fn lat_lon(&self) -> Option<[f64; 2]> {
        match self.coordinates.as_slice() {
            [Some(lon), Some(lat), ..] => Some([*lat, *lon]),
            _ => None,
        }
    }

    /// Depth in kilometres; a missing or `null` third coordinate reads as zero.
    pub fn depth_km(&self) -> f64 {
        self.coordinates.get(2).copied().flatten().unwrap_or(0.0)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Plate-boundary GeoJSON, carried through to the renderer untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoundaryCollection(serde_json::Value);

impl BoundaryCollection {
    /// Wraps an already-parsed GeoJSON value.
    ///
    /// Only the top level is checked: it must be a JSON object.
    pub fn new(value: serde_json::Value) -> Result<Self> {
        if value.is_object() {
            Ok(Self(value))
        } else {
            Err(Error::invalid_feed(
                "plate boundary document must be a JSON object",
            ))
        }
    }

    /// An empty `FeatureCollection`.
    pub fn empty() -> Self {
        Self(serde_json::json!({ "type": "FeatureCollection", "features": [] }))
    }

    /// Decodes a boundary document from raw JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Self::new(serde_json::from_slice(bytes)?)
    }

    /// The wrapped document.
    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    /// Number of entries in `features`, if the document has that array.
    pub fn feature_count(&self) -> Option<usize> {
        self.0
            .get("features")
            .and_then(serde_json::Value::as_array)
            .map(Vec::len)
    }
}
