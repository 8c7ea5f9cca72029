//! Feed locations and the USGS summary feed presets.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::Error;

/// Base URL of the USGS real-time GeoJSON summary feeds.
pub const USGS_SUMMARY_BASE: &str = "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary";

/// PB2002 plate boundaries as GeoJSON.
pub const DEFAULT_PLATES_URL: &str =
    "https://raw.githubusercontent.com/fraxen/tectonicplates/master/GeoJSON/PB2002_boundaries.json";

/// Time window of a USGS "all earthquakes" summary feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedPeriod {
    /// Past hour.
    Hour,
    /// Past day.
    Day,
    /// Past seven days.
    #[default]
    Week,
    /// Past thirty days.
    Month,
}

impl FeedPeriod {
    /// Feed URL for this window.
    pub fn url(self) -> String {
        format!("{USGS_SUMMARY_BASE}/all_{}.geojson", self.as_str())
    }

    fn as_str(self) -> &'static str {
        match self {
            FeedPeriod::Hour => "hour",
            FeedPeriod::Day => "day",
            FeedPeriod::Week => "week",
            FeedPeriod::Month => "month",
        }
    }
}

impl fmt::Display for FeedPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeedPeriod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hour" => Ok(FeedPeriod::Hour),
            "day" => Ok(FeedPeriod::Day),
            "week" => Ok(FeedPeriod::Week),
            "month" => Ok(FeedPeriod::Month),
            other => Err(Error::config(format!(
                "Unknown feed period '{other}'. Use hour, day, week or month"
            ))),
        }
    }
}

/// Where a feed document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedLocation {
    /// Remote document fetched over HTTP(S).
    Remote(Url),
    /// Document on the local filesystem.
    Local(PathBuf),
}

impl FeedLocation {
    /// Interprets a configured location string.
    ///
    /// `http`/`https` URLs are remote, `file` URLs and everything else are
    /// local paths.
    pub fn parse(location: &str) -> Self {
        match Url::parse(location) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => FeedLocation::Remote(url),
            Ok(url) if url.scheme() == "file" => match url.to_file_path() {
                Ok(path) => FeedLocation::Local(path),
                Err(()) => FeedLocation::Local(PathBuf::from(location)),
            },
            _ => FeedLocation::Local(PathBuf::from(location)),
        }
    }

    /// True for HTTP(S) locations.
    pub fn is_remote(&self) -> bool {
        matches!(self, FeedLocation::Remote(_))
    }
}

impl fmt::Display for FeedLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedLocation::Remote(url) => write!(f, "{url}"),
            FeedLocation::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

impl FromStr for FeedLocation {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(FeedLocation::parse(s))
    }
}
