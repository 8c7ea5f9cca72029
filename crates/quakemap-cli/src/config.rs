//! Configuration file model and resolution.
//!
//! Resolution order for the file: explicit `--config` (or `QUAKEMAP_CONFIG`),
//! then `<config_dir>/quakemap/config.toml`. A missing default file means
//! built-in defaults; a missing explicit file is an error.

use std::path::{Path, PathBuf};
use std::time::Duration;

use quakemap_client::{DEFAULT_PLATES_URL, FeedPeriod};
use quakemap_render::MapSettings;
use serde::{Deserialize, Serialize};

use crate::cli::RenderArgs;
use crate::{Error, Result};

/// Name used for the config directory.
pub const PROJECT_NAME: &str = "quakemap";

/// Complete tool configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuakemapConfig {
    /// Feed locations.
    pub feeds: FeedsConfig,
    /// Presentation settings.
    pub map: MapSettings,
    /// Output file.
    pub output: OutputConfig,
}

/// `[feeds]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedsConfig {
    /// Earthquake feed URL or path.
    pub earthquakes: String,
    /// Plate-boundary URL or path.
    pub plates: String,
    /// Request timeout in seconds; 0, the default, means no deadline.
    pub timeout_secs: u64,
}

impl Default for FeedsConfig {
    fn default() -> Self {
        Self {
            earthquakes: FeedPeriod::default().url(),
            plates: DEFAULT_PLATES_URL.to_string(),
            timeout_secs: 0,
        }
    }
}

impl FeedsConfig {
    /// Request timeout, `None` when disabled.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

/// `[output]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where the HTML page is written.
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("quakemap.html"),
        }
    }
}

impl QuakemapConfig {
    /// Default config file location for this platform.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(PROJECT_NAME).join("config.toml"))
    }

    /// Explicit path if given, else the platform default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(PathBuf::from(path)),
            None => Self::default_config_path(),
        }
    }

    /// Loads the configuration.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        match Self::resolve_config_path(explicit) {
            Some(path) if path.exists() => Self::from_file(&path),
            Some(path) if explicit.is_some() => Err(Error::config(format!(
                "Config file {} does not exist",
                path.display()
            ))),
            _ => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parses a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let config = toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Serializes to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Applies command-line overrides.
    pub fn apply_overrides(&mut self, args: &RenderArgs) {
        if let Some(period) = args.period {
            self.feeds.earthquakes = period.url();
        }
        if let Some(earthquakes) = &args.earthquakes {
            self.feeds.earthquakes.clone_from(earthquakes);
        }
        if let Some(plates) = &args.plates {
            self.feeds.plates.clone_from(plates);
        }
        if let Some(timeout) = args.timeout {
            self.feeds.timeout_secs = timeout;
        }
        if let Some(output) = &args.output {
            self.output.path.clone_from(output);
        }
        if let Some(zoom) = args.zoom {
            self.map.zoom = zoom;
        }
    }
}
