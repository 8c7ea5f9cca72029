//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use quakemap_client::FeedPeriod;

/// Quakemap - render recent earthquakes and plate boundaries as a web map
#[derive(Parser, Debug)]
#[command(name = "quakemap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "QUAKEMAP_CONFIG")]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run; defaults to `render`
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch the feeds and write the map page
    Render(RenderArgs),
    /// Configuration file operations
    Config {
        /// Config action
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Flags that override the `[feeds]`, `[map]` and `[output]` config sections.
#[derive(Args, Debug, Default, Clone)]
pub struct RenderArgs {
    /// Earthquake feed URL or local GeoJSON path
    #[arg(long, conflicts_with = "period")]
    pub earthquakes: Option<String>,

    /// USGS summary feed window (hour, day, week, month)
    #[arg(long)]
    pub period: Option<FeedPeriod>,

    /// Plate-boundary GeoJSON URL or local path
    #[arg(long)]
    pub plates: Option<String>,

    /// Output HTML file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Initial zoom level
    #[arg(long)]
    pub zoom: Option<u8>,

    /// Request timeout in seconds (default 0: no deadline)
    #[arg(long)]
    pub timeout: Option<u64>,
}

/// `config` subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the resolved config file path
    Path,
    /// Write a default config file
    Init {
        /// Target file (defaults to the resolved config path)
        #[arg(long)]
        file: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective configuration as TOML
    Show,
}
