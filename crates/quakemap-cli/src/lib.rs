//! # quakemap-cli
//!
//! Command-line front end for Quakemap:
//! - loads configuration from TOML, overridden by flags
//! - fetches the earthquake and plate-boundary feeds
//! - writes the interactive map page

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod config_handlers;
pub mod error;
pub mod pipeline;

pub use config::QuakemapConfig;
pub use error::{Error, Result};
pub use pipeline::{RenderSummary, run_render};
