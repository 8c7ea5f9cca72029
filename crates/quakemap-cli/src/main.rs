//! Quakemap CLI
//!
//! Renders recent earthquakes and tectonic plate boundaries as an
//! interactive web map.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use quakemap_cli::cli::{Cli, Command, RenderArgs};
use quakemap_cli::config_handlers::handle_config_command;
use quakemap_cli::{QuakemapConfig, run_render};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "info,quakemap=debug,quakemap_core=debug,quakemap_client=debug,quakemap_render=debug,quakemap_cli=debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    let config_path = cli.config.as_deref();

    match cli.command {
        Some(Command::Config { action }) => handle_config_command(config_path, action)?,
        Some(Command::Render(args)) => render(config_path, &args).await?,
        None => render(config_path, &RenderArgs::default()).await?,
    }

    Ok(())
}

async fn render(config_path: Option<&str>, args: &RenderArgs) -> Result<()> {
    let mut config = QuakemapConfig::load(config_path)?;
    config.apply_overrides(args);

    match run_render(&config).await {
        Ok(summary) => {
            tracing::info!(
                path = %summary.output.display(),
                events = summary.events,
                skipped = summary.skipped,
                "Render complete"
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("Render failed, no map written: {}", e);
            Err(e.into())
        }
    }
}
