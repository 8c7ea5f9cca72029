//! Handler functions for `config` subcommands.

use std::path::PathBuf;

use crate::cli::ConfigAction;
use crate::config::{PROJECT_NAME, QuakemapConfig};
use crate::{Error, Result};

/// Dispatches a `config` subcommand.
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path),
        ConfigAction::Init { file, force } => {
            let target = file.as_deref().or(config_path);
            cmd_config_init(target, force).map(|_| ())
        }
        ConfigAction::Show => cmd_config_show(config_path),
    }
}

/// Show the resolved config file path.
pub fn cmd_config_path(config_path: Option<&str>) -> Result<()> {
    let path = QuakemapConfig::resolve_config_path(config_path).ok_or_else(|| {
        Error::config("Could not determine config directory for this platform")
    })?;
    println!("{}", path.display());
    if !path.exists() {
        eprintln!("(file does not exist; run `{PROJECT_NAME} config init` to create it)");
    }
    Ok(())
}

/// Create a default configuration file and return its path.
pub fn cmd_config_init(file: Option<&str>, force: bool) -> Result<PathBuf> {
    let path = QuakemapConfig::resolve_config_path(file)
        .ok_or_else(|| Error::config("Could not determine config directory"))?;

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }

    let toml_str = QuakemapConfig::default().to_toml_string()?;
    std::fs::write(&path, &toml_str).map_err(|e| Error::io_with_path(e, &path))?;

    println!("Config file created at {}", path.display());
    Ok(path)
}

/// Print the effective configuration.
pub fn cmd_config_show(config_path: Option<&str>) -> Result<()> {
    let config = QuakemapConfig::load(config_path)?;
    print!("{}", config.to_toml_string()?);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cmd_config_path_explicit() {
        assert!(cmd_config_path(Some("/explicit/config.toml")).is_ok());
    }

    #[test]
    fn test_cmd_config_init_creates_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("quakemap").join("config.toml");

        let written = cmd_config_init(Some(path.to_str().unwrap()), false).unwrap();
        assert_eq!(written, path);

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("[feeds]"));
        assert!(content.contains("all_week.geojson"));
    }

    #[test]
    fn test_cmd_config_init_no_overwrite() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "existing").unwrap();

        let result = cmd_config_init(Some(path.to_str().unwrap()), false);
        assert!(result.unwrap_err().to_string().contains("already exists"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "existing");
    }

    #[test]
    fn test_cmd_config_init_force_overwrites() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "old content").unwrap();

        cmd_config_init(Some(path.to_str().unwrap()), true).unwrap();
        let reloaded = QuakemapConfig::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(reloaded, QuakemapConfig::default());
    }

    #[test]
    fn test_cmd_config_show_missing_explicit() {
        assert!(cmd_config_show(Some("/nonexistent/quakemap.toml")).is_err());
    }

    #[test]
    fn test_handle_config_show() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[map]\nzoom = 4\n").unwrap();
        assert!(handle_config_command(Some(path.to_str().unwrap()), ConfigAction::Show).is_ok());
    }
}
