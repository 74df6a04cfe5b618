//! Configuration Module
//! Command line arguments and the optional JSON config file.

use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_DATA_PATH: &str = "data/serve_statistics.csv";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(name = "serve_stats")]
#[command(about = "Tennis Serve Analytics: serve statistics dashboard")]
pub struct Cli {
    /// Path to the serve statistics CSV
    #[arg(long)]
    pub data: Option<PathBuf>,
    /// Optional JSON config file
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// Dashboard settings. Every field has a default so partial files are fine.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    /// Identifier column, expected first in the file.
    pub name_column: String,
    pub default_category: String,
    pub default_sort_ascending: bool,
    pub default_display_count: u32,
    pub default_player: String,
    pub window_size: [f32; 2],
    /// Pixel size of exported PNG charts.
    pub export_size: [u32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            name_column: "name".to_string(),
            default_category: "ace".to_string(),
            default_sort_ascending: true,
            default_display_count: 20,
            default_player: "Adrian Mannarino".to_string(),
            window_size: [1400.0, 900.0],
            export_size: [1600, 900],
        }
    }
}

impl DashboardConfig {
    /// Read a config file. Missing keys fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Resolve defaults < config file < CLI flags.
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => {
                log::info!("Loading config from {}", path.display());
                Self::from_file(path)?
            }
            None => Self::default(),
        };

        if let Some(data) = &cli.data {
            config.data_path = data.clone();
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            DashboardConfig::from_json(r#"{ "default_player": "Rafael Nadal" }"#).unwrap();
        assert_eq!(config.default_player, "Rafael Nadal");
        assert_eq!(config.default_category, "ace");
        assert_eq!(config.default_display_count, 20);
        assert!(config.default_sort_ascending);
        assert_eq!(config.data_path, PathBuf::from(DEFAULT_DATA_PATH));
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(DashboardConfig::from_json("{ not json").is_err());
    }

    #[test]
    fn cli_data_path_overrides_default() {
        let cli = Cli::parse_from(["serve_stats", "--data", "other.csv"]);
        let config = DashboardConfig::resolve(&cli).unwrap();
        assert_eq!(config.data_path, PathBuf::from("other.csv"));
        assert!(!cli.debug);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let cli = Cli::parse_from(["serve_stats", "--config", "does/not/exist.json"]);
        assert!(matches!(
            DashboardConfig::resolve(&cli),
            Err(ConfigError::Read { .. })
        ));
    }
}
