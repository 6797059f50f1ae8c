//! Configuration file handling
//!
//! The config file is optional JSON; every field has a default. Command
//! line flags override file values.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::observability::LogFormat;
use crate::planner::SortKey;

use super::errors::{CliError, CliResult};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Product JSON file. The embedded catalog is used when absent.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Sort used when a query does not name one (default "name")
    #[serde(default)]
    pub default_sort: SortKey,

    /// Log level (default "warn")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log output format (default "text")
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            default_sort: SortKey::default(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values serde cannot check
    pub fn validate(&self) -> CliResult<()> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(CliError::config_error(format!(
                "Invalid log_level: '{}'. Expected one of: {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }

        if let Some(path) = &self.catalog_path {
            if path.as_os_str().is_empty() {
                return Err(CliError::config_error("catalog_path must not be empty"));
            }
        }

        Ok(())
    }
}
