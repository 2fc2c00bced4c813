//! Top-level application configuration.
//!
//! Configuration is read from `$INCIDENT_BOARD_CONFIG` when set, otherwise
//! from `config.yaml` in the platform config directory (for example
//! `~/.config/incident-board/config.yaml`). It includes:
//! - Initial theme, severity filter and sort order for the dashboard
//! - An optional JSON seed file replacing the built-in incidents
//! - Logging level and destination
//!
//! A missing file yields the defaults.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::error::{IncidentError, Result};
use crate::query::{SeverityFilter, SortOrder};
use crate::seed;
use crate::store::IncidentStore;
use crate::tui::theme::ThemeMode;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "INCIDENT_BOARD_CONFIG";

/// Environment variable holding filter directives, e.g. `incident_board=debug`
pub const LOG_ENV: &str = "INCIDENT_BOARD_LOG";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Presentation mode the dashboard starts in
    #[serde(default)]
    pub theme: ThemeMode,

    /// Severity filter applied at startup ("all", "low", "medium", "high")
    #[serde(default = "default_filter_name")]
    pub default_filter: String,

    /// Sort order applied at startup ("asc" or "desc")
    #[serde(default = "default_order_name")]
    pub default_order: String,

    /// JSON file replacing the built-in seed incidents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_file: Option<PathBuf>,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            default_filter: default_filter_name(),
            default_order: default_order_name(),
            seed_file: None,
            log: LogConfig::default(),
        }
    }
}

fn default_filter_name() -> String {
    "all".to_string()
}

fn default_order_name() -> String {
    "desc".to_string()
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Maximum level: error, warn, info, debug or trace (default: warn)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// File receiving log output; the dashboard discards logs when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LogConfig {
    /// Level named in the config file
    pub fn level(&self) -> Result<Level> {
        self.level
            .trim()
            .parse::<Level>()
            .map_err(|_| IncidentError::Config(format!("invalid log level '{}'", self.level)))
    }

    /// Directives from `$INCIDENT_BOARD_LOG` over the configured level
    pub fn env_filter(&self) -> Result<EnvFilter> {
        EnvFilter::builder()
            .with_default_directive(LevelFilter::from_level(self.level()?).into())
            .with_env_var(LOG_ENV)
            .from_env()
            .map_err(|e| IncidentError::Config(format!("invalid {LOG_ENV}: {e}")))
    }
}

impl Config {
    /// Location of the config file, if one can be determined
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(path) = env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        ProjectDirs::from("", "", "incident-board").map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Load from the default location, falling back to defaults
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from an explicit path; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse YAML text; empty input yields the defaults
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml_ng::from_str(content)?)
    }

    /// Check every string-typed setting parses
    pub fn validate(&self) -> Result<()> {
        self.filter()?;
        self.order()?;
        self.log.env_filter()?;
        Ok(())
    }

    pub fn filter(&self) -> Result<SeverityFilter> {
        if self.default_filter.trim().is_empty() {
            return Ok(SeverityFilter::All);
        }
        self.default_filter
            .parse()
            .map_err(|e: IncidentError| IncidentError::Config(e.to_string()))
    }

    pub fn order(&self) -> Result<SortOrder> {
        if self.default_order.trim().is_empty() {
            return Ok(SortOrder::default());
        }
        self.default_order
            .parse()
            .map_err(|e: IncidentError| IncidentError::Config(e.to_string()))
    }

    /// Build the session's store from the seed file or the built-in fixture
    pub fn build_store(&self) -> Result<IncidentStore> {
        match &self.seed_file {
            Some(path) => IncidentStore::from_seed(seed::load_seed_file(path)?),
            None => Ok(IncidentStore::seeded()),
        }
    }

    /// Render as YAML for display
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }
}
