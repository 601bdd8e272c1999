//! Configuration loading and validation.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::insights::{default_marquee, Marquee};
use crate::leaders::RankingRules;
use crate::models::{Sport, StatTaxonomy};
use crate::storage::StorageConfig;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Output file names, relative to `output_dir`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_json_file")]
    pub json_file: String,

    #[serde(default = "default_module_file")]
    pub module_file: String,
}

fn default_json_file() -> String {
    "stats-data.json".to_string()
}

fn default_module_file() -> String {
    "statsData.js".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json_file: default_json_file(),
            module_file: default_module_file(),
        }
    }
}

/// Leaderboard configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardConfig {
    /// Entries kept per stat
    #[serde(default = "default_leaderboard_size")]
    pub size: usize,
}

fn default_leaderboard_size() -> usize {
    10
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            size: default_leaderboard_size(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub leaderboard: LeaderboardConfig,

    /// Replaces the built-in stat catalog when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taxonomy: Option<StatTaxonomy>,

    /// Replaces the built-in marquee player list when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marquee: Option<Marquee>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            log_level: default_log_level(),
            output: OutputConfig::default(),
            leaderboard: LeaderboardConfig::default(),
            taxonomy: None,
            marquee: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, or fall back to defaults when the file is absent.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            debug!("No config at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.leaderboard.size == 0 {
            return Err(ConfigError::ValidationError(
                "Leaderboard size must be greater than 0".to_string(),
            ));
        }

        if self.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "Output directory must not be empty".to_string(),
            ));
        }

        let json = self.output.json_file.trim();
        let module = self.output.module_file.trim();
        if json.is_empty() || module.is_empty() {
            return Err(ConfigError::ValidationError(
                "Output file names must not be empty".to_string(),
            ));
        }
        if json == module {
            return Err(ConfigError::ValidationError(format!(
                "JSON and module outputs both point at '{}'",
                json
            )));
        }

        if let Some(taxonomy) = &self.taxonomy {
            if taxonomy.is_empty() {
                return Err(ConfigError::ValidationError(
                    "Taxonomy override must name at least one sport".to_string(),
                ));
            }
        }

        if let Some(marquee) = &self.marquee {
            if let Some(unknown) = marquee.keys().find(|s| Sport::from_name(s).is_none()) {
                return Err(ConfigError::ValidationError(format!(
                    "Unknown marquee sport '{}'",
                    unknown
                )));
            }
        }

        Ok(())
    }

    /// Active stat catalog.
    pub fn taxonomy(&self) -> StatTaxonomy {
        self.taxonomy.clone().unwrap_or_default()
    }

    /// Active marquee player list.
    pub fn marquee(&self) -> Marquee {
        self.marquee.clone().unwrap_or_else(default_marquee)
    }

    pub fn ranking_rules(&self) -> RankingRules {
        RankingRules::with_size(self.leaderboard.size)
    }

    pub fn storage(&self) -> StorageConfig {
        StorageConfig::new(self.output_dir.clone())
            .with_files(&self.output.json_file, &self.output.module_file)
    }
}
