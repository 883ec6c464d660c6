//! Application configuration.

use crate::error::{AppError, AppResult};
use arena_ranking::RankingConfig;
use arena_server::ServerConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "ARENA_CONFIG";

/// Config file used when neither the flag nor the env var is set.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Roster JSON file.
    #[serde(default = "default_roster_path")]
    pub roster_path: String,
    #[serde(default)]
    pub ranking: RankingConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

fn default_roster_path() -> String {
    "data/bots.json".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            roster_path: default_roster_path(),
            ranking: RankingConfig::default(),
            server: ServerConfig::default(),
            telemetry: TelemetryConfig::default(),
        }
    }
}

impl AppConfig {
    /// Resolve the config file path.
    ///
    /// `explicit` > `ARENA_CONFIG` > `config/default.toml`. An explicitly
    /// named file is returned even if it does not exist; None means the
    /// default file is missing and built-in defaults apply.
    pub fn resolve_path(explicit: Option<&str>) -> Option<String> {
        explicit
            .map(str::to_string)
            .or_else(|| std::env::var(CONFIG_ENV).ok())
            .or_else(|| {
                Path::new(DEFAULT_CONFIG_PATH)
                    .exists()
                    .then(|| DEFAULT_CONFIG_PATH.to_string())
            })
    }

    /// Load and validate configuration from the resolved path.
    pub fn load(explicit: Option<&str>) -> AppResult<Self> {
        let config = match Self::resolve_path(explicit) {
            Some(path) => Self::from_file(&path)?,
            None => {
                tracing::warn!(
                    path = DEFAULT_CONFIG_PATH,
                    "Config file not found, using defaults"
                );
                Self::default()
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Load from a specific file.
    pub fn from_file(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read config {path}: {e}")))?;

        Self::from_toml(&content)
    }

    /// Parse from TOML text.
    pub fn from_toml(content: &str) -> AppResult<Self> {
        toml::from_str(content)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {e}")))
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.roster_path.trim().is_empty() {
            return Err(AppError::Config("roster_path must not be empty".to_string()));
        }
        self.ranking.validate()?;
        Ok(())
    }
}
