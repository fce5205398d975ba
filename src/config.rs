//! Application configuration.
//!
//! Loaded from YAML:
//!
//! ```yaml
//! catalog:
//!   path: data/decks.json
//! statistics:
//!   workers: 4
//! logging:
//!   level: info
//!   json: false
//! ```
//!
//! Only `catalog.path` is required.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::Level;

/// Catalog path used when nothing else is configured.
pub const DEFAULT_CATALOG_PATH: &str = "data/decks.json";
const DEFAULT_WORKERS: usize = 4;
const DEFAULT_LEVEL: &str = "info";

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub statistics: StatisticsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Configuration with defaults for everything but the catalog path.
    #[must_use]
    pub fn with_catalog(path: impl Into<PathBuf>) -> Self {
        Self {
            catalog: CatalogConfig { path: path.into() },
            statistics: StatisticsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    /// Load and validate configuration from a YAML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_buf = path.to_path_buf();
        let file = File::open(path).map_err(|source| ConfigError::Read {
            source,
            path: path_buf.clone(),
        })?;
        let mut cfg: AppConfig = serde_yaml::from_reader(BufReader::new(file)).map_err(|source| {
            ConfigError::Parse {
                source,
                path: path_buf.clone(),
            }
        })?;
        cfg.validate().map_err(|source| ConfigError::Invalid {
            path: path_buf,
            source,
        })?;
        Ok(cfg)
    }

    /// Validate the configuration without performing I/O.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        if self.catalog.path.as_os_str().is_empty() {
            return Err(ValidationError::field("catalog.path", "must not be empty"));
        }
        self.statistics.validate()?;
        self.logging.normalize();
        if self.logging.tracing_level().is_none() {
            return Err(ValidationError::field(
                "logging.level",
                format!("unknown level '{}'", self.logging.level),
            ));
        }
        Ok(())
    }
}

/// Where the deck catalog lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    pub path: PathBuf,
}

/// Cross-deck aggregation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatisticsConfig {
    /// Worker threads for per-deck aggregation.
    #[serde(default = "default_workers")]
    pub workers: usize,
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
        }
    }
}

impl StatisticsConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.workers == 0 {
            return Err(ValidationError::field(
                "statistics.workers",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable text.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

impl LoggingConfig {
    fn normalize(&mut self) {
        let trimmed = self.level.trim();
        self.level = if trimmed.is_empty() {
            default_level()
        } else {
            trimmed.to_ascii_lowercase()
        };
    }

    /// Parsed level, `None` if the name is not recognised.
    #[must_use]
    pub fn tracing_level(&self) -> Option<Level> {
        match self.level.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(Level::TRACE),
            "debug" => Some(Level::DEBUG),
            "info" => Some(Level::INFO),
            "warn" | "warning" => Some(Level::WARN),
            "error" => Some(Level::ERROR),
            _ => None,
        }
    }
}

fn default_workers() -> usize {
    DEFAULT_WORKERS
}

fn default_level() -> String {
    DEFAULT_LEVEL.to_string()
}

/// Errors surfaced when loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        #[source]
        source: serde_yaml::Error,
        path: PathBuf,
    },
    #[error("invalid configuration in {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: ValidationError,
    },
}

/// Validation failures with the offending field.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },
}

impl ValidationError {
    fn field(field: &str, message: impl Into<String>) -> Self {
        ValidationError::InvalidField {
            field: field.to_string(),
            message: message.into(),
        }
    }
}
