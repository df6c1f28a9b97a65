//! Configuration infrastructure
//!
//! Configuration is layered: built-in defaults, then an optional TOML/JSON/YAML
//! file, then `CROSSWORD_` environment variables (`__` separates sections,
//! e.g. `CROSSWORD_STORE__MAX_PUZZLES=64`).

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::infrastructure::parsing::ParsingConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config from file: {source}")]
    FileLoad {
        #[from]
        source: config::ConfigError,
    },

    #[error("Configuration validation failed: {message}")]
    Validation { message: String },
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Heuristic constants of the ingestion pipeline
    pub parsing: ParsingConfig,

    /// Bounds of the in-memory puzzle store
    pub store: StoreConfig,

    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Oldest puzzles are evicted past this count
    pub max_puzzles: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_puzzles: defaults::MAX_PUZZLES,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "error", "warn", "info", "debug", "trace"
    pub level: String,

    /// Enable JSON formatted logs
    pub json_format: bool,

    /// Enable console output (stderr, stdout carries command output)
    pub console_output: bool,

    /// Enable file output
    pub file_output: bool,

    /// Log file name inside the log directory
    pub file_name: String,

    /// Log directory; defaults to `logs/` next to the executable
    pub log_dir: Option<PathBuf>,

    /// Module-specific log level filters (e.g., "scraper": "warn")
    pub module_filters: HashMap<String, String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::LOG_LEVEL.to_string(),
            json_format: false,
            console_output: true,
            file_output: false,
            file_name: defaults::LOG_FILE_NAME.to_string(),
            log_dir: None,
            module_filters: HashMap::new(),
        }
    }
}

impl AppConfig {
    /// Load from a file plus environment overrides, then validate
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(environment())
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load the given file, or the default location when it exists, or defaults.
    ///
    /// Environment overrides apply in every case.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        if let Some(default_path) = Self::default_path().filter(|p| p.exists()) {
            return Self::from_file(&default_path);
        }

        debug!("No configuration file, using defaults");
        let settings = config::Config::builder().add_source(environment()).build()?;
        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// `<config dir>/crossword-extractor/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(defaults::APP_DIR_NAME).join(defaults::CONFIG_FILE_NAME))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.parsing.validate().map_err(|e| ConfigError::Validation {
            message: e.to_string(),
        })?;

        if self.store.max_puzzles == 0 {
            return Err(ConfigError::Validation {
                message: "store.max_puzzles must be greater than 0".to_string(),
            });
        }

        if !self.logging.console_output && !self.logging.file_output {
            return Err(ConfigError::Validation {
                message: "logging needs console_output or file_output".to_string(),
            });
        }

        Ok(())
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(defaults::ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}

/// Default configuration values
pub mod defaults {
    /// Puzzles kept in memory before the oldest is evicted
    pub const MAX_PUZZLES: usize = 256;

    pub const LOG_LEVEL: &str = "info";
    pub const LOG_FILE_NAME: &str = "crossword-extractor.log";

    pub const ENV_PREFIX: &str = "CROSSWORD";
    pub const APP_DIR_NAME: &str = "crossword-extractor";
    pub const CONFIG_FILE_NAME: &str = "config.toml";
}
