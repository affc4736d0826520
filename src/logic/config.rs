//! Predictor Configuration
//!
//! Defaults come from `constants`, can be overridden per field through the
//! environment, or loaded from a JSON file.

use std::fs;
use std::path::{Path, PathBuf};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::constants;

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    SerializationError(serde_json::Error),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO Error: {}", e),
            ConfigError::SerializationError(e) => write!(f, "Serialization Error: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::SerializationError(err)
    }
}

// ============================================================================
// PREDICTOR CONFIG
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictorConfig {
    /// Neighbors consulted per classification
    pub neighbors: usize,
    /// Tab-separated (temperature, disk_errors) rows
    pub data_file: PathBuf,
    /// One 0/1 label per row of `data_file`
    pub labels_file: PathBuf,
    /// strftime format for printed alert times
    pub time_format: String,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            neighbors: constants::DEFAULT_NEIGHBORS,
            data_file: PathBuf::from(constants::DEFAULT_DATA_FILE),
            labels_file: PathBuf::from(constants::DEFAULT_LABELS_FILE),
            time_format: constants::DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

impl PredictorConfig {
    /// Defaults with environment overrides applied
    pub fn from_env() -> Self {
        Self {
            neighbors: constants::get_neighbors(),
            data_file: PathBuf::from(constants::get_data_file()),
            labels_file: PathBuf::from(constants::get_labels_file()),
            time_format: constants::get_time_format(),
        }
    }

    /// Load from a JSON file; missing fields keep their defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read(path)?;
        let config: PredictorConfig = serde_json::from_slice(&data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.neighbors == 0 {
            return Err(ConfigError::Invalid("neighbors must be at least 1".to_string()));
        }
        if StrftimeItems::new(&self.time_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::Invalid(format!(
                "unsupported time format '{}'",
                self.time_format
            )));
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
