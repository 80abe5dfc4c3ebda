//! Serializable analysis configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default trend smoothing span in days.
pub const DEFAULT_SMA_WINDOW: usize = 5;

/// Errors from configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("sma_window must be a positive integer (got {0})")]
    InvalidSmaWindow(usize),
}

/// Configuration for a single analysis run.
///
/// The one recognized analytic option is `sma_window`. Its upper bound —
/// the window must not exceed the series length — depends on the dataset,
/// so it is enforced at analysis time as `InvalidWindow` rather than here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct AnalysisConfig {
    pub sma_window: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            sma_window: DEFAULT_SMA_WINDOW,
        }
    }
}

impl AnalysisConfig {
    /// Load a config from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse a config from TOML text and validate it.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sma_window < 1 {
            return Err(ConfigError::InvalidSmaWindow(self.sma_window));
        }
        Ok(())
    }
}
