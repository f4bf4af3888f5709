//! Configuration types for the looping calculator

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{AssetLabels, ConfigError, LoopingInputs};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// API server port
    #[serde(default = "default_api_port")]
    pub api_port: u16,

    /// Inputs used when a caller leaves a field unspecified
    #[serde(default)]
    pub defaults: LoopingInputs,

    /// Default asset names
    #[serde(default)]
    pub labels: AssetLabels,
}

fn default_api_port() -> u16 {
    18080
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_port: default_api_port(),
            defaults: LoopingInputs::default(),
            labels: AssetLabels::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file. Missing fields take defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let shown = path.display().to_string();

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: shown.clone(),
            source,
        })?;

        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: shown.clone(),
            source,
        })?;

        tracing::debug!(path = %shown, api_port = config.api_port, "Loaded config file");
        Ok(config)
    }

    /// Load from `path` if given, otherwise fall back to built-in defaults
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }
}
