//! Application state shared across API handlers

use std::sync::Arc;

use looping_core::{AppConfig, AssetLabels, LoopingInputs};

/// Shared application state
///
/// Holds configuration only; every request evaluates from scratch.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AppConfig,
}

impl AppState {
    /// Create a new application state with default config
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create with a specific config
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config }),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Inputs used for fields a request leaves out
    pub fn default_inputs(&self) -> &LoopingInputs {
        &self.inner.config.defaults
    }

    pub fn default_labels(&self) -> &AssetLabels {
        &self.inner.config.labels
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
