//! Data Transfer Objects for API requests and responses

use looping::{LoopingOutputs, LoopingReport};
use looping_core::{AssetLabels, CalcError, InputOverrides, LoopingInputs};
use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl HealthResponse {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Calculate / simulation request. Missing inputs take configured defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculateRequest {
    #[serde(default)]
    pub inputs: InputOverrides,
    #[serde(default)]
    pub labels: Option<AssetLabels>,
}

/// Calculate response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateResponse {
    /// Inputs after merging with defaults, before clamping
    pub inputs: LoopingInputs,
    pub labels: AssetLabels,
    pub outputs: LoopingOutputs,
    pub report: LoopingReport,
}

/// Simulation parameters response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResponse {
    pub params: serde_json::Map<String, serde_json::Value>,
}

/// Defaults response, used to seed a form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsResponse {
    pub inputs: LoopingInputs,
    pub labels: AssetLabels,
    /// Max leverage for the default max LTV
    pub leverage_max: f64,
    /// Leverage slider increment
    pub leverage_step: f64,
}

/// Generic API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl From<&CalcError> for ApiError {
    fn from(e: &CalcError) -> Self {
        Self::new(e.error_code(), e.to_string())
    }
}
