//! Error types for the looping calculator

use thiserror::Error;

/// Errors raised while validating inputs or evaluating formulas
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("{field} = {value} is outside [{min}, {max}]")]
    InvalidRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("Division undefined: {reason}")]
    DivisionUndefined { reason: String },
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid default inputs: {0}")]
    InvalidDefaults(#[from] CalcError),
}

impl CalcError {
    /// Get an HTTP-friendly error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidRange { .. } => "invalid_range",
            Self::NotFinite { .. } => "not_finite",
            Self::DivisionUndefined { .. } => "division_undefined",
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidRange { .. } | Self::NotFinite { .. } => 400,
            Self::DivisionUndefined { .. } => 422,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_error_codes() {
        let err = CalcError::InvalidRange {
            field: "max_ltv_pct",
            value: 120.0,
            min: 0.0,
            max: 100.0,
        };
        assert_eq!(err.error_code(), "invalid_range");
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.to_string(), "max_ltv_pct = 120 is outside [0, 100]");

        let err = CalcError::DivisionUndefined {
            reason: "price_b is zero".into(),
        };
        assert_eq!(err.error_code(), "division_undefined");
        assert_eq!(err.status_code(), 422);
    }

    #[test]
    fn test_calc_error_wraps_into_config_error() {
        let err: ConfigError = CalcError::NotFinite { field: "leverage" }.into();
        assert_eq!(
            err.to_string(),
            "Invalid default inputs: leverage must be a finite number"
        );
    }
}
