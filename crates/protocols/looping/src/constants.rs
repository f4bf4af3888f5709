//! Looping Calculator Constants
//!
//! Thresholds and display settings shared by every presentation layer.

/// Health ratio thresholds for UI color coding
pub mod health {
    /// At or below this the position can be liquidated
    pub const LIQUIDATION_THRESHOLD: f64 = 1.0;
    pub const HEALTHY_THRESHOLD: f64 = 1.5;
    pub const WARNING_THRESHOLD: f64 = 1.2;
}

/// Input ranges enforced before evaluation
pub mod bounds {
    pub const MIN_PERCENT: f64 = 0.0;
    pub const MAX_PERCENT: f64 = 100.0;
    pub const MIN_LEVERAGE: f64 = 1.0;
}

/// Leverage slider settings
pub mod leverage {
    /// Increment used by interactive leverage inputs
    pub const STEP: f64 = 0.1;
    /// Decimal places of the max leverage figure
    pub const MAX_LEVERAGE_DECIMALS: i32 = 2;
}

/// Rounding used in reports
pub mod display {
    /// Health ratio in interactive output
    pub const HEALTH_DECIMALS: i32 = 2;
    /// Values in the simulation parameter set
    pub const SIMULATION_DECIMALS: i32 = 4;
    /// Liquidation price ratios
    pub const RATIO_DECIMALS: usize = 4;
}
