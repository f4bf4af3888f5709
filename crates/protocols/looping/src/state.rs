//! Looping State Types
//!
//! Output structures of one evaluation. All values are derived; nothing here
//! has independent storage or identity.

use looping_core::Ratio;
use serde::{Deserialize, Serialize};

use crate::constants::health;

/// Result of evaluating one set of inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoopingOutputs {
    /// Maximum leverage permitted by the max LTV
    pub leverage_max: f64,
    /// Leverage actually applied, clamped into [1, leverage_max]
    pub leverage: f64,
    /// LLTV actually applied (%), never below max LTV
    pub lltv_pct: f64,
    /// Target LTV as a fraction in [0, 1)
    pub ltv_target: f64,
    pub health_ratio: Ratio,
    pub health_status: HealthStatus,
    /// Blended APR on the initial deposit (%)
    pub resulting_apr_pct: f64,
    pub liquidation: Liquidation,
    pub position: PositionBreakdown,
}

/// Price ratios between the two assets at which the position is liquidated
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiquidationRatios {
    /// Units of asset B per 1 unit of asset A at liquidation
    pub ratio_a_to_b: f64,
    /// Units of asset A per 1 unit of asset B at liquidation
    pub ratio_b_to_a: f64,
}

/// Liquidation outcome for a position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Liquidation {
    /// Leverage <= 1: nothing borrowed, no liquidation price
    NoDebt,
    /// Zero price or zero LLTV feeding the formula
    Undefined { reason: String },
    /// Liquidation happens at these ratios
    At(LiquidationRatios),
}

impl Liquidation {
    pub fn ratios(&self) -> Option<&LiquidationRatios> {
        match self {
            Self::At(r) => Some(r),
            _ => None,
        }
    }
}

/// Size of the looped position in asset and quote terms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionBreakdown {
    /// Total asset A supplied after looping
    pub total_supplied_a: f64,
    /// Quote value of the initial deposit
    pub equity_value: f64,
    /// Quote value of the total borrow
    pub borrowed_value: f64,
    /// Asset B borrowed; `None` when price_b is zero
    pub borrowed_b: Option<f64>,
    /// One year of yield on the initial deposit at the resulting APR, in A
    pub annual_yield_a: f64,
}

/// Health ratio status for UI color coding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    NoDebt,       // Nothing borrowed
    Healthy,      // Green: >= 1.5
    Warning,      // Amber: >= 1.2 and < 1.5
    Danger,       // Red: > 1.0 and < 1.2
    Liquidatable, // <= 1.0
}

impl HealthStatus {
    /// Classify a health ratio
    pub fn from_ratio(ratio: Ratio) -> Self {
        match ratio {
            Ratio::Unbounded => Self::NoDebt,
            Ratio::Finite(h) if h <= health::LIQUIDATION_THRESHOLD => Self::Liquidatable,
            Ratio::Finite(h) if h < health::WARNING_THRESHOLD => Self::Danger,
            Ratio::Finite(h) if h < health::HEALTHY_THRESHOLD => Self::Warning,
            Ratio::Finite(_) => Self::Healthy,
        }
    }

    /// Color name used by front ends
    pub fn color(&self) -> &'static str {
        match self {
            Self::NoDebt | Self::Healthy => "green",
            Self::Warning => "amber",
            Self::Danger | Self::Liquidatable => "red",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_status_healthy() {
        assert_eq!(HealthStatus::from_ratio(Ratio::Finite(1.8)), HealthStatus::Healthy);
        assert_eq!(HealthStatus::from_ratio(Ratio::Finite(1.5)), HealthStatus::Healthy);
    }

    #[test]
    fn test_health_status_warning() {
        assert_eq!(HealthStatus::from_ratio(Ratio::Finite(1.3)), HealthStatus::Warning);
        assert_eq!(HealthStatus::Warning.color(), "amber");
    }

    #[test]
    fn test_health_status_danger() {
        assert_eq!(HealthStatus::from_ratio(Ratio::Finite(1.1)), HealthStatus::Danger);
        assert_eq!(HealthStatus::from_ratio(Ratio::Finite(1.0)), HealthStatus::Liquidatable);
        assert_eq!(HealthStatus::from_ratio(Ratio::Finite(0.9)), HealthStatus::Liquidatable);
        assert_eq!(HealthStatus::Liquidatable.color(), "red");
    }

    #[test]
    fn test_health_status_no_debt() {
        assert_eq!(HealthStatus::from_ratio(Ratio::Unbounded), HealthStatus::NoDebt);
        assert_eq!(HealthStatus::NoDebt.color(), "green");
    }

    #[test]
    fn test_liquidation_serialization() {
        let json = serde_json::to_value(Liquidation::NoDebt).unwrap();
        assert_eq!(json["status"], "no_debt");

        let json = serde_json::to_value(Liquidation::At(LiquidationRatios {
            ratio_a_to_b: 0.625,
            ratio_b_to_a: 1.6,
        }))
        .unwrap();
        assert_eq!(json["status"], "at");
        assert_eq!(json["ratio_a_to_b"], 0.625);

        let json = serde_json::to_value(Liquidation::Undefined {
            reason: "price_b is zero".into(),
        })
        .unwrap();
        assert_eq!(json["status"], "undefined");
        assert_eq!(json["reason"], "price_b is zero");
    }
}
