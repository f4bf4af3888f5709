//! Core type definitions for the looping calculator

use serde::{Deserialize, Serialize};
use std::fmt;

/// A ratio that is either a finite number or unbounded.
///
/// Used wherever a formula has no finite answer (no debt means a health
/// ratio that can never be breached). Serialized with an explicit tag so
/// consumers never have to interpret IEEE-754 infinity:
/// `{"kind":"finite","value":1.6}` or `{"kind":"unbounded"}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Ratio {
    Finite(f64),
    Unbounded,
}

impl Ratio {
    /// Wrap a raw float, mapping NaN and infinities to `Unbounded`
    pub fn from_f64(value: f64) -> Self {
        if value.is_finite() {
            Self::Finite(value)
        } else {
            Self::Unbounded
        }
    }

    /// Finite value, if any
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Finite(v) => Some(*v),
            Self::Unbounded => None,
        }
    }

    /// Round the finite value to `decimals` places; unbounded stays unbounded
    pub fn rounded(&self, decimals: i32) -> Self {
        match self {
            Self::Finite(v) => Self::Finite(round_to(*v, decimals)),
            Self::Unbounded => Self::Unbounded,
        }
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(v) => write!(f, "{:.2}", v),
            Self::Unbounded => write!(f, "inf"),
        }
    }
}

/// Round half away from zero to a fixed number of decimal places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Display names for the two assets of a loop.
///
/// Labels only parametrize output keys and display strings; they carry no
/// numeric meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetLabels {
    #[serde(default)]
    pub asset_a: String,
    #[serde(default)]
    pub asset_b: String,
}

impl AssetLabels {
    pub fn new(asset_a: impl Into<String>, asset_b: impl Into<String>) -> Self {
        Self {
            asset_a: asset_a.into(),
            asset_b: asset_b.into(),
        }
    }

    /// Replace blank names with the placeholder defaults
    pub fn resolved(&self) -> Self {
        Self {
            asset_a: non_blank_or(&self.asset_a, constants::DEFAULT_ASSET_A),
            asset_b: non_blank_or(&self.asset_b, constants::DEFAULT_ASSET_B),
        }
    }

    pub fn a(&self) -> &str {
        &self.asset_a
    }

    pub fn b(&self) -> &str {
        &self.asset_b
    }
}

impl Default for AssetLabels {
    fn default() -> Self {
        Self::new(constants::DEFAULT_ASSET_A, constants::DEFAULT_ASSET_B)
    }
}

fn non_blank_or(name: &str, fallback: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Scalar inputs of one loop evaluation.
///
/// Percent fields are in percent (75.0 means 75%). Re-created from scratch on
/// every evaluation; nothing is cached between calls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoopingInputs {
    /// Unit price of asset A in the quote currency
    pub price_a: f64,
    /// Unit price of asset B in the quote currency
    pub price_b: f64,
    /// Starting deposit, denominated in asset A
    pub initial_amount: f64,
    /// Supply APR for asset A (%)
    pub supply_apr_pct: f64,
    /// Borrow APR for asset B (%), may be negative
    pub borrow_apr_pct: f64,
    /// Protocol maximum loan-to-value (%)
    pub max_ltv_pct: f64,
    /// Liquidation LTV threshold (%)
    pub lltv_pct: f64,
    /// Desired leverage, 1.0 = no looping
    pub leverage: f64,
}

impl LoopingInputs {
    /// Max LTV as a fraction
    pub fn max_ltv(&self) -> f64 {
        self.max_ltv_pct / constants::PERCENT
    }

    /// LLTV as a fraction
    pub fn lltv(&self) -> f64 {
        self.lltv_pct / constants::PERCENT
    }
}

impl Default for LoopingInputs {
    fn default() -> Self {
        Self {
            price_a: 1.0,
            price_b: 1.0,
            initial_amount: 100.0,
            supply_apr_pct: 5.0,
            borrow_apr_pct: 7.0,
            max_ltv_pct: 75.0,
            lltv_pct: 80.0,
            leverage: 1.0,
        }
    }
}

/// Partial inputs; unset fields fall back to a base set of inputs
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputOverrides {
    pub price_a: Option<f64>,
    pub price_b: Option<f64>,
    pub initial_amount: Option<f64>,
    pub supply_apr_pct: Option<f64>,
    pub borrow_apr_pct: Option<f64>,
    pub max_ltv_pct: Option<f64>,
    pub lltv_pct: Option<f64>,
    pub leverage: Option<f64>,
}

impl InputOverrides {
    /// Overlay these overrides on `base`
    pub fn apply(&self, base: &LoopingInputs) -> LoopingInputs {
        LoopingInputs {
            price_a: self.price_a.unwrap_or(base.price_a),
            price_b: self.price_b.unwrap_or(base.price_b),
            initial_amount: self.initial_amount.unwrap_or(base.initial_amount),
            supply_apr_pct: self.supply_apr_pct.unwrap_or(base.supply_apr_pct),
            borrow_apr_pct: self.borrow_apr_pct.unwrap_or(base.borrow_apr_pct),
            max_ltv_pct: self.max_ltv_pct.unwrap_or(base.max_ltv_pct),
            lltv_pct: self.lltv_pct.unwrap_or(base.lltv_pct),
            leverage: self.leverage.unwrap_or(base.leverage),
        }
    }
}

/// Constants
pub mod constants {
    /// Placeholder name for the supplied asset
    pub const DEFAULT_ASSET_A: &str = "Asset A";

    /// Placeholder name for the borrowed asset
    pub const DEFAULT_ASSET_B: &str = "Asset B";

    /// Percent inputs are divided by this to get fractions
    pub const PERCENT: f64 = 100.0;
}
