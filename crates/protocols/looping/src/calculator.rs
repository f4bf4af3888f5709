//! Looping Calculator
//!
//! Pure math functions for leverage, health ratio, APR and liquidation price.
//! No I/O - just calculations.
//!
//! # Units
//!
//! - LTV / LLTV arguments are fractions (0.75 = 75%)
//! - APR arguments and results are percent (5.0 = 5%)
//! - Prices share one quote currency

use looping_core::{round_to, CalcError, LoopingInputs, Ratio};

use crate::constants::{bounds, leverage as slider};
use crate::state::{
    HealthStatus, Liquidation, LiquidationRatios, LoopingOutputs, PositionBreakdown,
};

/// Maximum leverage reachable by looping at `max_ltv`
/// leverage_max = 1 / (1 - max_ltv), rounded to 2 decimals
///
/// Returns 1.0 when max_ltv is 0 (no borrowing) or >= 1 (unbounded loop).
pub fn compute_max_leverage(max_ltv: f64) -> f64 {
    if max_ltv > 0.0 && max_ltv < 1.0 {
        round_to(1.0 / (1.0 - max_ltv), slider::MAX_LEVERAGE_DECIMALS)
    } else {
        1.0
    }
}

/// Target LTV implied by a leverage
/// ltv_target = (leverage - 1) / leverage
pub fn compute_ltv_target(leverage: f64) -> f64 {
    if leverage > 0.0 {
        (leverage - 1.0) / leverage
    } else {
        0.0
    }
}

/// Health ratio = lltv / ltv_target
///
/// No loan (ltv_target == 0) means the position cannot be liquidated, which is
/// reported as `Ratio::Unbounded`. A non-positive result is treated the same.
pub fn compute_health_ratio(lltv: f64, ltv_target: f64) -> Ratio {
    if ltv_target <= 0.0 {
        return Ratio::Unbounded;
    }

    let ratio = lltv / ltv_target;
    if ratio > 0.0 {
        Ratio::from_f64(ratio)
    } else {
        Ratio::Unbounded
    }
}

/// Blended APR on the initial deposit (%)
/// apr = supply * leverage - borrow * (leverage - 1)
///
/// Yield is earned on the whole leveraged supply and paid on the borrowed
/// part. Without leverage only the supply APR applies.
pub fn compute_resulting_apr(leverage: f64, supply_apr_pct: f64, borrow_apr_pct: f64) -> f64 {
    if leverage > 1.0 {
        supply_apr_pct * leverage - borrow_apr_pct * (leverage - 1.0)
    } else {
        supply_apr_pct
    }
}

/// Liquidation price ratios between A and B
///
/// R = (leverage - 1) / (leverage * lltv)
/// ratio_a_to_b = (price_a / price_b) * R
/// ratio_b_to_a = (price_b / price_a) / R
///
/// Returns `Ok(None)` when leverage <= 1 (nothing borrowed). Zero LLTV or a
/// zero price makes the formula undefined and returns `DivisionUndefined`.
pub fn compute_liquidation_ratios(
    leverage: f64,
    lltv: f64,
    price_a: f64,
    price_b: f64,
) -> Result<Option<LiquidationRatios>, CalcError> {
    if leverage <= 1.0 {
        return Ok(None);
    }
    if lltv <= 0.0 {
        return Err(CalcError::DivisionUndefined {
            reason: "liquidation threshold is zero".to_string(),
        });
    }
    if price_a <= 0.0 {
        return Err(CalcError::DivisionUndefined {
            reason: "price of asset A is zero".to_string(),
        });
    }
    if price_b <= 0.0 {
        return Err(CalcError::DivisionUndefined {
            reason: "price of asset B is zero".to_string(),
        });
    }

    let r = (leverage - 1.0) / (leverage * lltv);
    let ratio_a_to_b = (price_a / price_b) * r;
    let ratio_b_to_a = (price_b / price_a) / r;

    // Extreme price spreads overflow f64 even though every divisor is non-zero
    if !ratio_a_to_b.is_finite() || !ratio_b_to_a.is_finite() {
        return Err(CalcError::DivisionUndefined {
            reason: "liquidation ratio exceeds the representable range".to_string(),
        });
    }

    Ok(Some(LiquidationRatios {
        ratio_a_to_b,
        ratio_b_to_a,
    }))
}

/// Raise LLTV to at least max LTV
pub fn clamp_lltv(max_ltv: f64, lltv: f64) -> f64 {
    lltv.max(max_ltv)
}

/// Clamp a requested leverage into [1, leverage_max]
pub fn clamp_leverage(leverage: f64, leverage_max: f64) -> f64 {
    if !leverage.is_finite() {
        return bounds::MIN_LEVERAGE;
    }
    leverage.clamp(bounds::MIN_LEVERAGE, leverage_max.max(bounds::MIN_LEVERAGE))
}

/// Position size after looping `initial_amount` of A at `leverage`
pub fn compute_position(
    initial_amount: f64,
    leverage: f64,
    price_a: f64,
    price_b: f64,
    resulting_apr_pct: f64,
) -> PositionBreakdown {
    let leverage = leverage.max(bounds::MIN_LEVERAGE);
    let equity_value = initial_amount * price_a;
    let borrowed_value = equity_value * (leverage - 1.0);

    let borrowed_b = if price_b > 0.0 {
        Some(borrowed_value / price_b).filter(|b| b.is_finite())
    } else {
        None
    };

    PositionBreakdown {
        total_supplied_a: initial_amount * leverage,
        equity_value,
        borrowed_value,
        borrowed_b,
        annual_yield_a: initial_amount * resulting_apr_pct / 100.0,
    }
}

/// Run the full calculation for one set of inputs
///
/// Never fails: degenerate divisions surface as sentinels
/// (`Ratio::Unbounded`, `Liquidation::Undefined`) so every result is
/// renderable.
pub fn evaluate(inputs: &LoopingInputs) -> LoopingOutputs {
    let max_ltv = inputs.max_ltv();
    let lltv = clamp_lltv(max_ltv, inputs.lltv());

    let leverage_max = compute_max_leverage(max_ltv);
    let leverage = clamp_leverage(inputs.leverage, leverage_max);

    let ltv_target = compute_ltv_target(leverage);
    let health_ratio = compute_health_ratio(lltv, ltv_target);
    let resulting_apr_pct =
        compute_resulting_apr(leverage, inputs.supply_apr_pct, inputs.borrow_apr_pct);

    let liquidation =
        match compute_liquidation_ratios(leverage, lltv, inputs.price_a, inputs.price_b) {
            Ok(Some(ratios)) => Liquidation::At(ratios),
            Ok(None) => Liquidation::NoDebt,
            Err(e) => Liquidation::Undefined {
                reason: e.to_string(),
            },
        };

    let position = compute_position(
        inputs.initial_amount,
        leverage,
        inputs.price_a,
        inputs.price_b,
        resulting_apr_pct,
    );

    LoopingOutputs {
        leverage_max,
        leverage,
        lltv_pct: lltv * 100.0,
        ltv_target,
        health_ratio,
        health_status: HealthStatus::from_ratio(health_ratio),
        resulting_apr_pct,
        liquidation,
        position,
    }
}
