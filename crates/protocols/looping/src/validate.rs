//! Input range validation
//!
//! Presentation layers call this before [`crate::evaluate`]; the calculator
//! itself assumes validated ranges and never re-checks them.

use looping_core::{CalcError, LoopingInputs};

use crate::constants::bounds;

/// Check every input against its documented range.
///
/// Leverage above the max is not rejected here; `evaluate` clamps it.
pub fn validate_inputs(inputs: &LoopingInputs) -> Result<(), CalcError> {
    let fields = [
        ("price_a", inputs.price_a),
        ("price_b", inputs.price_b),
        ("initial_amount", inputs.initial_amount),
        ("supply_apr_pct", inputs.supply_apr_pct),
        ("borrow_apr_pct", inputs.borrow_apr_pct),
        ("max_ltv_pct", inputs.max_ltv_pct),
        ("lltv_pct", inputs.lltv_pct),
        ("leverage", inputs.leverage),
    ];
    for (field, value) in fields {
        if !value.is_finite() {
            return Err(CalcError::NotFinite { field });
        }
    }

    non_negative("price_a", inputs.price_a)?;
    non_negative("price_b", inputs.price_b)?;
    non_negative("initial_amount", inputs.initial_amount)?;
    non_negative("supply_apr_pct", inputs.supply_apr_pct)?;

    percent("max_ltv_pct", inputs.max_ltv_pct)?;
    percent("lltv_pct", inputs.lltv_pct)?;

    if inputs.leverage < bounds::MIN_LEVERAGE {
        return Err(CalcError::InvalidRange {
            field: "leverage",
            value: inputs.leverage,
            min: bounds::MIN_LEVERAGE,
            max: f64::INFINITY,
        });
    }

    Ok(())
}

fn non_negative(field: &'static str, value: f64) -> Result<(), CalcError> {
    if value < 0.0 {
        return Err(CalcError::InvalidRange {
            field,
            value,
            min: 0.0,
            max: f64::INFINITY,
        });
    }
    Ok(())
}

fn percent(field: &'static str, value: f64) -> Result<(), CalcError> {
    if !(bounds::MIN_PERCENT..=bounds::MAX_PERCENT).contains(&value) {
        return Err(CalcError::InvalidRange {
            field,
            value,
            min: bounds::MIN_PERCENT,
            max: bounds::MAX_PERCENT,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(validate_inputs(&LoopingInputs::default()), Ok(()));
    }

    #[test]
    fn test_negative_borrow_apr_allowed() {
        let inputs = LoopingInputs {
            borrow_apr_pct: -2.0,
            ..LoopingInputs::default()
        };
        assert!(validate_inputs(&inputs).is_ok());
    }

    #[test]
    fn test_leverage_above_max_allowed() {
        let inputs = LoopingInputs {
            leverage: 25.0,
            ..LoopingInputs::default()
        };
        assert!(validate_inputs(&inputs).is_ok());
    }

    #[test]
    fn test_max_ltv_out_of_range() {
        let inputs = LoopingInputs {
            max_ltv_pct: 101.0,
            ..LoopingInputs::default()
        };
        match validate_inputs(&inputs) {
            Err(CalcError::InvalidRange { field, max, .. }) => {
                assert_eq!(field, "max_ltv_pct");
                assert_eq!(max, 100.0);
            }
            other => panic!("expected InvalidRange, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_price_rejected() {
        let inputs = LoopingInputs {
            price_b: -1.0,
            ..LoopingInputs::default()
        };
        let err = validate_inputs(&inputs).unwrap_err();
        assert_eq!(err.error_code(), "invalid_range");
    }

    #[test]
    fn test_leverage_below_one_rejected() {
        let inputs = LoopingInputs {
            leverage: 0.5,
            ..LoopingInputs::default()
        };
        assert!(matches!(
            validate_inputs(&inputs),
            Err(CalcError::InvalidRange { field: "leverage", .. })
        ));
    }

    #[test]
    fn test_nan_rejected() {
        let inputs = LoopingInputs {
            supply_apr_pct: f64::NAN,
            ..LoopingInputs::default()
        };
        assert_eq!(
            validate_inputs(&inputs),
            Err(CalcError::NotFinite {
                field: "supply_apr_pct"
            })
        );
    }
}
