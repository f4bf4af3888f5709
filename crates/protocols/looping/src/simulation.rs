//! Simulation parameter export
//!
//! Flattens one evaluation into the parameter set handed to a simulation run.
//! Asset-specific keys carry the asset label, e.g. `supply_apr_wstETH`.

use looping_core::{round_to, AssetLabels, LoopingInputs, Ratio};
use serde_json::{json, Map, Value};

use crate::calculator::evaluate;
use crate::constants::display::SIMULATION_DECIMALS;

/// Build the simulation parameter map.
///
/// Rates are emitted as fractions, `ltv_target` and `health_ratio` are rounded
/// to 4 decimals. An unbounded health ratio is emitted as the string `"inf"`.
pub fn simulation_params(inputs: &LoopingInputs, labels: &AssetLabels) -> Map<String, Value> {
    let labels = labels.resolved();
    let outputs = evaluate(inputs);

    let health_ratio = match outputs.health_ratio.rounded(SIMULATION_DECIMALS) {
        Ratio::Finite(h) => json!(h),
        Ratio::Unbounded => json!("inf"),
    };

    let mut params = Map::new();
    params.insert(
        format!("initial_amount_{}", labels.a()),
        json!(inputs.initial_amount),
    );
    params.insert(
        format!("supply_apr_{}", labels.a()),
        json!(inputs.supply_apr_pct / 100.0),
    );
    params.insert(
        format!("borrow_apr_{}", labels.b()),
        json!(inputs.borrow_apr_pct / 100.0),
    );
    params.insert("max_ltv".to_string(), json!(inputs.max_ltv()));
    params.insert(
        "liquidation_threshold".to_string(),
        json!(outputs.lltv_pct / 100.0),
    );
    params.insert("leverage".to_string(), json!(outputs.leverage));
    params.insert(
        "ltv_target".to_string(),
        json!(round_to(outputs.ltv_target, SIMULATION_DECIMALS)),
    );
    params.insert("health_ratio".to_string(), health_ratio);
    params.insert(format!("price_{}", labels.a()), json!(inputs.price_a));
    params.insert(format!("price_{}", labels.b()), json!(inputs.price_b));
    params
}
