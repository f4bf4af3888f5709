//! Display strings for one evaluation
//!
//! Shared by every presentation layer so layouts differ only in arrangement.

use looping_core::AssetLabels;
use serde::{Deserialize, Serialize};

use crate::constants::display::{HEALTH_DECIMALS, RATIO_DECIMALS};
use crate::state::{Liquidation, LoopingOutputs};

/// Human-readable lines for an evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoopingReport {
    pub max_leverage: String,
    pub leverage: String,
    pub ltv_target: String,
    pub health_ratio: String,
    pub health_color: String,
    pub resulting_apr: String,
    /// One line per direction, or a single explanatory line
    pub liquidation: Vec<String>,
}

impl LoopingReport {
    pub fn new(outputs: &LoopingOutputs, labels: &AssetLabels) -> Self {
        let labels = labels.resolved();

        Self {
            max_leverage: format!("Maximum Allowed Leverage: {:.2}x", outputs.leverage_max),
            leverage: format!("Leverage: {:.2}x", outputs.leverage),
            ltv_target: format!("Target LTV: {:.2}%", outputs.ltv_target * 100.0),
            health_ratio: format!(
                "Health Ratio: {}",
                outputs.health_ratio.rounded(HEALTH_DECIMALS)
            ),
            health_color: outputs.health_status.color().to_string(),
            resulting_apr: format!("Resulting APR: {:.2}%", outputs.resulting_apr_pct),
            liquidation: liquidation_lines(&outputs.liquidation, &labels),
        }
    }
}

fn liquidation_lines(liquidation: &Liquidation, labels: &AssetLabels) -> Vec<String> {
    match liquidation {
        Liquidation::NoDebt => vec!["No borrow position, cannot be liquidated".to_string()],
        Liquidation::Undefined { reason } => {
            vec![format!("Liquidation price undefined: {}", reason)]
        }
        Liquidation::At(r) => vec![
            format!(
                "Liquidated if 1 {} = {:.*} {}",
                labels.a(),
                RATIO_DECIMALS,
                r.ratio_a_to_b,
                labels.b()
            ),
            format!(
                "Liquidated if 1 {} = {:.*} {}",
                labels.b(),
                RATIO_DECIMALS,
                r.ratio_b_to_a,
                labels.a()
            ),
        ],
    }
}
