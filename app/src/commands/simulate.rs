//! `looping simulate`

use anyhow::Context;
use looping::{simulation_params, validate_inputs};
use looping_core::AppConfig;

use crate::cli::InputArgs;

pub fn run(config: &AppConfig, args: &InputArgs) -> anyhow::Result<()> {
    let inputs = args.overrides().apply(&config.defaults);
    validate_inputs(&inputs).context("invalid inputs")?;
    let labels = args.labels(&config.labels);

    let params = simulation_params(&inputs, &labels);
    tracing::debug!(count = params.len(), "Built simulation parameters");

    println!("{}", serde_json::to_string_pretty(&params)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use looping_core::LoopingInputs;

    fn config_with_bad_max_ltv() -> AppConfig {
        AppConfig {
            defaults: LoopingInputs {
                max_ltv_pct: 140.0,
                ..LoopingInputs::default()
            },
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_override_repairs_invalid_default() {
        let args = InputArgs {
            max_ltv: Some(80.0),
            ..InputArgs::default()
        };
        assert!(run(&config_with_bad_max_ltv(), &args).is_ok());
    }

    #[test]
    fn test_invalid_default_without_override_fails() {
        let err = run(&config_with_bad_max_ltv(), &InputArgs::default()).unwrap_err();
        assert_eq!(err.to_string(), "invalid inputs");
    }
}
