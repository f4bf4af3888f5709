//! `looping calc`

use anyhow::Context;
use looping::{evaluate, validate_inputs, LoopingReport};
use looping_core::AppConfig;
use serde_json::json;

use crate::cli::CalcArgs;
use crate::render::render;

pub fn run(config: &AppConfig, args: &CalcArgs) -> anyhow::Result<()> {
    let inputs = args.inputs.overrides().apply(&config.defaults);
    validate_inputs(&inputs).context("invalid inputs")?;
    let labels = args.inputs.labels(&config.labels);

    let outputs = evaluate(&inputs);
    let report = LoopingReport::new(&outputs, &labels);

    if outputs.leverage != inputs.leverage {
        tracing::info!(
            requested = inputs.leverage,
            applied = outputs.leverage,
            "Leverage clamped to allowed range"
        );
    }

    if args.json {
        let body = json!({
            "inputs": inputs,
            "labels": labels,
            "outputs": outputs,
            "report": report,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        print!("{}", render(args.layout, &inputs, &labels, &outputs, &report));
    }

    Ok(())
}
