//! Text layouts for `calc`
//!
//! Both layouts read the same outputs and report; neither computes anything.

use std::fmt::{self, Write};

use looping::{LoopingOutputs, LoopingReport};
use looping_core::{AssetLabels, LoopingInputs};

use crate::cli::Layout;

pub fn render(
    layout: Layout,
    inputs: &LoopingInputs,
    labels: &AssetLabels,
    outputs: &LoopingOutputs,
    report: &LoopingReport,
) -> String {
    match layout {
        Layout::Wide => render_wide(inputs, labels, outputs, report),
        Layout::Compact => render_compact(report),
    }
}

fn render_wide(
    inputs: &LoopingInputs,
    labels: &AssetLabels,
    outputs: &LoopingOutputs,
    report: &LoopingReport,
) -> String {
    let mut out = String::new();
    // Writing into a String never fails
    if write_wide(&mut out, inputs, labels, outputs, report).is_err() {
        tracing::warn!("Wide layout rendering was truncated");
    }
    out
}

fn write_wide(
    out: &mut String,
    inputs: &LoopingInputs,
    labels: &AssetLabels,
    outputs: &LoopingOutputs,
    report: &LoopingReport,
) -> fmt::Result {
    let (a, b) = (labels.a(), labels.b());

    writeln!(out, "Simplified APR Looping")?;
    writeln!(out)?;
    row(out, &format!("Parameters for {}", a), &format!("Parameters for {}", b))?;
    row(
        out,
        &format!("  Price: {}", inputs.price_a),
        &format!("  Price: {}", inputs.price_b),
    )?;
    row(
        out,
        &format!("  Initial amount: {}", inputs.initial_amount),
        &format!("  Max LTV: {}%", inputs.max_ltv_pct),
    )?;
    row(
        out,
        &format!("  Supply APR: {}%", inputs.supply_apr_pct),
        &format!("  LLTV: {:.2}%", outputs.lltv_pct),
    )?;
    row(out, "", &format!("  Borrow APR: {}%", inputs.borrow_apr_pct))?;
    writeln!(out)?;
    writeln!(out, "{}", report.max_leverage)?;
    writeln!(out, "{}", report.leverage)?;
    writeln!(out)?;
    writeln!(out, "Results")?;
    writeln!(out, "  {}", report.ltv_target)?;
    writeln!(out, "  {} ({})", report.health_ratio, report.health_color)?;
    writeln!(out, "  {}", report.resulting_apr)?;
    writeln!(
        out,
        "  Total supplied: {:.4} {}",
        outputs.position.total_supplied_a, a
    )?;
    match outputs.position.borrowed_b {
        Some(borrowed) => writeln!(out, "  Borrowed: {:.4} {}", borrowed, b)?,
        None => writeln!(out, "  Borrowed: undefined ({} price is zero or out of range)", b)?,
    }
    writeln!(
        out,
        "  Yearly yield: {:.4} {}",
        outputs.position.annual_yield_a, a
    )?;
    for line in &report.liquidation {
        writeln!(out, "  {}", line)?;
    }
    Ok(())
}

/// Two left-aligned columns
fn row(out: &mut String, left: &str, right: &str) -> fmt::Result {
    writeln!(out, "{:<32}{}", left, right)
}

fn render_compact(report: &LoopingReport) -> String {
    let mut lines = vec![
        report.max_leverage.clone(),
        report.leverage.clone(),
        report.ltv_target.clone(),
        report.health_ratio.clone(),
        report.resulting_apr.clone(),
    ];
    lines.extend(report.liquidation.iter().cloned());
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use looping::evaluate;

    fn leveraged() -> (LoopingInputs, AssetLabels, LoopingOutputs, LoopingReport) {
        let inputs = LoopingInputs {
            leverage: 2.0,
            ..LoopingInputs::default()
        };
        let labels = AssetLabels::new("ETH", "USDC");
        let outputs = evaluate(&inputs);
        let report = LoopingReport::new(&outputs, &labels);
        (inputs, labels, outputs, report)
    }

    #[test]
    fn test_compact_layout() {
        let (inputs, labels, outputs, report) = leveraged();
        let text = render(Layout::Compact, &inputs, &labels, &outputs, &report);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Maximum Allowed Leverage: 4.00x");
        assert_eq!(lines[3], "Health Ratio: 1.60");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_wide_layout_contains_results() {
        let (inputs, labels, outputs, report) = leveraged();
        let text = render(Layout::Wide, &inputs, &labels, &outputs, &report);
        assert!(text.contains("Parameters for ETH"));
        assert!(text.contains("Parameters for USDC"));
        assert!(text.contains("Health Ratio: 1.60 (green)"));
        assert!(text.contains("Borrowed: 100.0000 USDC"));
        assert!(text.contains("Liquidated if 1 ETH = 0.6250 USDC"));
    }

    #[test]
    fn test_layouts_share_figures() {
        let (inputs, labels, outputs, report) = leveraged();
        let wide = render(Layout::Wide, &inputs, &labels, &outputs, &report);
        let compact = render(Layout::Compact, &inputs, &labels, &outputs, &report);
        for line in compact.lines() {
            assert!(wide.contains(line), "wide layout missing {:?}", line);
        }
    }
}
