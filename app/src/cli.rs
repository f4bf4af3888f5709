//! Command-line arguments

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use looping_core::{AssetLabels, InputOverrides};

/// Leveraged looping calculator
#[derive(Parser, Debug)]
#[command(name = "looping")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// JSON config file with default inputs, labels and API port
    #[arg(short, long, global = true, env = "LOOPING_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate a looping position
    Calc(CalcArgs),

    /// Print simulation parameters as JSON
    Simulate(InputArgs),

    /// Start the HTTP API
    Serve(ServeArgs),
}

/// Position inputs. Anything left out comes from the config defaults.
#[derive(Args, Debug, Default, Clone)]
pub struct InputArgs {
    /// Name of the supplied asset
    #[arg(long)]
    pub asset_a: Option<String>,

    /// Name of the borrowed asset
    #[arg(long)]
    pub asset_b: Option<String>,

    /// Unit price of asset A
    #[arg(long)]
    pub price_a: Option<f64>,

    /// Unit price of asset B
    #[arg(long)]
    pub price_b: Option<f64>,

    /// Starting deposit in asset A
    #[arg(long)]
    pub initial_amount: Option<f64>,

    /// Supply APR for asset A (%)
    #[arg(long)]
    pub supply_apr: Option<f64>,

    /// Borrow APR for asset B (%), may be negative
    #[arg(long, allow_negative_numbers = true)]
    pub borrow_apr: Option<f64>,

    /// Protocol max LTV (%)
    #[arg(long)]
    pub max_ltv: Option<f64>,

    /// Liquidation LTV (%); raised to max LTV if lower
    #[arg(long)]
    pub lltv: Option<f64>,

    /// Desired leverage; clamped to the max allowed
    #[arg(short, long)]
    pub leverage: Option<f64>,
}

impl InputArgs {
    pub fn overrides(&self) -> InputOverrides {
        InputOverrides {
            price_a: self.price_a,
            price_b: self.price_b,
            initial_amount: self.initial_amount,
            supply_apr_pct: self.supply_apr,
            borrow_apr_pct: self.borrow_apr,
            max_ltv_pct: self.max_ltv,
            lltv_pct: self.lltv,
            leverage: self.leverage,
        }
    }

    /// Labels from flags, falling back to `base` per asset
    pub fn labels(&self, base: &AssetLabels) -> AssetLabels {
        AssetLabels::new(
            self.asset_a.clone().unwrap_or_else(|| base.asset_a.clone()),
            self.asset_b.clone().unwrap_or_else(|| base.asset_b.clone()),
        )
        .resolved()
    }
}

#[derive(Args, Debug)]
pub struct CalcArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Output layout
    #[arg(long, value_enum, default_value = "wide")]
    pub layout: Layout,

    /// Emit the full result as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Port to bind on 127.0.0.1 (overrides config)
    #[arg(short, long, env = "LOOPING_API_PORT")]
    pub port: Option<u16>,
}

/// Text layouts for `calc`
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
    /// Two-column inputs with a results section
    #[default]
    Wide,
    /// One line per figure
    Compact,
}
