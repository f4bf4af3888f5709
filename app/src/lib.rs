//! Looping calculator command-line application

pub mod cli;
pub mod commands;
pub mod render;

use anyhow::Context;
use looping_core::AppConfig;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

/// Install the tracing subscriber. Logs go to stderr so stdout stays
/// machine-readable.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("looping=debug,looping_api=debug,info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load config and dispatch the selected command
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Calc(args) => commands::calc::run(&config, &args),
        Commands::Simulate(args) => commands::simulate::run(&config, &args),
        Commands::Serve(args) => commands::serve::run(config, &args).await,
    }
}

/// Defaults are not validated here: `calc` and `simulate` validate after
/// merging command-line overrides, `serve` validates them before binding.
fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let config = AppConfig::load(cli.config.as_deref()).context("loading configuration")?;

    tracing::debug!(
        api_port = config.api_port,
        asset_a = %config.labels.asset_a,
        asset_b = %config.labels.asset_b,
        "Configuration ready"
    );
    Ok(config)
}
