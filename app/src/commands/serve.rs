//! `looping serve`

use looping::validate_inputs;
use looping_api::{start_server, AppState};
use looping_core::{AppConfig, ConfigError};

use crate::cli::ServeArgs;

pub async fn run(mut config: AppConfig, args: &ServeArgs) -> anyhow::Result<()> {
    if let Some(port) = args.port {
        config.api_port = port;
    }
    // Requests without overrides evaluate the defaults as-is
    validate_inputs(&config.defaults).map_err(ConfigError::InvalidDefaults)?;

    tracing::info!(port = config.api_port, "Starting looping API");
    start_server(AppState::with_config(config)).await?;
    Ok(())
}
