use clap::Parser;
use looping_app::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    looping_app::init_logging();
    looping_app::run(Cli::parse()).await
}
