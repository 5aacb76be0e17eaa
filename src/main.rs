use clap::Parser;

use rentexpress_api::cli::{self, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (settings, environment) = cli::load_and_merge_config(&cli)?;
    cli::init_logger_from_settings(&settings)?;

    cli::execute_command(&cli, settings, environment)
        .await
        .inspect_err(|e| tracing::error!(error = ?e, "Command failed"))
}
