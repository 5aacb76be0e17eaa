//! Command executor for dispatching CLI commands

use super::handlers::{OpenApiCommandHandler, ServeCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::{Environment, Settings};

/// Runs the parsed command with merged settings.
///
/// `serve` (also the default) blocks until the server shuts down.
pub async fn execute_command(
    cli: &Cli,
    settings: Settings,
    environment: Environment,
) -> anyhow::Result<()> {
    match cli.command() {
        Commands::Serve { dry_run, .. } => {
            ServeCommandHandler::new(settings, environment)
                .execute(dry_run)
                .await
        }
        Commands::Openapi { output } => {
            OpenApiCommandHandler::new(settings).execute(output.as_deref())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_dry_run_returns_without_serving() {
        let cli = Cli::try_parse_from(["rentexpress-api", "serve", "--dry-run"]).unwrap();
        let result = execute_command(&cli, Settings::default(), Environment::Test).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_openapi_command_writes_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("doc.json");
        let cli = Cli::try_parse_from([
            "rentexpress-api",
            "openapi",
            "--output",
            path.to_str().unwrap(),
        ])
        .unwrap();

        execute_command(&cli, Settings::default(), Environment::Test)
            .await
            .expect("Should write document");
        assert!(path.exists());
    }
}
