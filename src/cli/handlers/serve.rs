//! Serve command handler
//!
//! Handles the serve command including dry-run validation and server startup.

use std::io::Write;

use anyhow::Context;

use crate::config::{Environment, Settings};
use crate::models::Vehicle;
use crate::server::Server;

pub struct ServeCommandHandler {
    config: Settings,
    environment: Environment,
}

impl ServeCommandHandler {
    pub fn new(config: Settings, environment: Environment) -> Self {
        Self {
            config,
            environment,
        }
    }

    /// Runs the server, or with `dry_run` only reports on the configuration.
    pub async fn execute(self, dry_run: bool) -> anyhow::Result<()> {
        if dry_run {
            self.validate_only(&mut std::io::stdout())
        } else {
            Server::new(self.config, self.environment).run().await
        }
    }

    /// Validates configuration and the seed file without binding anything,
    /// writing a short report to `out`.
    pub fn validate_only(&self, out: &mut impl Write) -> anyhow::Result<()> {
        self.config.validate()?;
        writeln!(out, "✓ Configuration is valid ({} environment)", self.environment)?;
        writeln!(out, "✓ Server would bind to: {}", self.config.server.address())?;
        writeln!(
            out,
            "✓ Vehicles served at: {}",
            self.config.server.resource_path("vehicles")
        )?;

        self.config
            .logger
            .clone()
            .into_logger_config()
            .context("Logger configuration is invalid")?;
        writeln!(out, "✓ Logger configuration is valid")?;

        if let Some(seed_file) = &self.config.storage.seed_file {
            let count = count_seed_vehicles(seed_file)?;
            writeln!(
                out,
                "✓ Seed file {} holds {} vehicle(s)",
                seed_file.display(),
                count
            )?;
        }

        writeln!(
            out,
            "Dry run completed successfully - configuration is ready for deployment"
        )?;
        Ok(())
    }

    pub fn config(&self) -> &Settings {
        &self.config
    }
}

fn count_seed_vehicles(path: &std::path::Path) -> anyhow::Result<usize> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    let vehicles: Vec<Vehicle> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse seed file {}", path.display()))?;
    Ok(vehicles.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn dry_run(config: Settings) -> (anyhow::Result<()>, String) {
        let handler = ServeCommandHandler::new(config, Environment::Test);
        let mut out = Vec::new();
        let result = handler.validate_only(&mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_dry_run_reports_address_and_path() {
        let mut config = Settings::default();
        config.server.base_path = "/api".to_string();

        let (result, report) = dry_run(config);

        assert!(result.is_ok());
        assert!(report.contains("test environment"));
        assert!(report.contains("127.0.0.1:8080"));
        assert!(report.contains("/api/vehicles"));
    }

    #[test]
    fn test_dry_run_invalid_config() {
        let mut config = Settings::default();
        config.server.port = 0;

        let (result, _) = dry_run(config);
        assert!(result.is_err());
    }

    #[test]
    fn test_dry_run_checks_seed_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let good = dir.path().join("good.json");
        let bad = dir.path().join("bad.json");
        std::fs::write(&good, r#"[{"brand": "Seat"}, {"brand": "Opel"}]"#).unwrap();
        std::fs::write(&bad, r#"{"brand": "Seat"}"#).unwrap();

        let mut config = Settings::default();
        config.storage.seed_file = Some(good);
        let (result, report) = dry_run(config.clone());
        assert!(result.is_ok());
        assert!(report.contains("2 vehicle(s)"));

        config.storage.seed_file = Some(bad);
        let (result, _) = dry_run(config);
        assert!(result.is_err());
    }
}
