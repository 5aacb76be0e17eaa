//! Configuration merger for CLI arguments and config files
//!
//! CLI arguments override values loaded from files and environment variables.

use std::path::Path;

use super::parser::{Cli, Commands};
use crate::config::{ConfigError, ConfigLoader, Environment, Settings};

/// Applies CLI overrides on top of loaded configuration.
pub struct ConfigurationMerger {
    base_config: Settings,
    environment: Environment,
}

impl ConfigurationMerger {
    pub fn new(base_config: Settings, environment: Environment) -> Self {
        Self {
            base_config,
            environment,
        }
    }

    /// Loads the base configuration the way the CLI asks for it.
    ///
    /// `config_path` selects single-file loading, otherwise the loader reads
    /// its usual environment variables. `environment` overrides
    /// `RENTEXPRESS_APP_ENV`.
    ///
    /// # Errors
    /// Returns ConfigError if configuration loading or validation fails
    pub fn load(
        config_path: Option<&Path>,
        environment: Option<Environment>,
    ) -> Result<Self, ConfigError> {
        let loader = match config_path {
            Some(path) => ConfigLoader::from_file(path),
            None => ConfigLoader::new()?,
        };
        let loader = match environment {
            Some(environment) => loader.with_environment(environment),
            None => loader,
        };

        let environment = loader.environment();
        Ok(Self::new(loader.load()?, environment))
    }

    /// Settings with CLI overrides applied and re-validated.
    ///
    /// Precedence for the log level: `--log-level`, then `--verbose` /
    /// `--quiet`, then configuration.
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        if cli.verbose {
            config.logger.level = "debug".to_string();
        } else if cli.quiet {
            config.logger.level = "error".to_string();
        }

        if let Some(Commands::Serve {
            host,
            port,
            log_level,
            dry_run: _,
        }) = &cli.command
        {
            if let Some(host) = host {
                config.server.host = host.clone();
            }
            if let Some(port) = port {
                config.server.port = *port;
            }
            if let Some(level) = log_level {
                config.logger.level = level.as_str().to_string();
            }
        }

        config.validate()?;

        Ok(config)
    }

    pub fn config(&self) -> &Settings {
        &self.base_config
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }
}
