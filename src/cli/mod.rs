//! CLI module for rentexpress-api
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing with clap
//! - Configuration merging (CLI args + config files)
//! - Command handlers for serve and openapi

pub mod config_merger;
pub mod executor;
pub mod handlers;
pub mod parser;
pub mod validation;

pub use config_merger::ConfigurationMerger;
pub use executor::execute_command;
pub use parser::{Cli, Commands, LogLevel};

use anyhow::Context;

use crate::config::{Environment, Settings};
use crate::logger::init_logger;

/// Loads configuration as the CLI selects it and applies CLI overrides.
///
/// # Errors
/// Returns error if configuration loading, merging, or validation fails
pub fn load_and_merge_config(cli: &Cli) -> anyhow::Result<(Settings, Environment)> {
    let merger = ConfigurationMerger::load(cli.config.as_deref(), cli.env)
        .context("Failed to load configuration")?;

    let settings = merger
        .merge_cli_args(cli)
        .context("Invalid configuration after applying command-line overrides")?;

    Ok((settings, merger.environment()))
}

/// Initialize the global logger from settings
pub fn init_logger_from_settings(settings: &Settings) -> anyhow::Result<()> {
    let logger_config = settings
        .logger
        .clone()
        .into_logger_config()
        .context("Invalid logger configuration")?;

    init_logger(logger_config).context("Failed to initialize logger")
}
