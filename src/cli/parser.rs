//! CLI argument parsing with clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::Environment;

/// REST API for the RentExpress vehicle fleet
#[derive(Parser, Debug)]
#[command(name = "rentexpress-api")]
#[command(about = "REST API for the RentExpress vehicle fleet")]
#[command(long_about = "
rentexpress-api serves the RentExpress /vehicles REST resource backed by an
in-memory vehicle store, with layered configuration and an OpenAPI description.

EXAMPLES:
    # Start the server with default configuration
    rentexpress-api serve

    # Bind to all interfaces on port 9000
    rentexpress-api serve --host 0.0.0.0 --port 9000

    # Use a single configuration file
    rentexpress-api --config /etc/rentexpress/api.toml serve

    # Load the production overlay with verbose logging
    rentexpress-api --env prod --verbose serve

    # Check configuration without starting the server
    rentexpress-api serve --dry-run

    # Write the OpenAPI document to a file
    rentexpress-api openapi --output openapi.json
")]
#[command(version = crate::clap_long_version())]
pub struct Cli {
    /// Subcommand to execute; `serve` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    ///
    /// Load this TOML file instead of the layered files from the
    /// configuration directory. The file must exist and be readable.
    #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Override environment detection
    ///
    /// Selects the `{environment}.toml` overlay instead of RENTEXPRESS_APP_ENV.
    /// Available values: development (dev), test, staging (stage), production (prod)
    #[arg(short, long, value_name = "ENV")]
    pub env: Option<Environment>,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start the web server (default)
    ///
    /// Examples:
    ///   rentexpress-api serve                            # Start with defaults
    ///   rentexpress-api serve --host 0.0.0.0 --port 80   # All interfaces, port 80
    ///   rentexpress-api serve --dry-run                  # Validate config only
    Serve {
        /// Host address to bind to
        #[arg(long, value_name = "ADDRESS", value_parser = super::validation::validate_host_address)]
        host: Option<String>,

        /// Port number to listen on (1-65535)
        #[arg(short, long, value_name = "PORT", value_parser = super::validation::validate_port)]
        port: Option<u16>,

        /// Log level override; wins over --verbose and --quiet
        #[arg(long, value_enum)]
        log_level: Option<LogLevel>,

        /// Validate configuration and exit
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the OpenAPI document
    ///
    /// Examples:
    ///   rentexpress-api openapi                         # Print to stdout
    ///   rentexpress-api openapi --output openapi.json   # Write to a file
    Openapi {
        /// Write the document to FILE instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Serve {
            host: None,
            port: None,
            log_level: None,
            dry_run: false,
        }
    }
}

/// Log level options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    #[value(name = "error")]
    Error,
    #[value(name = "warn", alias = "warning")]
    Warn,
    #[value(name = "info")]
    Info,
    #[value(name = "debug")]
    Debug,
    #[value(name = "trace")]
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl Cli {
    /// The command to run, defaulting to `serve`
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or_default()
    }
}
