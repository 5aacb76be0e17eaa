//! Layered configuration loading
//!
//! [`ConfigLoader`] merges TOML files and `RENTEXPRESS_*` environment
//! variables into a validated [`Settings`] value.

use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};

use crate::config::environment::Environment as AppEnvironment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Directory holding `default.toml` and its overlays
const CONFIG_DIR_ENV: &str = "RENTEXPRESS_CONFIG_DIR";

/// Single configuration file, bypassing the layered lookup
const CONFIG_FILE_ENV: &str = "RENTEXPRESS_CONFIG_FILE";

const DEFAULT_CONFIG_DIR: &str = "config";

const ENV_PREFIX: &str = "RENTEXPRESS";

/// `RENTEXPRESS_SERVER__PORT` maps to `server.port`
const ENV_SEPARATOR: &str = "__";

/// Where the file layers come from
#[derive(Debug, Clone, PartialEq, Eq)]
enum Source {
    /// `default.toml` (required), `{environment}.toml`, `local.toml`
    Layered(PathBuf),
    /// Exactly one file
    Single(PathBuf),
}

/// Loads [`Settings`] from configuration files and environment variables.
///
/// Sources, lowest priority first:
/// 1. `default.toml`, `{environment}.toml` and `local.toml` from the
///    configuration directory, or a single file when one is given
/// 2. `RENTEXPRESS_*` environment variables
#[derive(Debug)]
pub struct ConfigLoader {
    source: Source,
    environment: AppEnvironment,
}

impl ConfigLoader {
    /// Build a loader from `RENTEXPRESS_CONFIG_DIR`, `RENTEXPRESS_CONFIG_FILE`
    /// and `RENTEXPRESS_APP_ENV`.
    ///
    /// # Errors
    ///
    /// Fails when both the directory and the file variable are set.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = std::env::var(CONFIG_DIR_ENV).ok();
        let config_file = std::env::var(CONFIG_FILE_ENV).ok();

        let source = match (config_dir, config_file) {
            (Some(_), Some(_)) => {
                return Err(ConfigError::mutual_exclusivity(format!(
                    "{CONFIG_DIR_ENV} and {CONFIG_FILE_ENV} cannot both be set. \
                     Use {CONFIG_DIR_ENV} for layered configuration or \
                     {CONFIG_FILE_ENV} for a single configuration file."
                )));
            }
            (None, Some(file)) => Source::Single(PathBuf::from(file)),
            (Some(dir), None) => Source::Layered(PathBuf::from(dir)),
            (None, None) => Source::Layered(PathBuf::from(DEFAULT_CONFIG_DIR)),
        };

        Ok(Self {
            source,
            environment: AppEnvironment::from_env(),
        })
    }

    /// Load from one explicit file, as selected by `--config`
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            source: Source::Single(path.into()),
            environment: AppEnvironment::from_env(),
        }
    }

    /// Layered loading rooted at `dir`
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            source: Source::Layered(dir.into()),
            environment: AppEnvironment::from_env(),
        }
    }

    /// Override the environment overlay, as selected by `--env`
    pub fn with_environment(mut self, environment: AppEnvironment) -> Self {
        self.environment = environment;
        self
    }

    pub fn environment(&self) -> AppEnvironment {
        self.environment
    }

    /// Configuration directory, when loading in layered mode
    pub fn config_dir(&self) -> Option<&Path> {
        match &self.source {
            Source::Layered(dir) => Some(dir),
            Source::Single(_) => None,
        }
    }

    /// Explicit configuration file, when loading in single-file mode
    pub fn config_file(&self) -> Option<&Path> {
        match &self.source {
            Source::Single(file) => Some(file),
            Source::Layered(_) => None,
        }
    }

    /// Load and validate settings from every source
    ///
    /// # Errors
    ///
    /// Returns an error if a required file is missing, parsing fails, or the
    /// merged settings do not validate.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let settings: Settings = self.build_config()?.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {}", e))
        })?;

        settings.validate()?;

        Ok(settings)
    }

    fn build_config(&self) -> Result<Config, ConfigError> {
        let builder = Config::builder();

        let builder = match &self.source {
            Source::Single(file) => add_file_source(builder, file, true)?,
            Source::Layered(dir) => {
                let builder = add_file_source(builder, &dir.join("default.toml"), true)?;
                let builder =
                    add_file_source(builder, &dir.join(self.environment.config_file_name()), false)?;
                add_file_source(builder, &dir.join("local.toml"), false)?
            }
        };

        add_env_source(builder).build().map_err(ConfigError::from)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| Self::from_dir(DEFAULT_CONFIG_DIR))
    }
}

fn add_file_source(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
    required: bool,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if required && !path.exists() {
        return Err(ConfigError::file_not_found(format!(
            "Required configuration file not found: {}",
            path.display()
        )));
    }

    let name = path.to_str().ok_or_else(|| {
        ConfigError::ParseError(format!("Non UTF-8 configuration path: {}", path.display()))
    })?;

    Ok(builder.add_source(File::new(name, FileFormat::Toml).required(required)))
}

fn add_env_source(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator(ENV_SEPARATOR)
            .ignore_empty(true)
            .try_parsing(true),
    )
}
