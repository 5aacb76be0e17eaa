//! Logger Module
//!
//! A logging system based on `tracing-subscriber` with support for:
//! - Console output with color control
//! - File output in Full, Compact or JSON format

pub mod config;

pub use config::*;

use std::fs::{File, OpenOptions};
use std::io::IsTerminal;
use std::sync::Arc;

use tracing::Subscriber;
use tracing_subscriber::{
    EnvFilter, Layer, fmt, layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt,
};

/// Initialize the global subscriber with the given configuration
pub fn init_logger(config: LoggerConfig) -> anyhow::Result<()> {
    config.validate()?;

    let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

    // File layer goes first so the console layer's ANSI setting
    // cannot leak escape codes into span fields written to the file.
    let file_layer = if config.file.enabled {
        Some(file_layer(&config.file)?)
    } else {
        None
    };

    let console_layer = config.console.enabled.then(|| {
        let use_ansi = config.console.colored && std::io::stdout().is_terminal();
        fmt::layer()
            .with_ansi(use_ansi)
            .with_target(true)
            .with_level(true)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()?;

    Ok(())
}

fn file_layer<S>(config: &FileConfig) -> anyhow::Result<Box<dyn Layer<S> + Send + Sync>>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let writer = Arc::new(open_log_file(config)?);
    let layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(writer);

    let layer = match config.format {
        LogFormat::Full => layer.boxed(),
        LogFormat::Compact => layer.compact().boxed(),
        LogFormat::Json => layer.json().boxed(),
    };

    Ok(layer)
}

fn open_log_file(config: &FileConfig) -> std::io::Result<File> {
    if let Some(parent) = config.path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    OpenOptions::new()
        .create(true)
        .write(true)
        .append(config.append)
        .truncate(!config.append)
        .open(&config.path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_log_file_creates_parent_directories() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config = FileConfig {
            enabled: true,
            path: temp_dir.path().join("nested/dir/app.log"),
            append: true,
            format: LogFormat::Json,
        };

        open_log_file(&config).expect("Should open log file");
        assert!(config.path.exists());
    }

    #[test]
    fn test_open_log_file_truncates_when_not_appending() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("app.log");
        std::fs::write(&path, "previous run\n").unwrap();

        let config = FileConfig {
            enabled: true,
            path: path.clone(),
            append: false,
            format: LogFormat::Full,
        };
        open_log_file(&config).expect("Should open log file");

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_open_log_file_keeps_content_when_appending() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("app.log");
        std::fs::write(&path, "previous run\n").unwrap();

        let config = FileConfig {
            enabled: true,
            path: path.clone(),
            append: true,
            format: LogFormat::Compact,
        };
        open_log_file(&config).expect("Should open log file");

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "previous run\n");
    }

    #[test]
    fn test_init_logger_rejects_invalid_config() {
        let config = LoggerConfig {
            level: "loud".to_string(),
            ..Default::default()
        };
        assert!(init_logger(config).is_err());
    }
}
