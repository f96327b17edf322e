use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LogSettings;

const DEFAULT_LOG_FILE: &str = "groove.log";

/// Where log lines go: `log.file`, or `groove.log` in the temp directory.
pub fn log_path(settings: &LogSettings) -> PathBuf {
    settings
        .file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_FILE))
}

/// Install the global subscriber. `RUST_LOG` wins over `log.level`.
///
/// The terminal belongs to the UI, so everything is appended to a file.
pub fn init(settings: &LogSettings) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = log_path(settings);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&settings.level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| e as Box<dyn std::error::Error>)?;

    Ok(path)
}
