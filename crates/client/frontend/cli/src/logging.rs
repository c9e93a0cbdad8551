//! File-only tracing setup.
//!
//! The terminal is owned by the TUI, so nothing is ever logged to stdout or
//! stderr.
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_FILE: &str = "crictrack.log";

/// Initialize the global subscriber writing to `<log dir>/crictrack.log`.
///
/// `RUST_LOG` overrides the default `info` filter. Returns the log file path.
pub fn setup_logging() -> Result<PathBuf> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    // Leak the guard to keep the file writer alive for the whole process
    std::mem::forget(guard);

    let log_file = log_dir.join(LOG_FILE);
    tracing::info!("Log file: {}", log_file.display());

    Ok(log_file)
}

/// `CRICTRACK_LOG_DIR`, else the platform cache directory.
fn log_directory() -> PathBuf {
    if let Some(dir) = std::env::var_os("CRICTRACK_LOG_DIR") {
        return PathBuf::from(dir);
    }

    directories::ProjectDirs::from("", "", "crictrack")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("crictrack").join("logs"))
}
