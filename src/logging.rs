//! Logging infrastructure.
//!
//! Structured logging via `tracing`, written both to the console and to a
//! daily-rotated file under the platform data directory. The default level
//! is `info`; set `RUST_LOG` to override.
//!
//! ```no_run
//! je_audit::logging::init().expect("Failed to initialize logging");
//! tracing::info!("run started");
//! ```

use anyhow::{Context as _, Result};
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

/// Log directory under the platform data dir, e.g.
/// `~/.local/share/je-audit/logs` on Linux.
pub fn get_log_dir() -> Result<PathBuf> {
    let base_dir = dirs::data_dir().context("Failed to determine data directory")?;
    let log_dir = base_dir.join("je-audit").join("logs");

    if !log_dir.exists() {
        std::fs::create_dir_all(&log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;
    }

    Ok(log_dir)
}

/// Initializes the tracing subscriber with a console layer and a
/// daily-rotated file layer. Call once at startup.
pub fn init() -> Result<()> {
    let log_dir = get_log_dir()?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .max_log_files(10)
        .filename_prefix("je-audit")
        .filename_suffix("log")
        .build(&log_dir)
        .context("Failed to create log file appender")?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .context("Failed to create env filter")?;

    let stdout_layer = fmt::layer().with_target(true).with_line_number(true);

    let file_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_ansi(false)
        .with_writer(file_appender);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    tracing::debug!("Logging initialized, log directory: {:?}", log_dir);

    Ok(())
}

/// Path of today's log file.
pub fn get_current_log_path() -> Result<PathBuf> {
    let log_dir = get_log_dir()?;
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    Ok(log_dir.join(format!("je-audit.{today}.log")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_log_dir() {
        let log_dir = get_log_dir().expect("Failed to get log dir");
        assert!(log_dir.ends_with("je-audit/logs") || log_dir.ends_with("je-audit\\logs"));
    }
}
