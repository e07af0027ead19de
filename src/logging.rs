//! Tracing setup.
//!
//! Stdout belongs to the interactive menu, so logs only ever go to a file.

use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{filter::Directive, fmt, prelude::*, EnvFilter};

use crate::{error::RosterError, Result};

const LOG_FILE_NAME: &str = "rugby-roster.log";

/// Directory used when no `--log-file` is given: `<cache dir>/rugby-roster`.
pub fn default_log_dir() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("rugby-roster")
}

/// Split an optional log file override into (directory, file name).
pub fn log_target(custom: Option<&Path>) -> (PathBuf, String) {
    match custom {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."))
                .to_path_buf();
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(LOG_FILE_NAME)
                .to_string();
            (dir, file_name)
        }
        None => (default_log_dir(), LOG_FILE_NAME.to_string()),
    }
}

/// Install a daily-rolling file subscriber.
///
/// `RUST_LOG` is honoured; the crate's own level defaults to `info`, or
/// `debug` when `debug` is set. The returned guard must live until exit so
/// buffered lines are flushed.
pub fn setup_logging(custom: Option<&Path>, debug: bool) -> Result<(PathBuf, WorkerGuard)> {
    let (log_dir, file_name) = log_target(custom);

    std::fs::create_dir_all(&log_dir).map_err(|e| RosterError::LogSetup {
        message: format!("Failed to create log directory: {e}"),
    })?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let level = if debug { "debug" } else { "info" };
    let directive: Directive = format!("rugby_roster={level}")
        .parse()
        .map_err(|e| RosterError::LogSetup {
            message: format!("Invalid log directive: {e}"),
        })?;

    tracing_subscriber::registry()
        .with(
            fmt::Layer::new()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(EnvFilter::from_default_env().add_directive(directive)),
        )
        .try_init()
        .map_err(|e| RosterError::LogSetup {
            message: e.to_string(),
        })?;

    Ok((log_dir.join(file_name), guard))
}
