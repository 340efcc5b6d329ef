//! Logging setup for processes embedding the client.
//!
//! The client itself only emits through the `log` facade; hosts that do not
//! bring their own logger can call [`initialize`] once at startup.

use crate::error::ConfigError;

use common::ErrorLocation;

use std::io::stdout;
use std::path::Path;
use std::sync::Mutex;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::Color::{Blue, Green, Magenta, Red, Yellow};
use fern::colors::ColoredLevelConfig;
use humantime::format_rfc3339;
use log::{LevelFilter, info, warn};

/// Set once the global logger has been installed.
static LOGGER_INSTALLED: Mutex<bool> = Mutex::new(false);

const LOG_FILE_NAME: &str = "api-client.log";

#[cfg(debug_assertions)]
const LOG_LEVEL: LevelFilter = LevelFilter::Debug;

#[cfg(not(debug_assertions))]
const LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Install a dual (coloured stdout + plain file) logger.
///
/// Safe to call repeatedly: once a logger is installed, later calls log a
/// warning and return `Ok`. A failed attempt can be retried.
///
/// # Errors
///
/// Returns [`ConfigError::LoggerError`] if the log file cannot be created
/// or another logger already owns the global slot.
pub fn initialize(log_dir: &Path) -> Result<(), ConfigError> {
    let mut installed = LOGGER_INSTALLED
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);

    if *installed {
        warn!("Logger already initialized");
        return Ok(());
    }

    install(log_dir)?;
    *installed = true;
    info!("Logger initialized with level: {LOG_LEVEL:?}");
    Ok(())
}

#[track_caller]
fn install(log_dir: &Path) -> Result<(), ConfigError> {
    let log_file_path = log_dir.join(LOG_FILE_NAME);

    let colors = ColoredLevelConfig::new()
        .debug(Blue)
        .info(Green)
        .warn(Yellow)
        .error(Red)
        .trace(Magenta);

    let stdout_dispatch = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{target}]",
                date = format_rfc3339(SystemTime::now()),
                level = colors.color(record.level()),
                target = record.target(),
            ))
        })
        .chain(stdout());

    let log_file = fern::log_file(&log_file_path).map_err(|e| ConfigError::LoggerError {
        location: ErrorLocation::from(std::panic::Location::caller()),
        reason: format!("Failed to create log file {}: {e}", log_file_path.display()),
    })?;

    let file_dispatch = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{target}]",
                date = format_rfc3339(SystemTime::now()),
                level = record.level(),
                target = record.target(),
            ))
        })
        .chain(log_file);

    Dispatch::new()
        .level(LOG_LEVEL)
        .chain(stdout_dispatch)
        .chain(file_dispatch)
        .apply()
        .map_err(|e| ConfigError::LoggerError {
            location: ErrorLocation::from(std::panic::Location::caller()),
            reason: format!("Failed to initialize logger: {e}"),
        })
}
