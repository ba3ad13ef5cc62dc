//! Colored console logging with a leveled API.
//!
//! Messages are printed with a timestamp and a colored level tag, and mirrored
//! to the `log` facade so host applications can capture them with any logger.

use chrono::Utc;
use colored::Colorize;

/// Log levels used by the converter client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Logs a message at the given level.
pub fn log(level: LogLevel, message: &str) {
    let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ");
    let tag = match level {
        LogLevel::Info => "INFO".blue(),
        LogLevel::Success => "OK".green(),
        LogLevel::Warning => "WARN".yellow(),
        LogLevel::Error => "ERROR".red(),
    };
    println!("{timestamp} [{tag}] {message}");

    match level {
        LogLevel::Info | LogLevel::Success => log::info!("{message}"),
        LogLevel::Warning => log::warn!("{message}"),
        LogLevel::Error => log::error!("{message}"),
    }
}
