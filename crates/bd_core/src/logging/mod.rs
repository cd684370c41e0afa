//! Logging infrastructure for Basic Discoverer.
//!
//! This module provides:
//! - The on-screen [`LogBuffer`] and saving it to disk
//! - Integration with the `tracing` ecosystem for diagnostics
//!
//! # Example
//!
//! ```no_run
//! use bd_core::logging::{resolve_save_path, save_log, LogBuffer};
//!
//! let mut log = LogBuffer::new();
//! log.append_line("Discovering 'file:///tmp/a.mp3'");
//!
//! let path = resolve_save_path("a.txt", "").unwrap();
//! save_log(&log, &path).unwrap();
//! ```

mod log_buffer;
mod save;
mod types;

pub use log_buffer::LogBuffer;
pub use save::{downloads_dir_for, resolve_save_path, save_log, SaveError};
pub use types::LogLevel;

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// File name prefix for the rolling diagnostic log.
const LOG_FILE_PREFIX: &str = "basic-discoverer.log";

/// Initialize global tracing subscriber for application-wide logging.
///
/// This sets up a subscriber that:
/// - Respects RUST_LOG environment variable
/// - Falls back to the provided default level
/// - Outputs to stderr with timestamps
///
/// Should be called once at application startup.
pub fn init_tracing(default_level: LogLevel) {
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(false))
        .with(env_filter(default_level))
        .try_init();
}

/// Initialize tracing with stderr output plus a daily log file in `logs_dir`.
///
/// The returned guard flushes the file writer when dropped; keep it alive
/// for the lifetime of the application. Falls back to stderr only (and
/// returns `None`) if the directory cannot be created.
pub fn init_tracing_with_file(default_level: LogLevel, logs_dir: &Path) -> Option<WorkerGuard> {
    if let Err(e) = std::fs::create_dir_all(logs_dir) {
        init_tracing(default_level);
        tracing::warn!("Cannot create logs folder {}: {}", logs_dir.display(), e);
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(false))
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(file_writer),
        )
        .with(env_filter(default_level))
        .try_init();

    Some(guard)
}

fn env_filter(default_level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_to_filter_str(default_level)))
}

/// Convert LogLevel to filter string.
fn level_to_filter_str(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Trace => "trace",
        LogLevel::Debug => "debug",
        LogLevel::Info => "info",
        LogLevel::Warn => "warn",
        LogLevel::Error => "error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_to_filter_works() {
        assert_eq!(level_to_filter_str(LogLevel::Debug), "debug");
        assert_eq!(level_to_filter_str(LogLevel::Info), "info");
    }
}
