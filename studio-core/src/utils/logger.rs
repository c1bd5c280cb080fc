//! Logging Infrastructure
//!
//! The terminal belongs to the UI, so the interactive binary logs to a
//! daily rolling file; without a directory, output goes to stderr.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize the logger with optional file output
///
/// `RUST_LOG` takes precedence over `log_level`. Calling this twice is
/// harmless; the first subscriber stays installed.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&Path>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    // Add file output if log_dir is provided and usable
    if let Some(dir) = log_dir
        && std::fs::create_dir_all(dir).is_ok()
    {
        let file_appender = tracing_appender::rolling::daily(dir, "studio.log");
        let _ = subscriber
            .with_ansi(false)
            .with_writer(file_appender)
            .try_init();
        return;
    }

    let _ = subscriber.with_writer(std::io::stderr).try_init();
}
