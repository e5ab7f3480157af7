//! File logging.
//!
//! The terminal belongs to the editor, so log output only ever goes to a
//! file, and only when one is asked for. The filter comes from `SLASHPAD_LOG`
//! (for example `SLASHPAD_LOG=slashpad=debug`) and defaults to `info`.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "SLASHPAD_LOG";

/// Builds the log filter from [`LOG_ENV`], falling back to `info`.
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs a subscriber writing to `log_file`.
///
/// Returns the writer guard; logs are flushed when it drops, so keep it
/// alive for the whole run. Returns `None` if a global subscriber is
/// already installed.
///
/// # Errors
///
/// Returns an error if `log_file` has no file name or its directory cannot
/// be created.
pub fn init(log_file: &Path) -> Result<Option<WorkerGuard>> {
    let file_name = log_file
        .file_name()
        .with_context(|| format!("Log path has no file name: {}", log_file.display()))?;
    let dir = match log_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .try_init();

    // Another subscriber won; dropping the guard shuts our writer down.
    Ok(installed.ok().map(|()| guard))
}
