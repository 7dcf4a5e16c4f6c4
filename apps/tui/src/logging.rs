use color_eyre::{eyre::eyre, Result};
use petrodash::config::get_log_dir;
use std::io;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE: &str = "petrodash.log";

/// Installs the global subscriber. The TUI owns the terminal, so interactive
/// sessions log to a file under `LOG_DIR`; headless runs log to stderr.
///
/// Keep the returned guard alive until exit or buffered lines are lost.
pub fn init_logging(debug: bool, interactive: bool) -> Result<Option<WorkerGuard>> {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if !interactive {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .try_init();
        return Ok(None);
    }

    let dir = get_log_dir();
    std::fs::create_dir_all(&dir)
        .map_err(|e| eyre!("Failed to create log directory {}: {e}", dir.display()))?;
    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| eyre!("Failed to install logger: {e}"))?;

    Ok(Some(guard))
}
