//! File logging. The terminal belongs to the interface, so logs go to
//! `<data_dir>/daybook.log`.

use std::path::Path;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "daybook.log";
const LOG_ENV: &str = "DAYBOOK_LOG";
const DEFAULT_LEVEL: &str = "info";

/// Install the global subscriber. Keep the guard alive until exit so
/// buffered lines are flushed.
pub fn init(data_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(data_dir)?;

    let appender = tracing_appender::rolling::never(data_dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV)
                .or_else(|_| EnvFilter::try_new(DEFAULT_LEVEL))
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL)),
        )
        .with_writer(writer)
        .with_ansi(false)
        .try_init();

    Ok(guard)
}
