//! Logger bootstrap

use logshelf_core::{Config, Result};
use logshelf_store::LogSession;
use std::fs::OpenOptions;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the process-wide logger for the server.
///
/// Events go to stdout in human-readable form and to the session's log file
/// as JSON lines. The log directory must exist before this is called. The
/// returned guard must be held for the life of the process so buffered
/// lines reach the file.
pub fn init(config: &Config, session: &LogSession) -> Result<WorkerGuard> {
    let path = logshelf_store::file_path(&config.directory, session.file_name());
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    let (file_writer, guard) = tracing_appender::non_blocking(file);

    let level = if config.verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "logshelf={level},logshelf_store={level},logshelf_web={level},tower_http={level}"
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(file_writer),
        )
        .init();

    Ok(guard)
}

/// Initialize plain stderr-style logging for the non-server commands
pub fn init_cli(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("logshelf={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}
