//! Serve command implementation

use anyhow::Result;
use logshelf_core::Config;
use logshelf_store::LogSession;
use std::sync::Arc;
use tracing::{debug, info};

use crate::cli::ServeArgs;
use crate::logging;

pub async fn execute(mut config: Config, args: ServeArgs, verbose: u8) -> Result<()> {
    if let Some(bind) = args.bind {
        config.server.bind = bind;
    }
    if let Some(base_url) = args.base_url {
        config.server.base_url = base_url;
    }
    if let Some(name) = args.name {
        config.name = name;
    }
    if let Some(suffix) = args.suffix {
        config.suffix = suffix;
    }
    if verbose > 0 {
        config.verbose = true;
    }
    config.validate()?;

    // The directory must exist before the logger opens the session file
    let existed = logshelf_store::ensure_dir(&config.directory)?;
    let session = LogSession::start(&config.suffix);

    let _guard = logging::init(&config, &session)?;

    info!(name = %config.name, "Logger initialized");
    if !existed {
        info!("Created log directory {}", config.directory.display());
    }
    debug!("dir         = {}", config.directory.display());
    debug!("suffix      = {}", config.suffix);
    debug!("session log = {}", session.file_name());

    let config = Arc::new(config);
    let session = Arc::new(session);

    // Set up signal handlers
    let mut sigterm = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())?;
    let mut sigint = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::interrupt())?;

    tokio::select! {
        result = logshelf_web::start_server(config, session) => {
            result?;
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down...");
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down...");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
