//! logshelf Store - Log file directory management, catalog, and parsing

mod catalog;
mod parser;
mod session;

pub use catalog::{entries, list};
pub use parser::parse_file;
pub use session::LogSession;

use logshelf_core::{constants, validate_file_name, Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Ensure the log directory exists, creating it (single level) if absent.
///
/// Returns whether the directory already existed. Idempotent; fails if the
/// parent path is missing.
pub fn ensure_dir(dir: &Path) -> Result<bool> {
    if dir.exists() {
        debug!("Log directory {} exists", dir.display());
        return Ok(true);
    }

    debug!("Creating log directory {}", dir.display());
    std::fs::create_dir(dir).map_err(|source| Error::DirectoryCreateFailed {
        path: dir.to_path_buf(),
        source,
    })?;
    Ok(false)
}

/// Compose the path of a log file inside the log directory.
///
/// Pure path composition; does not touch the filesystem.
pub fn file_path(dir: &Path, file_name: &str) -> PathBuf {
    constants::log_file_path(dir, file_name)
}

/// Compose the path of a request-supplied log file name, rejecting names
/// that would escape the log directory
pub fn checked_file_path(dir: &Path, file_name: &str) -> Result<PathBuf> {
    if !validate_file_name(file_name) {
        return Err(Error::invalid_file_name(file_name));
    }
    Ok(file_path(dir, file_name))
}
