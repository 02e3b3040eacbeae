//! Constants and default values for logshelf

use std::path::{Path, PathBuf};

/// Default log directory name
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Default log file suffix
pub const DEFAULT_SUFFIX: &str = "log";

/// Default service name
pub const DEFAULT_NAME: &str = "logshelf";

/// Default bind address for the web server
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Default base URL the log routes are mounted under
pub const DEFAULT_BASE_URL: &str = "/logs";

/// Default config file names to search for (in priority order)
pub const CONFIG_FILES: &[&str] = &[
    "logshelf.config.toml",
    "logshelf.toml",
    "logshelf.config.yaml",
    "logshelf.config.yml",
    "logshelf.yaml",
    "logshelf.yml",
    "logshelf.config.json",
    "logshelf.json",
];

/// Compose the path of a log file inside a log directory.
///
/// Pure path composition, no filesystem access.
pub fn log_file_path(dir: &Path, file_name: &str) -> PathBuf {
    dir.join(file_name)
}

/// Compose a session file name from an epoch-millisecond stamp and suffix
pub fn session_file_name(stamp_millis: i64, suffix: &str) -> String {
    format!("{}.{}", stamp_millis, suffix)
}
