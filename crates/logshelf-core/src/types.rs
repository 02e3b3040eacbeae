//! Core types for logshelf

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// One decoded log record.
///
/// Records carry whatever object the structured logger emitted; no schema
/// is enforced, so they stay open JSON values.
pub type LogRecord = serde_json::Value;

/// Regex pattern for valid log file names: must start with an alphanumeric
/// character, then alphanumerics, dots, underscores, and hyphens
static FILE_NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9._-]*$").expect("Invalid file name regex")
});

/// Validate a log file name to prevent path traversal attacks.
///
/// Rejects empty names, absolute paths, path separators, and dot-leading
/// names (which covers `.` and `..`).
pub fn validate_file_name(name: &str) -> bool {
    !name.is_empty() && FILE_NAME_REGEX.is_match(name)
}

/// One log file in a catalog listing: its name paired with the URL it can
/// be fetched from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub filename: String,
    pub url: String,
}

impl LogEntry {
    /// Build an entry for `filename`, deriving its access URL from the
    /// request host and the configured base URL
    pub fn new(filename: impl Into<String>, host: &str, base_url: &str) -> Self {
        let filename = filename.into();
        let url = file_url(host, base_url, &filename);
        Self { filename, url }
    }
}

/// Compose the access URL of a log file: `http://<host><base_url>/file/<name>`
pub fn file_url(host: &str, base_url: &str, filename: &str) -> String {
    format!("http://{}{}/file/{}", host, base_url, filename)
}
