//! Line-delimited JSON log file parsing

use logshelf_core::{Error, LogRecord, Result};
use std::path::Path;
use tracing::debug;

/// Parse a log file into its ordered sequence of records.
///
/// The whole file is read into memory, split on line feeds, and each line
/// decoded independently as one JSON value. A single trailing empty segment
/// (from the terminating newline) is dropped. Strict: one undecodable line
/// fails the whole call, no partial results.
pub fn parse_file(path: &Path) -> Result<Vec<LogRecord>> {
    let raw = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
        _ => Error::ReadError {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let mut lines: Vec<&str> = raw.split('\n').collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }

    let mut records = Vec::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        let record = serde_json::from_str(line).map_err(|source| Error::MalformedRecord {
            path: path.to_path_buf(),
            line: i + 1,
            source,
        })?;
        records.push(record);
    }

    debug!("Parsed {} records from {}", records.len(), path.display());
    Ok(records)
}
