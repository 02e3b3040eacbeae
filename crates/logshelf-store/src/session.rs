//! Session state: the log file belonging to the current process run

use chrono::Utc;
use logshelf_core::{constants, file_url, LogEntry};

/// The log file associated with the current process's logger session.
///
/// Created once at startup and never mutated afterward; share it via `Arc`.
#[derive(Debug, Clone)]
pub struct LogSession {
    stamp: i64,
    file_name: String,
}

impl LogSession {
    /// Start a new session, stamping it with the current epoch milliseconds
    pub fn start(suffix: &str) -> Self {
        Self::with_stamp(Utc::now().timestamp_millis(), suffix)
    }

    /// Build a session from an explicit stamp
    pub fn with_stamp(stamp: i64, suffix: &str) -> Self {
        Self {
            stamp,
            file_name: constants::session_file_name(stamp, suffix),
        }
    }

    /// Epoch-millisecond stamp captured when the session started
    pub fn stamp(&self) -> i64 {
        self.stamp
    }

    /// Name of this session's log file, `<stamp>.<suffix>`
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Access URL of this session's log file
    pub fn url(&self, host: &str, base_url: &str) -> String {
        file_url(host, base_url, &self.file_name)
    }

    /// Catalog entry for this session's log file
    pub fn entry(&self, host: &str, base_url: &str) -> LogEntry {
        LogEntry::new(self.file_name.clone(), host, base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_from_stamp() {
        let session = LogSession::with_stamp(1690000000000, "log");
        assert_eq!(session.stamp(), 1690000000000);
        assert_eq!(session.file_name(), "1690000000000.log");
    }

    #[test]
    fn test_start_uses_suffix() {
        let session = LogSession::start("log");
        assert!(session.file_name().ends_with(".log"));
        assert_eq!(
            session.file_name(),
            format!("{}.log", session.stamp())
        );
    }

    #[test]
    fn test_url() {
        let session = LogSession::with_stamp(1690000000000, "log");
        assert_eq!(
            session.url("localhost:3000", "/logs"),
            "http://localhost:3000/logs/file/1690000000000.log"
        );
    }
}
