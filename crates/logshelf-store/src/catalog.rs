//! Catalog of log files present in the storage directory

use logshelf_core::{LogEntry, Result};
use std::path::Path;
use tracing::debug;

/// List the names of all entries in the log directory.
///
/// No type filtering is applied (subdirectories pass through unchanged) and
/// the order is whatever the directory enumeration yields.
pub fn list(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    debug!("Catalog of {}: {} entries", dir.display(), names.len());
    Ok(names)
}

/// List the log directory as catalog entries, each paired with the URL it
/// can be fetched from
pub fn entries(dir: &Path, host: &str, base_url: &str) -> Result<Vec<LogEntry>> {
    let names = list(dir)?;
    Ok(names
        .into_iter()
        .map(|name| LogEntry::new(name, host, base_url))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn test_list_empty_directory() {
        let dir = TempDir::new().unwrap();
        assert!(list(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_entries_pair_each_file_with_its_url() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("a.log")).unwrap();
        File::create(dir.path().join("b.log")).unwrap();

        let mut entries = entries(dir.path(), "localhost:3000", "/logs").unwrap();
        entries.sort_by(|x, y| x.filename.cmp(&y.filename));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].filename, "a.log");
        assert_eq!(entries[0].url, "http://localhost:3000/logs/file/a.log");
        assert_eq!(entries[1].filename, "b.log");
        assert_eq!(entries[1].url, "http://localhost:3000/logs/file/b.log");
    }

    #[test]
    fn test_list_passes_subdirectories_through() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();

        let names = list(dir.path()).unwrap();
        assert_eq!(names, vec!["nested".to_string()]);
    }

    #[test]
    fn test_list_missing_directory() {
        assert!(list(Path::new("/nonexistent/logs")).is_err());
    }
}
