//! Table and JSON output formatting for the CLI

use chrono::{DateTime, Local};
use colored::Colorize;
use logshelf_core::LogRecord;
use serde::Serialize;
use std::fs::Metadata;
use std::sync::atomic::{AtomicBool, Ordering};
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

/// Global flag for JSON output mode
static JSON_MODE: AtomicBool = AtomicBool::new(false);

/// Enable or disable JSON output mode
pub fn set_json_mode(enabled: bool) {
    JSON_MODE.store(enabled, Ordering::SeqCst);
}

/// Check if JSON output mode is enabled
pub fn is_json_mode() -> bool {
    JSON_MODE.load(Ordering::SeqCst)
}

#[derive(Tabled)]
pub struct FileRow {
    #[tabled(rename = "file")]
    pub file: String,
    #[tabled(rename = "size")]
    pub size: String,
    #[tabled(rename = "modified")]
    pub modified: String,
}

/// JSON-friendly file listing representation
#[derive(Serialize)]
pub struct FileJson {
    pub file: String,
    pub size_bytes: u64,
    pub modified: Option<String>,
}

pub struct FileListing {
    pub file: String,
    pub metadata: Option<Metadata>,
}

impl From<&FileListing> for FileRow {
    fn from(listing: &FileListing) -> Self {
        let (size, modified) = match &listing.metadata {
            Some(meta) => (format_bytes(meta.len()), format_mtime(meta)),
            None => ("-".to_string(), None),
        };
        FileRow {
            file: listing.file.clone(),
            size,
            modified: modified.unwrap_or_else(|| "-".to_string()),
        }
    }
}

impl From<&FileListing> for FileJson {
    fn from(listing: &FileListing) -> Self {
        FileJson {
            file: listing.file.clone(),
            size_bytes: listing.metadata.as_ref().map(|m| m.len()).unwrap_or(0),
            modified: listing.metadata.as_ref().and_then(format_mtime),
        }
    }
}

pub fn print_file_table(files: &[FileListing]) {
    if is_json_mode() {
        let json_files: Vec<FileJson> = files.iter().map(FileJson::from).collect();
        match serde_json::to_string_pretty(&json_files) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error serializing to JSON: {}", e),
        }
        return;
    }

    if files.is_empty() {
        println!("No log files");
        return;
    }

    let rows: Vec<FileRow> = files.iter().map(FileRow::from).collect();

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::single(1)).with(Alignment::right()))
        .to_string();

    println!("{}", table);
}

/// Print parsed log records, one JSON line each
pub fn print_records(records: &[LogRecord]) {
    if is_json_mode() {
        match serde_json::to_string_pretty(records) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error serializing to JSON: {}", e),
        }
        return;
    }

    for record in records {
        println!("{}", record);
    }
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

fn format_mtime(meta: &Metadata) -> Option<String> {
    let modified: DateTime<Local> = meta.modified().ok()?.into();
    Some(modified.format("%Y-%m-%d %H:%M:%S").to_string())
}

fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1}mb", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1}kb", bytes as f64 / KB as f64)
    } else {
        format!("{}b", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512b");
        assert_eq!(format_bytes(2048), "2.0kb");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.0mb");
    }

    #[test]
    fn test_file_row_without_metadata() {
        let listing = FileListing {
            file: "a.log".to_string(),
            metadata: None,
        };
        let row = FileRow::from(&listing);
        assert_eq!(row.size, "-");
        assert_eq!(row.modified, "-");
    }
}
