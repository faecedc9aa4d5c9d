//! Internal event log, kept as JSON lines next to the record file.

use crate::errors::AppResult;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Log file used for a given record file: same stem, `.log` extension.
pub fn log_file_for(record_file: &Path) -> PathBuf {
    let candidate = record_file.with_extension("log");
    if candidate == record_file {
        record_file.with_extension("events.log")
    } else {
        candidate
    }
}

/// Append one line to the event log.
pub fn ttlog(log_file: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let entry = LogEntry {
        date: Local::now().to_rfc3339(),
        operation: operation.to_string(),
        target: target.to_string(),
        message: message.to_string(),
    };

    if let Some(parent) = log_file.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)?;
    writeln!(file, "{}", serde_json::to_string(&entry)?)?;

    Ok(())
}

/// Read every entry of the log. A missing file yields no entries; lines that
/// do not parse are skipped.
pub fn read_entries(log_file: &Path) -> AppResult<Vec<LogEntry>> {
    if !log_file.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(log_file)?;
    Ok(content
        .lines()
        .filter(|l| !l.trim().is_empty())
        .filter_map(|l| serde_json::from_str(l).ok())
        .collect())
}
