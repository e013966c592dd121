//! Append-only file sink
//!
//! Writes formatted records to a single log file. The file and its parent
//! directories are created on first write; every write is flushed
//! immediately.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use tracing::debug;

use crate::error::{ChangeLogError, ChangeLogResult};

use super::record::LogRecord;
use super::severity::Severity;
use super::Sink;

/// Appends records at or above a minimum severity to a file
#[derive(Debug, Clone)]
pub struct FileSink {
    /// Path to the log file
    path: PathBuf,
    /// Records below this severity are ignored
    min_severity: Severity,
}

impl FileSink {
    /// Create a sink for `path` that accepts records at or above `min_severity`
    pub fn new(path: impl Into<PathBuf>, min_severity: Severity) -> Self {
        Self {
            path: path.into(),
            min_severity,
        }
    }

    fn append(&self, lines: &str) -> ChangeLogResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ChangeLogError::Io(format!(
                    "Failed to create log directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                ChangeLogError::Io(format!("Failed to open log file {}: {}", self.path.display(), e))
            })?;

        // One write_all per call keeps each line whole in the file
        file.write_all(lines.as_bytes())
            .map_err(|e| ChangeLogError::Io(format!("Failed to write log record: {}", e)))?;

        file.flush()
            .map_err(|e| ChangeLogError::Io(format!("Failed to flush log file: {}", e)))?;

        debug!(path = %self.path.display(), bytes = lines.len(), "appended log records");
        Ok(())
    }
}

impl Sink for FileSink {
    fn accepts(&self, severity: Severity) -> bool {
        severity >= self.min_severity
    }

    fn write(&mut self, record: LogRecord) -> ChangeLogResult<()> {
        if !self.accepts(record.severity) {
            return Ok(());
        }
        self.append(&record.format_line())
    }

    fn write_batch(&mut self, records: Vec<LogRecord>) -> ChangeLogResult<()> {
        let lines: String = records
            .iter()
            .filter(|r| self.accepts(r.severity))
            .map(LogRecord::format_line)
            .collect();

        if lines.is_empty() {
            return Ok(());
        }
        self.append(&lines)
    }
}
