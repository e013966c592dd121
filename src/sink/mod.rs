//! Log sinks
//!
//! A sink accepts [`LogRecord`]s and decides where and when they reach
//! durable storage.
//!
//! - `FileSink`: appends formatted lines to one file, filtered by a minimum
//!   severity.
//! - `FingersCrossedSink`: buffers records in memory and only forwards them
//!   once a record at or above its trigger severity arrives.
//!
//! The change logger and the exception boundary both write through an
//! [`EventSink`], a file sink wrapped in a trigger buffer.

mod file;
mod fingers_crossed;
mod record;
mod severity;

use std::path::PathBuf;

use crate::error::ChangeLogResult;

pub use file::FileSink;
pub use fingers_crossed::FingersCrossedSink;
pub use record::{LogRecord, LINE_DATETIME_FORMAT};
pub use severity::Severity;

/// Destination for log records
pub trait Sink {
    /// Whether a record of `severity` would be written
    fn accepts(&self, severity: Severity) -> bool;

    /// Accept one record
    fn write(&mut self, record: LogRecord) -> ChangeLogResult<()>;

    /// Accept several records at once
    fn write_batch(&mut self, records: Vec<LogRecord>) -> ChangeLogResult<()> {
        for record in records {
            self.write(record)?;
        }
        Ok(())
    }
}

/// The sink used for every log file this crate writes
pub type EventSink = FingersCrossedSink<FileSink>;

/// Open a sink on `path` writing records at or above `min`
///
/// Nothing reaches the file until a record at or above `trigger` arrives.
pub fn open_event_sink(
    path: impl Into<PathBuf>,
    min: Severity,
    trigger: Severity,
    buffer_limit: usize,
) -> EventSink {
    FingersCrossedSink::new(FileSink::new(path, min), trigger).with_buffer_limit(buffer_limit)
}
