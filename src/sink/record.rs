//! Log record data structure and its line format

use chrono::{DateTime, FixedOffset};
use serde_json::{Map, Value};

use super::severity::Severity;

/// Timestamp layout of a formatted line, microsecond precision with offset
pub const LINE_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f%:z";

/// A single log record
///
/// Built once, rendered once by the sink that accepts it.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    /// When the record was produced
    pub datetime: DateTime<FixedOffset>,

    /// Logger channel name shown in the line
    pub channel: String,

    /// Severity of the record
    pub severity: Severity,

    /// Human-readable message, may span several lines
    pub message: String,

    /// Structured context appended as JSON, omitted when empty
    pub context: Map<String, Value>,
}

impl LogRecord {
    /// Create a record with an empty context
    pub fn new(
        datetime: DateTime<FixedOffset>,
        channel: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            datetime,
            channel: channel.into(),
            severity,
            message: message.into(),
            context: Map::new(),
        }
    }

    /// Attach one context field
    pub fn with_context(mut self, key: impl Into<String>, value: Value) -> Self {
        self.context.insert(key.into(), value);
        self
    }

    /// Format the record as one output line, terminated by `\n`
    ///
    /// `[<datetime>] <channel>.<LEVEL>: <message> <context>`; line breaks
    /// inside the message are kept as-is.
    pub fn format_line(&self) -> String {
        let mut output = format!(
            "[{}] {}.{}: {}",
            self.datetime.format(LINE_DATETIME_FORMAT),
            self.channel,
            self.severity,
            self.message
        );

        if !self.context.is_empty() {
            // A Map of Values always serializes
            let context = serde_json::to_string(&self.context).unwrap_or_default();
            output.push(' ');
            output.push_str(&context);
        }

        output.push('\n');
        output
    }
}
