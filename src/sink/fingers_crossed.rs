//! Trigger-buffered sink
//!
//! Holds records in memory until one arrives at or above the trigger
//! severity. At that point the buffered context and the triggering record
//! are handed to the inner sink as one batch, and every later record passes
//! straight through. A sink dropped before it triggers discards its buffer.

use std::collections::VecDeque;

use crate::error::ChangeLogResult;

use super::record::LogRecord;
use super::severity::Severity;
use super::Sink;

/// Buffers records until the trigger severity is reached
#[derive(Debug)]
pub struct FingersCrossedSink<S: Sink> {
    inner: S,
    trigger: Severity,
    /// Maximum buffered records, 0 for no limit
    buffer_limit: usize,
    buffer: VecDeque<LogRecord>,
    activated: bool,
}

impl<S: Sink> FingersCrossedSink<S> {
    /// Wrap `inner`, flushing once a record at or above `trigger` arrives
    pub fn new(inner: S, trigger: Severity) -> Self {
        Self {
            inner,
            trigger,
            buffer_limit: 0,
            buffer: VecDeque::new(),
            activated: false,
        }
    }

    /// Bound the buffer; the oldest record is dropped when it overflows
    pub fn with_buffer_limit(mut self, limit: usize) -> Self {
        self.buffer_limit = limit;
        self
    }

    /// Whether a triggering record has been seen
    pub fn is_activated(&self) -> bool {
        self.activated
    }

    /// Number of records held back waiting for a trigger
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// Get the wrapped sink
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: Sink> Sink for FingersCrossedSink<S> {
    fn accepts(&self, severity: Severity) -> bool {
        self.inner.accepts(severity)
    }

    fn write(&mut self, record: LogRecord) -> ChangeLogResult<()> {
        if self.activated {
            return self.inner.write(record);
        }

        let triggers = record.severity >= self.trigger;
        self.buffer.push_back(record);
        if self.buffer_limit > 0 && self.buffer.len() > self.buffer_limit {
            self.buffer.pop_front();
        }

        if triggers {
            self.activated = true;
            let batch: Vec<LogRecord> = self.buffer.drain(..).collect();
            self.inner.write_batch(batch)?;
        }

        Ok(())
    }
}
