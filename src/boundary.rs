//! Exception boundary for request handling
//!
//! Wraps one unit of request handling. A failure escaping it, whether an
//! `Err` or a panic, is written to `logs/<date>/noneloquent.log` and then
//! handed back to the caller untouched: the boundary observes and forwards,
//! it never swallows.

use std::any::Any;
use std::fmt::{Debug, Display};
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset};
use serde_json::Value;
use tracing::{debug, warn};

use crate::clock::{Clock, SystemClock};
use crate::config::{LogPaths, Settings};
use crate::error::ChangeLogResult;
use crate::sink::{open_event_sink, LogRecord, Sink};

/// Logs failures escaping a request handler to the daily exception log
pub struct ExceptionBoundary {
    paths: LogPaths,
    settings: Settings,
    clock: Arc<dyn Clock>,
}

impl ExceptionBoundary {
    pub fn new(paths: LogPaths, settings: Settings) -> ChangeLogResult<Self> {
        settings.validate()?;
        Ok(Self {
            paths,
            settings,
            clock: Arc::new(SystemClock),
        })
    }

    /// Create a boundary from the environment and the optional settings file
    pub fn from_env() -> ChangeLogResult<Self> {
        let paths = LogPaths::new()?;
        let settings = Settings::load_or_default(&paths)?;
        Self::new(paths, settings)
    }

    /// Replace the time source
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Path of the exception log for the current date
    pub fn log_path(&self) -> PathBuf {
        self.path_at(self.clock.now())
    }

    /// Run `next` with `request`, logging any failure before passing it on
    ///
    /// The `Err` value is returned exactly as `next` produced it; a panic is
    /// resumed with its original payload.
    pub fn handle<Req, Resp, E, F>(&self, request: Req, next: F) -> Result<Resp, E>
    where
        F: FnOnce(Req) -> Result<Resp, E>,
        E: Display + Debug,
    {
        match panic::catch_unwind(AssertUnwindSafe(|| next(request))) {
            Ok(Ok(response)) => Ok(response),
            Ok(Err(err)) => {
                self.record_failure(&err.to_string(), format!("{:?}", err));
                Err(err)
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                self.record_failure(&message, format!("panic: {}", message));
                panic::resume_unwind(payload)
            }
        }
    }

    fn record_failure(&self, message: &str, trace: String) {
        let now = self.clock.now();
        let path = self.path_at(now);
        debug!(path = %path.display(), "request failure observed");

        let mut sink = open_event_sink(
            path,
            self.settings.error_level,
            self.settings.trigger(),
            self.settings.buffer_limit,
        );
        let record = LogRecord::new(now, &self.settings.channel, self.settings.error_level, message)
            .with_context("message", Value::String(message.to_string()))
            .with_context("trace", Value::String(trace));

        if let Err(err) = sink.write(record) {
            warn!(error = %err, failure = message, "failed to write exception log");
        }
    }

    fn path_at(&self, now: DateTime<FixedOffset>) -> PathBuf {
        let date = now.format(&self.settings.date_format).to_string();
        self.paths
            .exception_log(&self.settings.exception_log_name, &date)
    }
}

/// Text of a panic payload, for the two payload types `panic!` produces
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use tempfile::TempDir;
    use thiserror::Error;

    #[derive(Debug, Error, PartialEq)]
    #[error("order {0} not found")]
    struct OrderNotFound(u32);

    fn create_test_boundary() -> (ExceptionBoundary, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let boundary = ExceptionBoundary::new(
            LogPaths::with_base_dir(temp_dir.path()),
            Settings::default(),
        )
        .unwrap()
        .with_clock(FixedClock::parse("2024-03-15T10:30:00+00:00").unwrap());
        (boundary, temp_dir)
    }

    #[test]
    fn test_success_passes_through_without_logging() {
        let (boundary, _temp) = create_test_boundary();

        let result: Result<u32, OrderNotFound> = boundary.handle(21, |n| Ok(n * 2));

        assert_eq!(result, Ok(42));
        assert!(!boundary.log_path().exists());
    }

    #[test]
    fn test_error_is_logged_and_forwarded() {
        let (boundary, temp) = create_test_boundary();

        let result: Result<(), OrderNotFound> = boundary.handle(7, |id| Err(OrderNotFound(id)));

        assert_eq!(result, Err(OrderNotFound(7)));
        let path = temp.path().join("logs/2024-03-15/noneloquent.log");
        assert_eq!(boundary.log_path(), path);

        let contents = std::fs::read_to_string(path).unwrap();
        assert_eq!(contents.lines().count(), 1);
        assert!(contents.contains("ModelLogger.ERROR: order 7 not found "));
        assert!(contents.contains("\"trace\":\"OrderNotFound(7)\""));
    }

    #[test]
    fn test_panic_is_logged_and_resumed() {
        let (boundary, _temp) = create_test_boundary();

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            let _: Result<(), OrderNotFound> = boundary.handle((), |_| panic!("handler exploded"));
        }));

        let payload = outcome.unwrap_err();
        assert_eq!(panic_message(payload.as_ref()), "handler exploded");

        let contents = std::fs::read_to_string(boundary.log_path()).unwrap();
        assert!(contents.contains("ModelLogger.ERROR: handler exploded"));
    }

    #[test]
    fn test_unwritable_log_still_forwards() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "file, not directory").unwrap();
        let boundary =
            ExceptionBoundary::new(LogPaths::with_base_dir(&blocker), Settings::default()).unwrap();

        let result: Result<(), OrderNotFound> = boundary.handle(3, |id| Err(OrderNotFound(id)));

        assert_eq!(result, Err(OrderNotFound(3)));
    }

    #[test]
    fn test_custom_exception_log_name() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings {
            exception_log_name: "unhandled".into(),
            ..Settings::default()
        };
        let boundary = ExceptionBoundary::new(LogPaths::with_base_dir(temp_dir.path()), settings)
            .unwrap()
            .with_clock(FixedClock::parse("2024-03-15T10:30:00+00:00").unwrap());

        assert!(boundary.log_path().ends_with("logs/2024-03-15/unhandled.log"));
    }
}
