//! Logger settings
//!
//! Every field has a default, so an absent or partial settings file is fine.

use std::path::Path;

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::{is_path_segment, LogPaths};
use crate::error::ChangeLogError;
use crate::sink::Severity;

/// Settings shared by the change logger and the exception boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Channel name written into every line
    #[serde(default = "default_channel")]
    pub channel: String,

    /// Severity of entity event records and minimum of entity log files
    #[serde(default = "default_event_level")]
    pub event_level: Severity,

    /// Severity of error and exception records
    #[serde(default = "default_error_level")]
    pub error_level: Severity,

    /// Severity at which a sink flushes what it buffered, `event_level` if unset
    ///
    /// Raising it to `error_level` keeps a notification's records in memory
    /// and writes them only when that notification fails.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_level: Option<Severity>,

    /// Line emitted around completion records
    #[serde(default = "default_separator")]
    pub separator: String,

    /// File name (without extension) of the unhandled-exception log
    #[serde(default = "default_exception_log_name")]
    pub exception_log_name: String,

    /// strftime format of the date used in directory and file names
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Records a sink may hold before its trigger, 0 for no limit
    #[serde(default)]
    pub buffer_limit: usize,
}

fn default_channel() -> String {
    "ModelLogger".to_string()
}

fn default_event_level() -> Severity {
    Severity::Info
}

fn default_error_level() -> Severity {
    Severity::Error
}

fn default_separator() -> String {
    "-".repeat(50)
}

fn default_exception_log_name() -> String {
    "noneloquent".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            channel: default_channel(),
            event_level: default_event_level(),
            error_level: default_error_level(),
            trigger_level: None,
            separator: default_separator(),
            exception_log_name: default_exception_log_name(),
            date_format: default_date_format(),
            buffer_limit: 0,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, ChangeLogError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ChangeLogError::Io(format!("Failed to read settings file: {}", e))
        })?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            ChangeLogError::Config(format!("Failed to parse settings file: {}", e))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from the storage directory, or use defaults if absent
    pub fn load_or_default(paths: &LogPaths) -> Result<Self, ChangeLogError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            Self::load(&settings_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Severity that flushes a sink's buffer
    pub fn trigger(&self) -> Severity {
        self.trigger_level.unwrap_or(self.event_level)
    }

    /// Reject settings that would produce unusable paths or lines
    pub fn validate(&self) -> Result<(), ChangeLogError> {
        if self.channel.trim().is_empty() {
            return Err(ChangeLogError::Config("channel must not be empty".into()));
        }

        if !is_path_segment(&self.exception_log_name) {
            return Err(ChangeLogError::Config(format!(
                "invalid exception log name: {:?}",
                self.exception_log_name
            )));
        }

        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(ChangeLogError::Config(format!(
                "invalid date format: {:?}",
                self.date_format
            )));
        }

        if self.date_format.contains(&['/', '\\'][..]) {
            return Err(ChangeLogError::Config(format!(
                "date format must not contain path separators: {:?}",
                self.date_format
            )));
        }

        if self.error_level < self.event_level {
            return Err(ChangeLogError::Config(format!(
                "error level {} is below event level {}",
                self.error_level, self.event_level
            )));
        }

        if self.trigger() > self.error_level {
            return Err(ChangeLogError::Config(format!(
                "trigger level {} is above error level {}, error records would never be written",
                self.trigger(),
                self.error_level
            )));
        }

        Ok(())
    }
}
