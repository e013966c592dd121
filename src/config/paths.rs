//! Path management for model-change-log
//!
//! Resolves the storage base directory and the per-day log layout beneath it.
//!
//! ## Path Resolution Order
//!
//! 1. `MODEL_CHANGE_LOG_DIR` environment variable (if set)
//! 2. `./storage` relative to the current working directory
//!
//! ## Layout
//!
//! ```text
//! <base>/logs/2024-03-15/User/User-2024-03-15.log
//! <base>/logs/2024-03-15/noneloquent.log
//! ```

use std::path::{Path, PathBuf};

use crate::error::ChangeLogError;

/// Environment variable overriding the storage base directory
pub const STORAGE_DIR_ENV: &str = "MODEL_CHANGE_LOG_DIR";

/// Manages all paths used by the change logger
#[derive(Debug, Clone)]
pub struct LogPaths {
    /// Storage base directory, the `logs/` tree lives beneath it
    base_dir: PathBuf,
}

impl LogPaths {
    /// Create a new LogPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn new() -> Result<Self, ChangeLogError> {
        let base_dir = if let Ok(custom) = std::env::var(STORAGE_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            std::env::current_dir()
                .map_err(|e| {
                    ChangeLogError::Config(format!("Could not determine current directory: {}", e))
                })?
                .join("storage")
        };

        Ok(Self { base_dir })
    }

    /// Create LogPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Get the storage base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the root of the log tree (`<base>/logs/`)
    pub fn logs_dir(&self) -> PathBuf {
        self.base_dir.join("logs")
    }

    /// Get the directory holding one day's logs (`<base>/logs/<date>/`)
    pub fn day_dir(&self, date: &str) -> PathBuf {
        self.logs_dir().join(date)
    }

    /// Get the log file for one entity type on one day
    ///
    /// # Errors
    ///
    /// Returns an error if the type name could leave its directory (empty,
    /// `.`/`..`, or containing a path separator).
    pub fn entity_log(&self, entity_type: &str, date: &str) -> Result<PathBuf, ChangeLogError> {
        if !is_path_segment(entity_type) {
            return Err(ChangeLogError::Entity(format!(
                "invalid entity type name for a log path: {:?}",
                entity_type
            )));
        }

        Ok(self
            .day_dir(date)
            .join(entity_type)
            .join(format!("{}-{}.log", entity_type, date)))
    }

    /// Get the unhandled-exception log file for one day
    pub fn exception_log(&self, name: &str, date: &str) -> PathBuf {
        self.day_dir(date).join(format!("{}.log", name))
    }

    /// Get the path to the optional settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("model-change-log.json")
    }
}

/// Whether `name` can be used as a single file or directory name
pub fn is_path_segment(name: &str) -> bool {
    !name.trim().is_empty()
        && name != "."
        && name != ".."
        && !name.contains(&['/', '\\', '\0'][..])
}
