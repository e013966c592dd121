//! Custom error types for model-change-log
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for model-change-log operations
#[derive(Error, Debug)]
pub enum ChangeLogError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// The host failed to provide entity state
    #[error("Entity error: {0}")]
    Entity(String),
}

impl ChangeLogError {
    /// Create an error for entity state that is not a JSON object
    pub fn not_an_object(entity_type: &str, what: &str) -> Self {
        Self::Entity(format!("{} {} is not a JSON object", entity_type, what))
    }
}

impl From<std::io::Error> for ChangeLogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ChangeLogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for model-change-log operations
pub type ChangeLogResult<T> = Result<T, ChangeLogError>;

/// Collect the message of `err` followed by the messages of its sources
///
/// Rust errors carry no stack trace; the source chain is the closest
/// equivalent and is what gets written as the `trace` of an error record.
pub fn error_chain(err: &(dyn std::error::Error + 'static)) -> Vec<String> {
    let mut chain = vec![err.to_string()];
    let mut source = err.source();
    while let Some(cause) = source {
        chain.push(cause.to_string());
        source = cause.source();
    }
    chain
}
