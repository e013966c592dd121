//! Configuration module for model-change-log
//!
//! This module provides:
//! - Storage path resolution and the per-day log layout
//! - Logger settings (channel, severities, separator, file names)

pub mod paths;
pub mod settings;

pub use paths::LogPaths;
pub use settings::Settings;
