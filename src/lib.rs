//! model-change-log - Human-readable change logs for application entities
//!
//! This library records the lifecycle of a host application's data models
//! (create, update, delete) as plain-text log files, one file per entity type
//! per day, and logs failures escaping request handling to a daily exception
//! log.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Storage paths and logger settings
//! - `error`: Custom error types
//! - `clock`: Time source used for timestamps and file routing
//! - `sink`: Log records, the file sink and the trigger-buffered sink
//! - `changelog`: Entity lifecycle logging
//! - `boundary`: Exception boundary for request handling
//! - `policy`: What happens to a failure after it is logged
//!
//! # Example
//!
//! ```rust,ignore
//! use model_change_log::{ExceptionBoundary, ModelChangeLogger, OperationContext};
//! use model_change_log::changelog::{EntityDescriptor, LifecyclePhase, SerdeEntity};
//!
//! let mut logger = ModelChangeLogger::from_env()?;
//! logger.register(EntityDescriptor::new("User"))?;
//! let boundary = ExceptionBoundary::from_env()?;
//!
//! boundary.handle(request, |request| {
//!     let mut ctx = OperationContext::new();
//!     let entity = SerdeEntity::updated("User", &before, &after);
//!     logger.dispatch(LifecyclePhase::Updating, &entity, &mut ctx)?;
//!     save(&after)?;
//!     logger.dispatch(LifecyclePhase::Updated, &entity, &mut ctx)?;
//!     Ok(response)
//! })?;
//! ```

pub mod boundary;
pub mod changelog;
pub mod clock;
pub mod config;
pub mod error;
pub mod policy;
pub mod sink;

pub use boundary::ExceptionBoundary;
pub use changelog::{ModelChangeLogger, OperationContext};
pub use error::{ChangeLogError, ChangeLogResult};
pub use policy::ErrorPolicy;
