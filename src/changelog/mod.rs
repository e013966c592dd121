//! Entity change logging
//!
//! Records every create, update and delete of registered entity types in
//! human-readable, per-type, per-day log files.
//!
//! # Architecture
//!
//! - `Entity`: the read-only view of a host entity (type name, attributes,
//!   original values, dirty fields). `EntitySnapshot` and `SerdeEntity` are
//!   ready-made implementations.
//! - `EntityDescriptor` / `Capabilities`: explicit registration of the types
//!   and lifecycle phases to log.
//! - `OperationContext`: per-request state deciding where separator lines go.
//! - `ModelChangeLogger`: formats records and routes them to
//!   `logs/<date>/<Type>/<Type>-<date>.log`.
//!
//! # Example
//!
//! ```rust,ignore
//! use model_change_log::changelog::{
//!     EntityDescriptor, EntitySnapshot, LifecyclePhase, ModelChangeLogger, OperationContext,
//! };
//!
//! let mut logger = ModelChangeLogger::from_env()?;
//! logger.register(EntityDescriptor::new("Order"))?;
//!
//! let mut ctx = OperationContext::new();
//! let order = EntitySnapshot::from_serialize("Order", &order)?;
//! logger.dispatch(LifecyclePhase::Creating, &order, &mut ctx)?;
//! // ... host inserts the row ...
//! logger.dispatch(LifecyclePhase::Created, &order, &mut ctx)?;
//! ```

mod context;
mod entity;
mod lifecycle;
mod logger;
mod payload;

pub use context::{is_completion, OperationContext, COMPLETION_MARKER};
pub use entity::{Entity, EntitySnapshot, SerdeEntity};
pub use lifecycle::{Capabilities, EntityDescriptor, LifecyclePhase, Operation};
pub use logger::ModelChangeLogger;
pub use payload::{dirty_fields, into_attributes, restrict_to_dirty, Attributes};
