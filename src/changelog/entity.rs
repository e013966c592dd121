//! The view of a host entity the change logger reads
//!
//! The host framework owns its entities; the logger only reads them through
//! [`Entity`]. Every read is fallible so that a host can report state it
//! cannot produce, and such failures become error records instead of
//! aborting the host's operation.

use serde::Serialize;

use crate::error::ChangeLogResult;

use super::payload::{dirty_fields, into_attributes, Attributes};

/// Read-only access to an entity undergoing a lifecycle phase
pub trait Entity {
    /// Short type name, e.g. "User"
    fn type_name(&self) -> &str;

    /// All current attribute values
    fn attributes(&self) -> ChangeLogResult<Attributes>;

    /// Values as last loaded from storage, only meaningful during an update
    fn original(&self) -> ChangeLogResult<Attributes> {
        Ok(Attributes::new())
    }

    /// Attributes changed since load, with their new values
    fn dirty(&self) -> ChangeLogResult<Attributes> {
        Ok(Attributes::new())
    }
}

/// An entity captured as plain attribute maps
#[derive(Debug, Clone, PartialEq)]
pub struct EntitySnapshot {
    type_name: String,
    attributes: Attributes,
    original: Attributes,
    dirty: Attributes,
}

impl EntitySnapshot {
    /// Snapshot with current attributes and no pending changes
    pub fn new(type_name: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            type_name: type_name.into(),
            attributes,
            original: Attributes::new(),
            dirty: Attributes::new(),
        }
    }

    /// Snapshot of a loaded entity whose attributes changed from `original`
    ///
    /// The dirty set is derived by comparing the two maps.
    pub fn changed(type_name: impl Into<String>, original: Attributes, current: Attributes) -> Self {
        let dirty = dirty_fields(&original, &current);
        Self {
            type_name: type_name.into(),
            attributes: current,
            original,
            dirty,
        }
    }

    /// Snapshot of any serializable value
    pub fn from_serialize<T: Serialize>(type_name: impl Into<String>, value: &T) -> ChangeLogResult<Self> {
        let type_name = type_name.into();
        let attributes = into_attributes(serde_json::to_value(value)?, &type_name, "attributes")?;
        Ok(Self::new(type_name, attributes))
    }

    /// Override the original snapshot
    pub fn with_original(mut self, original: Attributes) -> Self {
        self.original = original;
        self
    }

    /// Override the dirty set
    pub fn with_dirty(mut self, dirty: Attributes) -> Self {
        self.dirty = dirty;
        self
    }
}

impl Entity for EntitySnapshot {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn attributes(&self) -> ChangeLogResult<Attributes> {
        Ok(self.attributes.clone())
    }

    fn original(&self) -> ChangeLogResult<Attributes> {
        Ok(self.original.clone())
    }

    fn dirty(&self) -> ChangeLogResult<Attributes> {
        Ok(self.dirty.clone())
    }
}

/// A borrowed serializable model, serialized lazily on each read
///
/// Serialization happens inside the lifecycle hook, so a model that fails
/// to serialize produces an error record rather than a host-side failure.
#[derive(Debug, Clone, Copy)]
pub struct SerdeEntity<'a, T: Serialize> {
    type_name: &'a str,
    current: &'a T,
    original: Option<&'a T>,
}

impl<'a, T: Serialize> SerdeEntity<'a, T> {
    /// Wrap a model with no previous state
    pub fn new(type_name: &'a str, current: &'a T) -> Self {
        Self {
            type_name,
            current,
            original: None,
        }
    }

    /// Wrap a model together with its state as last loaded
    pub fn updated(type_name: &'a str, original: &'a T, current: &'a T) -> Self {
        Self {
            type_name,
            current,
            original: Some(original),
        }
    }

    fn serialize(&self, value: &T, what: &str) -> ChangeLogResult<Attributes> {
        into_attributes(serde_json::to_value(value)?, self.type_name, what)
    }
}

impl<T: Serialize> Entity for SerdeEntity<'_, T> {
    fn type_name(&self) -> &str {
        self.type_name
    }

    fn attributes(&self) -> ChangeLogResult<Attributes> {
        self.serialize(self.current, "attributes")
    }

    fn original(&self) -> ChangeLogResult<Attributes> {
        match self.original {
            Some(original) => self.serialize(original, "original"),
            None => Ok(Attributes::new()),
        }
    }

    fn dirty(&self) -> ChangeLogResult<Attributes> {
        let current = self.attributes()?;
        Ok(dirty_fields(&self.original()?, &current))
    }
}
