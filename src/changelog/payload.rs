//! Attribute payloads for change records
//!
//! Computes the field sets written into update and create records and
//! serializes them.

use serde_json::{Map, Value};

use crate::error::{ChangeLogError, ChangeLogResult};

/// Named attribute values of an entity
pub type Attributes = Map<String, Value>;

/// Fields of `current` that differ from `original` or are new
///
/// Fields removed in `current` are not dirty; only present values can have
/// changed.
pub fn dirty_fields(original: &Attributes, current: &Attributes) -> Attributes {
    current
        .iter()
        .filter(|(key, value)| original.get(*key) != Some(*value))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// `values` restricted to the keys present in `dirty`
///
/// Dirty keys absent from `values` are skipped, so the result's keys are
/// exactly `keys(dirty) ∩ keys(values)`.
pub fn restrict_to_dirty(values: &Attributes, dirty: &Attributes) -> Attributes {
    values
        .iter()
        .filter(|(key, _)| dirty.contains_key(*key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Convert a serialized entity into its attribute map
pub fn into_attributes(value: Value, entity_type: &str, what: &str) -> ChangeLogResult<Attributes> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(ChangeLogError::not_an_object(entity_type, what)),
    }
}

/// Single-line JSON, as used for old/new value records
pub fn compact(attributes: &Attributes) -> ChangeLogResult<String> {
    Ok(serde_json::to_string(attributes)?)
}

/// Two-space indented JSON, as used for creation records
pub fn pretty(attributes: &Attributes) -> ChangeLogResult<String> {
    Ok(serde_json::to_string_pretty(attributes)?)
}
