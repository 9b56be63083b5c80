//! Top-level compaction of JSON objects.
//!
//! Compaction drops entries whose value is null, and nothing else: falsy
//! values (`0`, `false`, `""`) stay, and nulls nested inside object or array
//! values are left untouched. The rule is applied exactly one level deep.

use serde_json::Value;

use crate::mapping::{Mapping, MappingError};

/// Return a copy of a JSON object without its top-level null entries.
///
/// The input is never mutated. Nested objects and arrays are carried over
/// as-is, inner nulls included.
///
/// # Errors
///
/// Returns [`MappingError::NotAnObject`] if `value` is anything other than a
/// JSON object.
pub fn compact(value: &Value) -> Result<Mapping, MappingError> {
    match value {
        Value::Object(entries) => Ok(entries
            .iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()),
        other => Err(MappingError::not_an_object(other)),
    }
}

/// Apply the compaction rule to an owned object.
///
/// Same semantics as [`compact`], minus the runtime object check: the type
/// already guarantees a mapping. Entry order is preserved.
#[must_use]
pub fn compact_map(mut entries: Mapping) -> Mapping {
    entries.retain(|_, v| !v.is_null());
    entries
}
