//! The serializable-record capability.
//!
//! [`ToMapping`] turns a structured record into a plain JSON map, one level
//! deep: the record's own fields become entries, composite field values are
//! embedded as their serialized form without further processing. Records opt
//! in with `impl ToMapping for MyRecord {}`.

use std::any;

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::compact::compact_map;

/// The plain mapping produced by serialization, ready for JSON encoding.
///
/// With the `preserve_order` feature of `serde_json` enabled (it is, see
/// `Cargo.toml`), entries iterate in insertion order, so a serialized record
/// lists its fields in declaration order.
pub type Mapping = Map<String, Value>;

/// Failure modes of [`compact`](crate::compact::compact) and [`ToMapping`].
///
/// Every variant is a precondition violation at the call site; none of them
/// is recoverable at runtime.
#[derive(Debug, Error)]
pub enum MappingError {
    /// Compaction was given something other than a JSON object.
    #[error("compaction takes a JSON object, got {kind}")]
    NotAnObject {
        /// What the value actually was.
        kind: &'static str,
    },

    /// The record serialized to something without a named field set.
    #[error("`{type_name}` serializes as {kind}, not as a record with named fields")]
    NotStructured {
        /// Type the capability was invoked on.
        type_name: &'static str,
        /// What its serialized form actually was.
        kind: &'static str,
    },

    /// serde itself refused the value.
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl MappingError {
    pub(crate) fn not_an_object(value: &Value) -> Self {
        Self::NotAnObject {
            kind: json_kind(value),
        }
    }

    fn not_structured<T: ?Sized>(value: &Value) -> Self {
        Self::NotStructured {
            type_name: any::type_name::<T>(),
            kind: json_kind(value),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Convert a record into a [`Mapping`] of its own fields.
///
/// Field order follows declaration order. The conversion never mutates the
/// record, and it is intentionally shallow: a field whose value is itself a
/// record lands in the result as one serialized entry, with any nulls inside
/// it left alone.
pub trait ToMapping: Serialize {
    /// Convert to a mapping, dropping fields whose value is absent.
    ///
    /// Equivalent to `to_mapping_with(true)`.
    ///
    /// # Errors
    ///
    /// See [`ToMapping::to_mapping_with`].
    fn to_mapping(&self) -> Result<Mapping, MappingError> {
        self.to_mapping_with(true)
    }

    /// Convert to a mapping; `exclude_none` chooses whether absent (null)
    /// top-level fields are dropped or kept as explicit nulls.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::NotStructured`] when the implementing type
    /// serializes to anything other than a JSON object, and
    /// [`MappingError::Serialize`] when serde fails outright.
    fn to_mapping_with(&self, exclude_none: bool) -> Result<Mapping, MappingError> {
        match serde_json::to_value(self)? {
            Value::Object(fields) => {
                if exclude_none {
                    Ok(compact_map(fields))
                } else {
                    Ok(fields)
                }
            }
            other => Err(MappingError::not_structured::<Self>(&other)),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::compact::compact;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    struct SimpleRecord {
        a: u32,
        b: String,
        c: Option<u32>,
    }

    impl ToMapping for SimpleRecord {}

    fn simple() -> SimpleRecord {
        SimpleRecord {
            a: 1,
            b: "x".to_owned(),
            c: None,
        }
    }

    #[test]
    fn absent_fields_are_dropped_by_default() {
        let out = simple().to_mapping().unwrap();
        assert_eq!(Value::Object(out), json!({"a": 1, "b": "x"}));
    }

    #[test]
    fn exclude_none_false_keeps_nulls() {
        let out = simple().to_mapping_with(false).unwrap();
        assert_eq!(Value::Object(out), json!({"a": 1, "b": "x", "c": null}));
    }

    #[test]
    fn default_equals_compaction_of_full_mapping() {
        let record = simple();
        let full = record.to_mapping_with(false).unwrap();
        let compacted = compact(&Value::Object(full)).unwrap();
        assert_eq!(record.to_mapping().unwrap(), compacted);
    }

    #[test]
    fn fields_come_out_in_declaration_order() {
        let out = simple().to_mapping_with(false).unwrap();
        let keys: Vec<&str> = out.keys().map(String::as_str).collect();
        assert_eq!(keys, ["a", "b", "c"]);
    }

    #[test]
    fn conversion_does_not_mutate_the_record() {
        let record = simple();
        let snapshot = record.clone();
        let _ = record.to_mapping().unwrap();
        assert_eq!(record, snapshot);
    }

    #[derive(Serialize)]
    struct Inner {
        x: Option<u32>,
        y: Value,
    }

    #[derive(Serialize)]
    struct WithNested {
        inner: Inner,
        note: Option<String>,
    }

    impl ToMapping for WithNested {}

    #[test]
    fn nested_values_are_not_deeply_compacted() {
        let record = WithNested {
            inner: Inner {
                x: None,
                y: json!({"k1": null, "k2": 3}),
            },
            note: None,
        };
        let out = record.to_mapping().unwrap();

        assert!(!out.contains_key("note"));
        assert_eq!(out["inner"], json!({"x": null, "y": {"k1": null, "k2": 3}}));
    }

    #[derive(Serialize)]
    struct Opaque(String);

    impl ToMapping for Opaque {}

    #[derive(Serialize)]
    struct Row(Vec<u32>);

    impl ToMapping for Row {}

    #[test]
    fn unstructured_types_are_rejected() {
        let err = Opaque("nope".to_owned()).to_mapping().unwrap_err();
        assert!(matches!(
            err,
            MappingError::NotStructured { kind: "a string", .. }
        ));

        let err = Row(vec![1, 2]).to_mapping_with(false).unwrap_err();
        assert!(matches!(
            err,
            MappingError::NotStructured { kind: "an array", .. }
        ));
    }
}
