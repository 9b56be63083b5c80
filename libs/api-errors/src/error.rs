//! The error record: one machine-readable API failure.
//!
//! [`ErrorFields`] is the flat field set every error carries. [`Error`] wraps
//! it for transport and layers the builder API on top. The split keeps the
//! wire shape in one place while the wrapper stays free to grow behavior.

use std::ops::{Deref, DerefMut};

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::mapping::{Mapping, ToMapping};

/// Field set of a single API error.
///
/// `code`, `error_type` and `message` are always present. The rest is
/// request context, filled in when known. `timestamp` records when the
/// error was built, as an ISO-8601 UTC string with microsecond precision
/// (for example `2026-08-26T12:34:56.789012+00:00`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct ErrorFields {
    /// Stable machine-readable identifier, fixed at construction.
    pub code: String,
    /// Broad classification, free to adjust after construction.
    pub error_type: String,
    /// Human-readable description.
    pub message: String,
    /// Correlation id of the failed request.
    pub request_id: Option<String>,
    /// Creation time, autofilled unless set explicitly.
    pub timestamp: String,
    /// Request path.
    pub path: Option<String>,
    /// Request method.
    pub method: Option<String>,
    /// Captured backtrace text, if any was recorded.
    pub traceback: Option<String>,
    /// Free-form additional entries, flattened into the serialized form.
    #[serde(flatten)]
    pub extra: Mapping,
}

impl ErrorFields {
    /// Build the field set with a fresh timestamp and no request context.
    pub fn new(
        code: impl Into<String>,
        error_type: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            error_type: error_type.into(),
            message: message.into(),
            request_id: None,
            timestamp: now_utc(),
            path: None,
            method: None,
            traceback: None,
            extra: Mapping::new(),
        }
    }
}

fn now_utc() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// A single API error, ready for embedding in a response payload.
///
/// Construction takes the three required fields; everything else is added
/// with the consuming `with_*` builders. `code` is deliberately settled at
/// construction and has no builder, while `error_type` starts from the
/// constructor value and may be overridden later.
///
/// ```
/// use api_errors::{Error, ToMapping};
///
/// let err = Error::new("USER_MISSING", "not_found", "no such user")
///     .with_request_id("req-1");
/// let map = err.to_mapping().unwrap();
/// assert_eq!(map["code"], "USER_MISSING");
/// assert_eq!(map["request_id"], "req-1");
/// assert!(!map.contains_key("path"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct Error {
    /// The flat field set, inlined into the serialized form.
    #[serde(flatten)]
    pub fields: ErrorFields,
}

impl Error {
    /// Build an error with a fresh timestamp and no request context.
    pub fn new(
        code: impl Into<String>,
        error_type: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            fields: ErrorFields::new(code, error_type, message),
        }
    }

    /// Override the classification chosen at construction.
    pub fn with_error_type(mut self, error_type: impl Into<String>) -> Self {
        self.fields.error_type = error_type.into();
        self
    }

    /// Attach the correlation id of the failed request.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.fields.request_id = Some(request_id.into());
        self
    }

    /// Attach the request path.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.fields.path = Some(path.into());
        self
    }

    /// Attach the request method.
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.fields.method = Some(method.into());
        self
    }

    /// Attach captured backtrace text.
    pub fn with_traceback(mut self, traceback: impl Into<String>) -> Self {
        self.fields.traceback = Some(traceback.into());
        self
    }

    /// Replace the autofilled timestamp with an explicit one.
    ///
    /// The value is stored verbatim; no parsing or normalization happens.
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.fields.timestamp = timestamp.into();
        self
    }

    /// Add one free-form entry to the serialized form.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.extra.insert(key.into(), value.into());
        self
    }
}

impl ToMapping for Error {}

impl From<ErrorFields> for Error {
    fn from(fields: ErrorFields) -> Self {
        Self { fields }
    }
}

impl Deref for Error {
    type Target = ErrorFields;

    fn deref(&self) -> &Self::Target {
        &self.fields
    }
}

impl DerefMut for Error {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.fields
    }
}
