//! The generic HTTP error response envelope.
//!
//! An envelope pairs a status code with the list of [`Error`] records the
//! response carries, plus optional response headers. Unlike the per-status
//! envelopes in [`crate::status`], this one is open: any status, mutable
//! after construction.

use std::collections::BTreeMap;

use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::mapping::ToMapping;

/// Custom serializer for `StatusCode` to u16
#[allow(clippy::trivially_copy_pass_by_ref)] // serde requires &T signature
pub(crate) fn serialize_status_code<S>(
    status: &StatusCode,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_u16(status.as_u16())
}

/// Custom deserializer for `StatusCode` from u16
pub(crate) fn deserialize_status_code<'de, D>(deserializer: D) -> Result<StatusCode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let code = u16::deserialize(deserializer)?;
    StatusCode::from_u16(code).map_err(serde::de::Error::custom)
}

/// Error response payload for an arbitrary HTTP status.
///
/// `status_code` is fixed at construction time but stays an ordinary public
/// field; `detail` starts out as a fresh empty list and `headers` as absent.
/// On the wire the status travels as its integer value.
///
/// ```
/// use api_errors::{HttpErrorEnvelope, ToMapping, catalog};
/// use http::StatusCode;
///
/// let body = HttpErrorEnvelope::new(StatusCode::NOT_FOUND)
///     .with_error(catalog::NOT_FOUND.as_error("no such user"));
/// let map = body.to_mapping().unwrap();
/// assert_eq!(map["status_code"], 404);
/// assert!(!map.contains_key("headers"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct HttpErrorEnvelope {
    /// HTTP status of the response, serialized as its integer value.
    #[serde(
        serialize_with = "serialize_status_code",
        deserialize_with = "deserialize_status_code"
    )]
    pub status_code: StatusCode,
    /// The errors carried by the response, in insertion order.
    #[serde(default)]
    pub detail: Vec<Error>,
    /// Response headers to send along, when any are called for.
    #[serde(default)]
    pub headers: Option<BTreeMap<String, String>>,
}

impl HttpErrorEnvelope {
    /// Build an empty envelope for the given status.
    pub fn new(status_code: StatusCode) -> Self {
        Self {
            status_code,
            detail: Vec::new(),
            headers: None,
        }
    }

    /// Replace the error list wholesale.
    pub fn with_detail(mut self, detail: impl IntoIterator<Item = Error>) -> Self {
        self.detail = detail.into_iter().collect();
        self
    }

    /// Append one error, keeping the existing ones.
    pub fn with_error(mut self, error: Error) -> Self {
        self.detail.push(error);
        self
    }

    /// Replace the header map wholesale.
    pub fn with_headers(mut self, headers: BTreeMap<String, String>) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Set one header, creating the map on first use.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), value.into());
        self
    }
}

impl ToMapping for HttpErrorEnvelope {}
