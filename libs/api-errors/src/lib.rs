//! Typed API error payloads with a predictable JSON shape.
//!
//! Everything in this crate serializes the same way: fields in declaration
//! order, absent values dropped at the top level only, nested values left
//! exactly as they are. It includes:
//! - single error records (`Error`, built from three required identifiers)
//! - a catalog of `code` / `error_type` pairs for twelve common statuses
//! - the open response envelope (`HttpErrorEnvelope`) and one frozen
//!   envelope per status, with the status baked into the type
//! - the serialization substrate (`ToMapping`, `compact`), open to records
//!   defined elsewhere
//!
//! # Quick start
//!
//! ```
//! use api_errors::{ToMapping, status};
//!
//! let body = status::NotFoundEnvelope::new()
//!     .with_detail([status::not_found("no such user")]);
//!
//! let map = body.to_mapping().unwrap();
//! assert_eq!(map["status_code"], 404);
//! assert_eq!(map["detail"][0]["code"], "NOT_FOUND");
//! ```
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod catalog;
pub mod compact;
pub mod envelope;
pub mod error;
pub mod mapping;
pub mod status;

// Re-export commonly used types
pub use catalog::ErrorDef;
pub use compact::{compact, compact_map};
pub use envelope::HttpErrorEnvelope;
pub use error::{Error, ErrorFields};
pub use mapping::{Mapping, MappingError, ToMapping};

/// Helper to attach request correlation context to an [`Error`]
///
/// The `request_id` is always applied; `path` and `method` only when given,
/// so context an earlier layer already filled in survives.
pub fn with_request_context(
    mut error: Error,
    request_id: &str,
    path: Option<String>,
    method: Option<String>,
) -> Error {
    error = error.with_request_id(request_id);
    if let Some(path) = path {
        error = error.with_path(path);
    }
    if let Some(method) = method {
        error = error.with_method(method);
    }
    error
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn request_context_is_attached() {
        let err = with_request_context(
            status::bad_request("boom"),
            "req-1",
            Some("/v1/things".to_owned()),
            Some("POST".to_owned()),
        );
        assert_eq!(err.request_id.as_deref(), Some("req-1"));
        assert_eq!(err.path.as_deref(), Some("/v1/things"));
        assert_eq!(err.method.as_deref(), Some("POST"));
    }

    #[test]
    fn absent_context_does_not_clobber_existing_fields() {
        let err = status::bad_request("boom").with_path("/v1/preset");
        let err = with_request_context(err, "req-2", None, None);
        assert_eq!(err.request_id.as_deref(), Some("req-2"));
        assert_eq!(err.path.as_deref(), Some("/v1/preset"));
        assert_eq!(err.method, None);
    }
}
