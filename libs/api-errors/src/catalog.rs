//! Catalog of well-known error definitions.
//!
//! Each definition pins the HTTP status together with the `code` and
//! `error_type` identifiers an [`Error`] built from it will carry. The
//! catalog is the single place those identifiers are spelled out; the
//! per-status constructors in [`crate::status`] all go through it.

use http::StatusCode;

use crate::error::Error;

/// A reusable error definition.
///
/// Definitions are plain data and `Copy`; materialize one into an [`Error`]
/// with [`ErrorDef::as_error`].
#[derive(Debug, Clone, Copy)]
pub struct ErrorDef {
    pub status: StatusCode,
    pub code: &'static str,
    pub error_type: &'static str,
}

impl ErrorDef {
    /// Build an [`Error`] carrying this definition's identifiers.
    ///
    /// The timestamp is autofilled, like any other construction.
    #[inline]
    pub fn as_error(&self, message: impl Into<String>) -> Error {
        Error::new(self.code, self.error_type, message)
    }
}

pub const BAD_REQUEST: ErrorDef = ErrorDef {
    status: StatusCode::BAD_REQUEST,
    code: "BAD_REQUEST",
    error_type: "bad_request",
};

pub const UNAUTHORIZED: ErrorDef = ErrorDef {
    status: StatusCode::UNAUTHORIZED,
    code: "UNAUTHORIZED",
    error_type: "unauthorized",
};

pub const FORBIDDEN: ErrorDef = ErrorDef {
    status: StatusCode::FORBIDDEN,
    code: "FORBIDDEN",
    error_type: "forbidden",
};

pub const NOT_FOUND: ErrorDef = ErrorDef {
    status: StatusCode::NOT_FOUND,
    code: "NOT_FOUND",
    error_type: "not_found",
};

pub const METHOD_NOT_ALLOWED: ErrorDef = ErrorDef {
    status: StatusCode::METHOD_NOT_ALLOWED,
    code: "METHOD_NOT_ALLOWED",
    error_type: "method_not_allowed",
};

pub const CONFLICT: ErrorDef = ErrorDef {
    status: StatusCode::CONFLICT,
    code: "CONFLICT",
    error_type: "conflict",
};

pub const UNPROCESSABLE_ENTITY: ErrorDef = ErrorDef {
    status: StatusCode::UNPROCESSABLE_ENTITY,
    code: "UNPROCESSABLE_ENTITY",
    error_type: "unprocessable_entity",
};

pub const TOO_MANY_REQUESTS: ErrorDef = ErrorDef {
    status: StatusCode::TOO_MANY_REQUESTS,
    code: "TOO_MANY_REQUESTS",
    error_type: "too_many_requests",
};

pub const INTERNAL_SERVER_ERROR: ErrorDef = ErrorDef {
    status: StatusCode::INTERNAL_SERVER_ERROR,
    code: "INTERNAL_SERVER_ERROR",
    error_type: "internal_server_error",
};

pub const BAD_GATEWAY: ErrorDef = ErrorDef {
    status: StatusCode::BAD_GATEWAY,
    code: "BAD_GATEWAY",
    error_type: "bad_gateway",
};

pub const SERVICE_UNAVAILABLE: ErrorDef = ErrorDef {
    status: StatusCode::SERVICE_UNAVAILABLE,
    code: "SERVICE_UNAVAILABLE",
    error_type: "service_unavailable",
};

pub const GATEWAY_TIMEOUT: ErrorDef = ErrorDef {
    status: StatusCode::GATEWAY_TIMEOUT,
    code: "GATEWAY_TIMEOUT",
    error_type: "gateway_timeout",
};

/// Every definition in the catalog, in status order.
pub const ALL: &[ErrorDef] = &[
    BAD_REQUEST,
    UNAUTHORIZED,
    FORBIDDEN,
    NOT_FOUND,
    METHOD_NOT_ALLOWED,
    CONFLICT,
    UNPROCESSABLE_ENTITY,
    TOO_MANY_REQUESTS,
    INTERNAL_SERVER_ERROR,
    BAD_GATEWAY,
    SERVICE_UNAVAILABLE,
    GATEWAY_TIMEOUT,
];

/// Look a definition up by its `code`.
#[must_use]
pub fn find(code: &str) -> Option<ErrorDef> {
    ALL.iter().find(|def| def.code == code).copied()
}
