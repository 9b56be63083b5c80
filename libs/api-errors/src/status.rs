//! Per-status error factories and frozen response envelopes.
//!
//! One [`declare_status!`] row per supported status stamps out a factory
//! function (for example [`bad_request`]) and a frozen envelope type (for
//! example [`BadRequestEnvelope`]). A frozen envelope bakes the status into
//! the type: construction never takes one, nothing can change it afterwards,
//! and the contents are only handed out as borrows.

use std::collections::BTreeMap;

use http::StatusCode;

use crate::catalog::{self, ErrorDef};
use crate::envelope::HttpErrorEnvelope;
use crate::error::Error;

macro_rules! declare_status {
    ($(($title:literal, $def:ident, $factory:ident, $envelope:ident)),+ $(,)?) => {
        $(
            #[doc = concat!("Build a `", $title, "` error from the catalog definition.")]
            #[doc = ""]
            /// The message is the only input; `code` and `error_type` come
            /// from [`catalog`] and the timestamp is autofilled.
            pub fn $factory(message: impl Into<String>) -> Error {
                catalog::$def.as_error(message)
            }

            #[doc = concat!("Frozen `", $title, "` response envelope.")]
            #[doc = ""]
            /// The status is part of the type; construction neither takes one
            /// nor lets it change later. Contents are set with the consuming
            /// builders and read back through the accessors.
            #[derive(Debug, Clone, PartialEq, serde::Serialize)]
            #[must_use]
            pub struct $envelope {
                #[serde(serialize_with = "crate::envelope::serialize_status_code")]
                status_code: StatusCode,
                detail: Box<[Error]>,
                headers: Option<BTreeMap<String, String>>,
            }

            impl $envelope {
                /// Catalog definition behind this envelope.
                pub const DEF: ErrorDef = catalog::$def;

                /// Build an envelope with no errors and no headers.
                pub fn new() -> Self {
                    Self {
                        status_code: Self::DEF.status,
                        detail: Box::default(),
                        headers: None,
                    }
                }

                /// Set the error list, in the order given.
                pub fn with_detail(mut self, detail: impl IntoIterator<Item = Error>) -> Self {
                    self.detail = detail.into_iter().collect();
                    self
                }

                /// Set the header map wholesale.
                pub fn with_headers(mut self, headers: BTreeMap<String, String>) -> Self {
                    self.headers = Some(headers);
                    self
                }

                /// Set one header, creating the map on first use.
                pub fn with_header(
                    mut self,
                    name: impl Into<String>,
                    value: impl Into<String>,
                ) -> Self {
                    self.headers
                        .get_or_insert_with(BTreeMap::new)
                        .insert(name.into(), value.into());
                    self
                }

                /// Status of this envelope, fixed by the type.
                #[must_use]
                pub fn status_code(&self) -> StatusCode {
                    self.status_code
                }

                /// The errors carried, in the order they were set.
                #[must_use]
                pub fn detail(&self) -> &[Error] {
                    &self.detail
                }

                /// Headers to send along, if any were set.
                #[must_use]
                pub fn headers(&self) -> Option<&BTreeMap<String, String>> {
                    self.headers.as_ref()
                }
            }

            impl Default for $envelope {
                fn default() -> Self {
                    Self::new()
                }
            }

            impl From<$envelope> for HttpErrorEnvelope {
                fn from(env: $envelope) -> Self {
                    Self {
                        status_code: env.status_code,
                        detail: env.detail.into_vec(),
                        headers: env.headers,
                    }
                }
            }

            impl crate::mapping::ToMapping for $envelope {}
        )+
    };
}

declare_status! {
    ("400 Bad Request", BAD_REQUEST, bad_request, BadRequestEnvelope),
    ("401 Unauthorized", UNAUTHORIZED, unauthorized, UnauthorizedEnvelope),
    ("403 Forbidden", FORBIDDEN, forbidden, ForbiddenEnvelope),
    ("404 Not Found", NOT_FOUND, not_found, NotFoundEnvelope),
    ("405 Method Not Allowed", METHOD_NOT_ALLOWED, method_not_allowed, MethodNotAllowedEnvelope),
    ("409 Conflict", CONFLICT, conflict, ConflictEnvelope),
    (
        "422 Unprocessable Entity",
        UNPROCESSABLE_ENTITY,
        unprocessable_entity,
        UnprocessableEntityEnvelope
    ),
    (
        "429 Too Many Requests",
        TOO_MANY_REQUESTS,
        too_many_requests,
        TooManyRequestsEnvelope
    ),
    (
        "500 Internal Server Error",
        INTERNAL_SERVER_ERROR,
        internal_server_error,
        InternalServerErrorEnvelope
    ),
    ("502 Bad Gateway", BAD_GATEWAY, bad_gateway, BadGatewayEnvelope),
    (
        "503 Service Unavailable",
        SERVICE_UNAVAILABLE,
        service_unavailable,
        ServiceUnavailableEnvelope
    ),
    ("504 Gateway Timeout", GATEWAY_TIMEOUT, gateway_timeout, GatewayTimeoutEnvelope),
}
