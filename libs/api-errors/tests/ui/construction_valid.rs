//! The supported construction surface, all in one place.

use api_errors::status::{TooManyRequestsEnvelope, too_many_requests};
use api_errors::{Error, HttpErrorEnvelope};
use http::StatusCode;

fn main() {
    let err = Error::new("THROTTLED", "too_many_requests", "slow down")
        .with_request_id("req-1")
        .with_error_type("rate_limited");

    let open = HttpErrorEnvelope::new(StatusCode::TOO_MANY_REQUESTS).with_error(err);
    assert_eq!(open.status_code, StatusCode::TOO_MANY_REQUESTS);

    let frozen = TooManyRequestsEnvelope::new()
        .with_detail([too_many_requests("slow down")])
        .with_header("Retry-After", "30");
    assert_eq!(frozen.status_code(), StatusCode::TOO_MANY_REQUESTS);
}
