//! A frozen envelope's status is part of the type; construction must not
//! accept one.

use api_errors::status::BadRequestEnvelope;
use http::StatusCode;

fn main() {
    let _ = BadRequestEnvelope::new(StatusCode::BAD_REQUEST);
}
