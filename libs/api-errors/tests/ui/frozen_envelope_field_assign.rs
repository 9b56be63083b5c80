//! Frozen envelope fields are private; assigning to one must not compile.

use api_errors::status::NotFoundEnvelope;
use http::StatusCode;

fn main() {
    let mut env = NotFoundEnvelope::new();
    env.status_code = StatusCode::BAD_REQUEST;
}
