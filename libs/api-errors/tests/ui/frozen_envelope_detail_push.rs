//! Frozen envelope contents are only handed out as borrows; appending to the
//! error list must not compile.

use api_errors::status::{NotFoundEnvelope, not_found};

fn main() {
    let env = NotFoundEnvelope::new();
    env.detail().push(not_found("late entry"));
}
