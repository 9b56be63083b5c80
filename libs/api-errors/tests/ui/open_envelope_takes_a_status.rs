//! The open envelope always knows its status; construction without one must
//! not compile.

use api_errors::HttpErrorEnvelope;

fn main() {
    let _ = HttpErrorEnvelope::new();
}
