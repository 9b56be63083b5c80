//! `code` is settled at construction; no builder exists to change it.

use api_errors::Error;

fn main() {
    let _ = Error::new("THING_MISSING", "not_found", "no such thing").with_code("OTHER");
}
