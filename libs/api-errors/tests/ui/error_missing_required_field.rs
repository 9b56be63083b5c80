//! `Error::new` takes all three identifiers; leaving one out must not compile.

use api_errors::Error;

fn main() {
    let _ = Error::new("THING_MISSING", "not_found");
}
