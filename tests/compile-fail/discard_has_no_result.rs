// error-pattern:E0308

extern crate descent;

use descent::parse_only;
use descent::prelude::*;

// A discarded parser does not produce text
fn main() {
    let r: Option<String> = parse_only(&discard(accept(Digit)), b"1").unwrap();
}
