// error-pattern:E0277

extern crate descent;

use descent::parse_only;
use descent::prelude::*;

fn number(n: &mut i64, (d,): (String,)) {
    *n = d.parse().unwrap();
}

// A parser producing text can not share its slot with one producing a number
fn main() {
    let p = sequence(accept(Char(b'-')), all(number, (some(accept(Digit)),)));
    let r = parse_only(&p, b"-1");
}
