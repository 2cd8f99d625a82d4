// error-pattern:E0277

extern crate descent;

use descent::prelude::*;

fn number(n: &mut u32, (d,): (String,)) {
    *n = d.parse().unwrap();
}

// Alternatives must write to the same kind of slot
fn main() {
    let p = choice(all(number, (some(accept(Digit)),)), accept(Char(b'x'))).boxed();
}
