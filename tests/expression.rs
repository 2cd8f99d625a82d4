//! Left-to-right arithmetic without precedence, reduced in place as it is parsed.

use std::sync::Arc;
use std::thread;

use descent::prelude::*;
use descent::unify;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Default for Op {
    fn default() -> Self {
        Op::Add
    }
}

unify!(Op);

fn return_int(n: &mut i64, (d,): (String,)) {
    *n = d.parse().unwrap();
}

fn return_op(o: &mut Op, n: usize, _: (String, String, String, String)) {
    *o = [Op::Add, Op::Sub, Op::Mul, Op::Div][n];
}

fn return_left(r: &mut i64, (l,): (i64,)) {
    *r = l;
}

fn return_right(r: &mut i64, (op, right): (Op, i64)) {
    match op {
        Op::Add => *r += right,
        Op::Sub => *r -= right,
        Op::Mul => *r *= right,
        Op::Div => *r /= right,
    }
}

fn expression() -> impl Parser<Output=i64> + Send + Sync {
    let space    = || discard(many(accept(Space)));
    let operand  = sequence(space(), all(return_int, (some(accept(Digit)),)));
    let operator = sequence(space(), any(return_op, (accept(Char(b'+')), accept(Char(b'-')),
                                                     accept(Char(b'*')), accept(Char(b'/')))));

    sequence(all(return_left, (operand.clone(),)), many(all(return_right, (operator, operand))))
}

fn eval(input: &str) -> Option<i64> {
    parse_only(&expression(), input.as_bytes()).unwrap()
}

#[test]
fn strict_left_fold() {
    let p     = expression();
    let mut i = Stream::new(&b"3 + 4 * 2"[..]).unwrap();

    assert_eq!(parse_stream(&p, &mut i, &mut ()).unwrap(), Some(14));
    assert!(i.at_end());
}

#[test]
fn operators() {
    assert_eq!(eval("10 - 2 - 3"), Some(5));
    assert_eq!(eval("8 / 2 * 3"), Some(12));
    assert_eq!(eval("  7"), Some(7));
    assert_eq!(eval("1+2+3+4"), Some(10));
}

#[test]
fn no_operand() {
    assert_eq!(eval(""), None);
    assert_eq!(eval("+"), None);
}

#[test]
fn stops_at_unknown_symbol() {
    let p     = expression();
    let mut i = Stream::new(&b"12 x"[..]).unwrap();

    assert_eq!(parse_stream(&p, &mut i, &mut ()).unwrap(), Some(12));
    assert_eq!(i.current(), Symbol::Byte(b'x'));
}

#[test]
fn trailing_operator_is_consumed() {
    let p     = expression();
    let mut i = Stream::new(&b"1 +"[..]).unwrap();

    assert_eq!(parse_stream(&p, &mut i, &mut ()).unwrap(), Some(1));
    assert!(i.at_end());
}

#[test]
fn concurrent_parses() {
    let p = Arc::new(expression());

    let handles: Vec<_> = (1..=8i64).map(|n| {
        let p = p.clone();

        thread::spawn(move || {
            let input = format!("{} * {} + 1", n, n);

            (n, parse_only(&p, input.as_bytes()).unwrap())
        })
    }).collect();

    for h in handles {
        let (n, r) = h.join().unwrap();

        assert_eq!(r, Some(n * n + 1));
    }
}
