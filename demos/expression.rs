//! Evaluates files holding a single arithmetic expression, folding operators left to right.
//!
//! ```text
//! cargo run --example expression -- input.txt ...
//! ```

use std::env;
use std::fs::File;
use std::process;
use std::time::Instant;

use log::info;

use descent::parse_reader;
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
    // Overflowing literals evaluate to zero
    *n = d.parse().unwrap_or(0);
}

fn return_op(o: &mut Op, n: usize, _: (String, String, String, String)) {
    *o = [Op::Add, Op::Sub, Op::Mul, Op::Div][n];
}

fn return_left(r: &mut i64, (l,): (i64,)) {
    *r = l;
}

fn return_right(r: &mut i64, (op, right): (Op, i64)) {
    *r = match op {
        Op::Add => r.wrapping_add(right),
        Op::Sub => r.wrapping_sub(right),
        Op::Mul => r.wrapping_mul(right),
        Op::Div => r.checked_div(right).unwrap_or(0),
    };
}

fn expression() -> impl Parser<Output=i64> {
    let space    = || discard(many(accept(Space)));
    let operand  = sequence(space(), all(return_int, (some(accept(Digit)),)));
    let operator = sequence(space(), any(return_op, (accept(Char(b'+')), accept(Char(b'-')),
                                                     accept(Char(b'*')), accept(Char(b'/')))));

    sequence(all(return_left, (operand.clone(),)), many(all(return_right, (operator, operand))))
}

fn main() {
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let files: Vec<_> = env::args().skip(1).collect();

    if files.is_empty() {
        eprintln!("no input files");
        process::exit(1);
    }

    let grammar = expression();

    for path in files {
        println!("{}", path);

        let file = match File::open(&path) {
            Ok(f)  => f,
            Err(e) => {
                eprintln!("{}: {}", path, e);
                continue;
            },
        };

        let start = Instant::now();

        match parse_reader(&grammar, file, &mut ()) {
            Ok((r, count)) => {
                let secs = start.elapsed().as_secs_f64();

                match r {
                    Some(n) => println!("OK\n{}", n),
                    None    => println!("FAIL"),
                }

                info!("{} symbols in {:.6}s", count, secs);
                println!("parsed: {:.2}MB/s", count as f64 / secs / 1e6);
            },
            Err(e) => {
                eprintln!("{}: {}", path, e);
                process::exit(2);
            },
        }
    }
}
