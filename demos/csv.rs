//! Reads files of comma separated integers, one row per line.
//!
//! ```text
//! cargo run --example csv -- input.csv ...
//! ```

use std::env;
use std::fs::File;
use std::process;
use std::time::Instant;

use log::{info, warn};

use descent::parse_reader;
use descent::ascii::decimal;
use descent::prelude::*;

fn push_int(row: &mut Vec<i64>, (d,): (String,)) {
    match decimal(d.as_bytes()) {
        Some(n) => row.push(n),
        None    => warn!("skipping {}, out of range", d),
    }
}

fn push_row(rows: &mut Vec<Vec<i64>>, (row, ()): (Vec<i64>, ())) {
    rows.push(row);
}

fn csv() -> impl Parser<Output=Vec<Vec<i64>>> {
    let number = all(push_int, (lexeme(some(accept(Digit))),));
    let next   = all(push_int, (lexeme(sequence(expect(Digit), many(accept(Digit)))),));
    let comma  = lexeme(accept(Char(b',')));
    let row    = sequence(number, many(sequence(discard(comma), next)));

    sequence(discard(many(accept(Space))),
             sequence(strict("number", some(all(push_row, (row, succ())))), discard(expect(End))))
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

    let grammar = csv();

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
                    Some(rows) => {
                        println!("OK");

                        for row in &rows {
                            println!("{:?}", row);
                        }
                    },
                    None => println!("FAIL"),
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
