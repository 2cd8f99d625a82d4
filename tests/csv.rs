//! Rows of comma separated integers.

use descent::ascii::decimal;
use descent::prelude::*;

/// Fields which do not fit in an `i64` are left out of the row.
fn push_int(row: &mut Vec<i64>, (d,): (String,)) {
    row.extend(decimal::<i64>(d.as_bytes()));
}

fn push_row(rows: &mut Vec<Vec<i64>>, (row, ()): (Vec<i64>, ())) {
    rows.push(row);
}

fn csv() -> impl Parser<Output=Vec<Vec<i64>>> {
    let number = all(push_int, (some(accept(Digit)),));
    let next   = all(push_int, (sequence(expect(Digit), many(accept(Digit))),));
    let row    = sequence(number, many(sequence(discard(accept(Char(b','))), next)));
    let eol    = discard(choice(accept(Char(b'\n')), expect(End)));

    sequence(many(all(push_row, (row, eol))), discard(expect(End)))
}

fn error(input: &str) -> (u32, u32, Symbol, String) {
    let e = parse_only(&csv(), input.as_bytes()).unwrap_err();
    let e = e.parse_error().unwrap();

    (e.row, e.col, e.found, e.expected.clone())
}

#[test]
fn rows() {
    assert_eq!(parse_only(&csv(), b"1,2,3\n4,5,6\n").unwrap(), Some(vec![vec![1, 2, 3], vec![4, 5, 6]]));
    assert_eq!(parse_only(&csv(), b"10,20\n30").unwrap(), Some(vec![vec![10, 20], vec![30]]));
    assert_eq!(parse_only(&csv(), b"").unwrap(), Some(vec![]));
}

#[test]
fn out_of_range_fields() {
    assert_eq!(parse_only(&csv(), b"1,99999999999999999999,3\n").unwrap(), Some(vec![vec![1, 3]]));
    assert_eq!(parse_only(&csv(), b"9223372036854775807").unwrap(), Some(vec![vec![i64::max_value()]]));
}

#[test]
fn missing_number() {
    assert_eq!(error("1,2,x\n"), (1, 5, Symbol::Byte(b'x'), "digit".to_owned()));
}

#[test]
fn error_on_second_row() {
    assert_eq!(error("1,2\n3,y"), (2, 2, Symbol::Byte(b'y'), "digit".to_owned()));
    assert_eq!(error("1,2\n3,"), (2, 2, Symbol::End, "digit".to_owned()));
}

#[test]
fn unexpected_row_end() {
    assert_eq!(error("1;2\n"), (1, 2, Symbol::Byte(b';'), "end of input".to_owned()));
}

#[test]
fn garbage_after_rows() {
    assert_eq!(error("1\n-"), (2, 0, Symbol::Byte(b'-'), "end of input".to_owned()));
}
