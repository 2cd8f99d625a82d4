//! Descent is a library of recursive-descent parser combinators with typed semantic actions.
//!
//! Grammars are built from values: primitive recognisers matching a single symbol, and
//! combinators composing parsers in sequence, as alternatives and as repetitions. Reducer
//! functions lifted over groups of parsers turn the recognised text into typed results.
//!
//! Parsing is single-pass with one symbol of lookahead and never backtracks. A parser either
//! succeeds, fails softly (an enclosing `choice` or `many` may try something else), or raises
//! an error which ends the parse with the position of the offending symbol.
//!
//! # Example
//!
//! ```
//! use descent::parse_only;
//! use descent::prelude::*;
//!
//! // number = digit {digit}
//! fn number(n: &mut i64, (d,): (String,)) {
//!     *n = d.parse().unwrap();
//! }
//!
//! // sum = number {'+' number}
//! let number = all(number, (lexeme(some(accept(Digit))),));
//! let sum    = all(|n: &mut i64, (first, rest): (i64, Vec<i64>)| *n = first + rest.iter().sum::<i64>(),
//!                  (number.clone(),
//!                   many(all(|v: &mut Vec<i64>, ((), m): ((), i64)| v.push(m),
//!                            (discard(lexeme(accept(Char(b'+')))), strict("number", number))))));
//!
//! assert_eq!(parse_only(&sum, b"1 + 2 + 39").unwrap(), Some(42));
//! assert_eq!(parse_only(&sum, b"1 + x").unwrap_err().to_string(),
//!            "expected number found 'x' at line 1, column 5");
//! ```
//!
//! # Result slots
//!
//! A parser writes its result into a slot owned by its caller instead of returning it. Parsers
//! composed with `sequence` and `choice` share one slot, which requires their result types to
//! unify (see [`Unify`](types/trait.Unify.html)): both are the same type, or one of them is `()`.
//! Recognisers append the matched symbols to a `String` slot, so `some(accept(Digit))` collects
//! a whole number.
//!
//! Parsers lifted with `all` and `any` get fresh slots of their own which are passed to the
//! reducer once the group succeeded.
//!
//! # Inherited attribute
//!
//! Every parser is generic over a state type `S` which is threaded through the whole grammar by
//! mutable reference. Reducers lifted with `all_with` and `any_with` receive it, which allows
//! eg. interning names or counting lines without global state. Grammars themselves are
//! immutable and can be shared between threads.

#![warn(missing_docs,
        missing_debug_implementations,
        missing_copy_implementations,
        trivial_casts,
        unused_import_braces)]

#[macro_use]
mod macros;
mod parse;

pub mod ascii;
pub mod combinators;
pub mod error;
pub mod lift;
pub mod parsers;
pub mod predicate;
pub mod stream;
pub mod types;

pub use ::either::Either;

pub use crate::error::{Error, ParseError, Result};
pub use crate::parse::{parse_only, parse_reader, parse_stream};
pub use crate::stream::{Position, Stream, Symbol};
pub use crate::types::{Parser, Unify};

/// Basic prelude.
pub mod prelude {
    pub use crate::parsers::{
        accept,
        accept_str,
        expect,
        expect_str,
        fail,
        succ,
    };
    pub use crate::combinators::{
        choice,
        define,
        discard,
        fix,
        lexeme,
        many,
        option,
        sep_by,
        sep_by1,
        sequence,
        some,
        strict,
    };
    pub use crate::lift::{
        all,
        all_with,
        any,
        any_with,
        either,
    };
    pub use crate::predicate::{
        Alnum,
        Alpha,
        Any,
        Char,
        Digit,
        End,
        Lower,
        Predicate,
        Print,
        Space,
        Upper,
        satisfy,
    };
    pub use crate::types::{
        Parser,
        Unify,
    };

    pub use crate::{Error, ParseError, Stream, Symbol};
    pub use crate::{parse_only, parse_reader, parse_stream};
}
