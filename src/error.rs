//! Errors raised while parsing.

use std::io;
use std::result;

use thiserror::Error;

use crate::stream::Symbol;

/// A hard parse failure, raised by `expect`-class parsers through `Stream::raise`.
///
/// Carries the position of the offending symbol and a description of what was expected
/// there. `row` is 1-based; `col` follows the counting rules of
/// [`Position`](../stream/struct.Position.html).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("{message} {expected} found {found} at line {row}, column {col}")]
pub struct ParseError {
    /// Row of the offending symbol.
    pub row:      u32,
    /// Column of the offending symbol.
    pub col:      u32,
    /// The symbol which did not match.
    pub found:    Symbol,
    /// Description of what would have matched.
    pub expected: String,
    /// Leading message, eg. `"expected"`.
    pub message:  String,
}

/// Error type for everything which can end a parse.
#[derive(Debug, Error)]
pub enum Error {
    /// The grammar rejected the input at a committed position.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Reading from the underlying source failed.
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Returns the parse error if this is one.
    pub fn parse_error(&self) -> Option<&ParseError> {
        match *self {
            Error::Parse(ref e) => Some(e),
            Error::Io(_)        => None,
        }
    }
}

/// Result type used by all parsers in this crate.
pub type Result<T> = result::Result<T, Error>;
