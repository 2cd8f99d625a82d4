//! The position-tracked input stream.
//!
//! A `Stream` buffers a byte source and exposes exactly one symbol of lookahead. Every
//! consumed symbol is counted into a [`Position`](struct.Position.html) which is used when
//! raising errors.
//!
//! ```
//! use descent::stream::{Stream, Symbol};
//!
//! let mut s = Stream::new(&b"ab\ncd"[..]).unwrap();
//!
//! for _ in 0..4 {
//!     s.advance().unwrap();
//! }
//!
//! assert_eq!(s.current(), Symbol::Byte(b'd'));
//! assert_eq!((s.row(), s.col()), (2, 1));
//! ```

use std::cmp;
use std::fmt;
use std::io::{self, Read};

use log::{debug, trace};

use crate::ascii;
use crate::error::{Error, ParseError, Result};

const DEFAULT_BUFFER_SIZE: usize = 8 * 1024;

/// One unit of input, or the end of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    /// A byte read from the source.
    Byte(u8),
    /// The source is exhausted.
    End,
}

impl Symbol {
    /// The byte of this symbol, `None` at the end of input.
    #[inline]
    pub fn byte(self) -> Option<u8> {
        match self {
            Symbol::Byte(b) => Some(b),
            Symbol::End     => None,
        }
    }

    /// True if this is the end of input.
    #[inline]
    pub fn is_end(self) -> bool {
        self == Symbol::End
    }
}

impl From<u8> for Symbol {
    fn from(b: u8) -> Self {
        Symbol::Byte(b)
    }
}

impl fmt::Display for Symbol {
    /// Printable bytes are quoted, other bytes are shown in hex.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Symbol::Byte(b) if ascii::is_printable(b) => write!(f, "'{}'", char::from(b)),
            Symbol::Byte(b)                           => write!(f, "0x{:02x}", b),
            Symbol::End                               => f.write_str("end of input"),
        }
    }
}

/// Row, column and consumed count of a stream.
///
/// Starts at row 1, column 1. Consuming a newline moves to the next row and resets the
/// column to 0, consuming any other printable byte increments the column. Non-printable
/// bytes only count towards `count`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    /// The current row, one-indexed.
    pub row:   u32,
    /// The current column.
    pub col:   u32,
    /// The number of consumed symbols.
    pub count: usize,
}

impl Position {
    /// Creates the position of an unread stream.
    pub fn new() -> Self {
        Position {
            row:   1,
            col:   1,
            count: 0,
        }
    }

    /// Adds the consumed byte to the position.
    #[inline]
    pub fn add(&mut self, b: u8) {
        self.count += 1;

        if b == b'\n' {
            self.row += 1;
            self.col  = 0;
        } else if ascii::is_printable(b) {
            self.col += 1;
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

/// Single-symbol lookahead cursor over a byte source.
///
/// Exactly one stream exists per in-flight parse; it is the only mutable resource a grammar
/// touches besides the inherited attribute.
pub struct Stream<'a> {
    /// Source reader
    source: Box<dyn Read + 'a>,
    /// Internal buffer
    buffer: Vec<u8>,
    /// The number of bytes from the start of the buffer which has been consumed
    used:   usize,
    /// The number of bytes from the start of the buffer which have been populated
    size:   usize,
    /// The next unconsumed symbol
    sym:    Symbol,
    pos:    Position,
}

impl<'a> Stream<'a> {
    /// Creates a stream over `source` and reads the first symbol.
    pub fn new<R: Read + 'a>(source: R) -> Result<Self> {
        Self::with_capacity(source, DEFAULT_BUFFER_SIZE)
    }

    /// Creates a stream with a refill buffer of `bufsize` bytes.
    pub fn with_capacity<R: Read + 'a>(source: R, bufsize: usize) -> Result<Self> {
        let mut s = Stream {
            source: Box::new(source),
            buffer: vec![0; cmp::max(bufsize, 1)],
            used:   0,
            size:   0,
            sym:    Symbol::End,
            pos:    Position::new(),
        };

        s.sym = s.fetch()?;

        Ok(s)
    }

    /// The next unconsumed symbol.
    #[inline]
    pub fn current(&self) -> Symbol {
        self.sym
    }

    /// True once the source is exhausted.
    #[inline]
    pub fn at_end(&self) -> bool {
        self.sym.is_end()
    }

    /// Consumes the current symbol and fetches the next one.
    ///
    /// Does nothing at the end of input. If reading fails the stream is left unchanged.
    #[inline]
    pub fn advance(&mut self) -> Result<()> {
        if let Symbol::Byte(b) = self.sym {
            self.sym = self.fetch()?;
            self.pos.add(b);
        }

        Ok(())
    }

    /// Builds a parse error at the current symbol.
    ///
    /// Always returns `Err`, to be propagated with `?` or returned directly.
    pub fn raise<T>(&self, message: &str, expected: &str) -> Result<T> {
        debug!("{} {} found {} at {}:{}", message, expected, self.sym, self.pos.row, self.pos.col);

        Err(Error::Parse(ParseError {
            row:      self.pos.row,
            col:      self.pos.col,
            found:    self.sym,
            expected: expected.to_owned(),
            message:  message.to_owned(),
        }))
    }

    /// The position of the current symbol.
    #[inline]
    pub fn position(&self) -> Position {
        self.pos
    }

    /// The current row.
    #[inline]
    pub fn row(&self) -> u32 {
        self.pos.row
    }

    /// The current column.
    #[inline]
    pub fn col(&self) -> u32 {
        self.pos.col
    }

    /// The number of consumed symbols.
    #[inline]
    pub fn count(&self) -> usize {
        self.pos.count
    }

    fn fetch(&mut self) -> Result<Symbol> {
        if self.used == self.size && !self.fill()? {
            return Ok(Symbol::End);
        }

        let b = self.buffer[self.used];

        self.used += 1;

        Ok(Symbol::Byte(b))
    }

    /// Refills the buffer from the start, false if the source is exhausted.
    fn fill(&mut self) -> io::Result<bool> {
        loop {
            match self.source.read(&mut self.buffer) {
                Ok(0) => return Ok(false),
                Ok(n) => {
                    trace!("read {} bytes after {} consumed", n, self.pos.count);

                    self.used = 0;
                    self.size = n;

                    return Ok(true);
                },
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => {},
                Err(e) => return Err(e),
            }
        }
    }
}

impl<'a> fmt::Debug for Stream<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Stream")
            .field("current", &self.sym)
            .field("position", &self.pos)
            .field("buffered", &(self.size - self.used))
            .finish()
    }
}
