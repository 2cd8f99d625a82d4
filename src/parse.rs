use std::io::Read;

use log::debug;

use crate::stream::Stream;
use crate::types::Parser;
use crate::Result;

/// Runs the given parser on an already created stream, with the inherited attribute `st`.
///
/// Returns `Ok(None)` if the parser failed softly. The stream is left where the parser stopped,
/// so a grammar can be run repeatedly over one stream.
///
/// ```
/// use descent::parse_stream;
/// use descent::prelude::*;
///
/// let line  = sequence(some(accept(Alpha)), discard(accept(Char(b'\n'))));
/// let mut i = Stream::new(&b"foo\nbar\n"[..]).unwrap();
///
/// assert_eq!(parse_stream(&line, &mut i, &mut ()).unwrap(), Some("foo".to_owned()));
/// assert_eq!(parse_stream(&line, &mut i, &mut ()).unwrap(), Some("bar".to_owned()));
/// assert_eq!(parse_stream(&line, &mut i, &mut ()).unwrap(), None);
/// ```
pub fn parse_stream<S, P>(parser: &P, i: &mut Stream, st: &mut S) -> Result<Option<P::Output>>
  where P:         Parser<S> + ?Sized,
        P::Output: Default {
    let mut out: P::Output = Default::default();

    debug!("parse started at {}:{}", i.row(), i.col());

    let ok = parser.parse(i, Some(&mut out), st)?;

    debug!("parse {} after {} symbols", if ok { "succeeded" } else { "failed" }, i.count());

    Ok(if ok { Some(out) } else { None })
}

/// Runs the given parser on the supplied finite input.
///
/// ```
/// use descent::parse_only;
/// use descent::prelude::*;
///
/// assert_eq!(parse_only(&some(accept(Digit)), b"123foobar").unwrap(), Some("123".to_owned()));
/// assert_eq!(parse_only(&some(accept(Digit)), b"foobar").unwrap(), None);
/// ```
///
/// This will not force the parser to consume all available input, any remainder is ignored. To
/// force a parser to consume all its input, expect `End` at the end like this:
///
/// ```
/// use descent::parse_only;
/// use descent::prelude::*;
///
/// let p = sequence(accept_str("pattern"), discard(expect(End)));
///
/// assert_eq!(parse_only(&p, b"pattern").unwrap(), Some("pattern".to_owned()));
/// assert_eq!(parse_only(&p, b"pattern and more").unwrap_err().to_string(),
///            "expected end of input found ' ' at line 1, column 8");
/// ```
pub fn parse_only<P>(parser: &P, input: &[u8]) -> Result<Option<P::Output>>
  where P:         Parser + ?Sized,
        P::Output: Default {
    parse_stream(parser, &mut Stream::new(input)?, &mut ())
}

/// Runs the given parser on a reader, returning the result and the number of consumed symbols.
///
/// ```
/// use descent::parse_reader;
/// use descent::prelude::*;
///
/// let words = sep_by(some(accept(Alpha)), accept(Char(b' ')));
/// let r     = parse_reader(&words, &b"some words!"[..], &mut ()).unwrap();
///
/// assert_eq!(r, (Some("somewords".to_owned()), 10));
/// ```
pub fn parse_reader<S, P, R>(parser: &P, source: R, st: &mut S) -> Result<(Option<P::Output>, usize)>
  where P:         Parser<S> + ?Sized,
        P::Output: Default,
        R:         Read {
    let mut i = Stream::new(source)?;
    let r     = parse_stream(parser, &mut i, st)?;

    Ok((r, i.count()))
}

#[cfg(test)]
mod test {
    use std::io;

    use super::*;
    use crate::combinators::{discard, sequence, some};
    use crate::lift::all;
    use crate::parsers::{accept, expect};
    use crate::predicate::{Char, Digit, End};
    use crate::Error;

    #[test]
    fn parse_only_test() {
        let p = all(|n: &mut u32, (d,): (String,)| *n = d.parse().unwrap(), (some(accept(Digit)),));

        assert_eq!(parse_only(&p, b"123").unwrap(), Some(123));
        assert_eq!(parse_only(&p, b"x").unwrap(), None);
        assert_eq!(parse_only(&p, b"").unwrap(), None);
    }

    #[test]
    fn parse_only_error() {
        let p = sequence(accept(Digit), discard(expect(End)));

        match parse_only(&p, b"12") {
            Err(Error::Parse(e)) => assert_eq!((e.row, e.col, e.expected.as_str()), (1, 2, "end of input")),
            r                    => panic!("unexpected {:?}", r),
        }
    }

    #[test]
    fn parse_dyn() {
        let p: Box<dyn Parser<Output=String> + Send + Sync> = Box::new(some(accept(Digit)));

        assert_eq!(parse_only(&*p, b"42").unwrap(), Some("42".to_owned()));
    }

    #[test]
    fn parse_reader_io_error() {
        struct Fails;

        impl Read for Fails {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
        }

        match parse_reader(&accept(Char(b'a')), Fails, &mut ()) {
            Err(Error::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            r                 => panic!("unexpected {:?}", r),
        }
    }
}
