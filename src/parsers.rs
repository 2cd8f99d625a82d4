//! Basic parsers.
//!
//! Recognisers append each matched byte to their `String` result as the `char` with the same
//! value, ie. the text is the Latin-1 reading of the input. ASCII input reads as itself, and
//! the matched bytes are recovered exactly with `text.chars().map(|c| c as u8)`:
//!
//! ```
//! use descent::parse_only;
//! use descent::prelude::*;
//!
//! let text = parse_only(&many(accept(Any)), "é".as_bytes()).unwrap().unwrap();
//!
//! assert_eq!(text, "\u{c3}\u{a9}");
//! assert_eq!(text.chars().map(|c| c as u8).collect::<Vec<_>>(), "é".as_bytes());
//! ```

use std::borrow::Cow;

use crate::predicate::Predicate;
use crate::stream::{Stream, Symbol};
use crate::types::Parser;
use crate::Result;

/// Appends `sym` as a Latin-1 character.
#[inline]
fn push(out: Option<&mut String>, sym: Symbol) {
    if let (Some(s), Symbol::Byte(b)) = (out, sym) {
        s.push(char::from(b));
    }
}

/// Matches a symbol satisfying `p`, appending it to the result.
///
/// Fails softly without consuming anything if the current symbol does not match. Matching the
/// end of input appends nothing and consumes nothing.
///
/// ```
/// use descent::{Parser, Stream};
/// use descent::parsers::accept;
/// use descent::predicate::Digit;
///
/// let mut i = Stream::new(&b"1a"[..]).unwrap();
/// let mut s = String::new();
///
/// assert_eq!(accept(Digit).parse(&mut i, Some(&mut s), &mut ()).unwrap(), true);
/// assert_eq!(accept(Digit).parse(&mut i, Some(&mut s), &mut ()).unwrap(), false);
/// assert_eq!(s, "1");
/// assert_eq!(i.count(), 1);
/// ```
#[inline]
pub fn accept<P: Predicate>(p: P) -> Accept<P> {
    Accept { p: p }
}

/// Parser matching a single symbol.
///
/// This is created by `accept`.
#[derive(Clone, Copy, Debug)]
pub struct Accept<P> {
    p: P,
}

impl<S, P: Predicate> Parser<S> for Accept<P> {
    type Output = String;

    #[inline]
    fn parse(&self, i: &mut Stream, out: Option<&mut String>, _: &mut S) -> Result<bool> {
        let sym = i.current();

        if !self.p.test(sym) {
            return Ok(false);
        }

        push(out, sym);
        i.advance()?;

        Ok(true)
    }
}

/// Matches a symbol satisfying `p`, appending it to the result.
///
/// Raises an error naming `p` if the current symbol does not match.
///
/// ```
/// use descent::{Parser, Stream};
/// use descent::parsers::expect;
/// use descent::predicate::Digit;
///
/// let mut i = Stream::new(&b"x"[..]).unwrap();
/// let e     = expect(Digit).parse(&mut i, None, &mut ()).unwrap_err();
///
/// assert_eq!(e.to_string(), "expected digit found 'x' at line 1, column 1");
/// ```
#[inline]
pub fn expect<P: Predicate>(p: P) -> Expect<P> {
    Expect { p: p }
}

/// Parser matching a single symbol or raising an error.
///
/// This is created by `expect`.
#[derive(Clone, Copy, Debug)]
pub struct Expect<P> {
    p: P,
}

impl<S, P: Predicate> Parser<S> for Expect<P> {
    type Output = String;

    #[inline]
    fn parse(&self, i: &mut Stream, out: Option<&mut String>, _: &mut S) -> Result<bool> {
        let sym = i.current();

        if !self.p.test(sym) {
            return i.raise("expected", &self.p.name());
        }

        push(out, sym);
        i.advance()?;

        Ok(true)
    }
}

/// Matches the bytes of `lit` in order, appending them to the result.
///
/// Fails softly if the first byte does not match. Once the first byte matched any mismatch
/// raises an error naming the whole literal.
///
/// ```
/// use descent::parse_only;
/// use descent::prelude::*;
///
/// let p = choice(accept_str("let"), accept_str("fn"));
///
/// assert_eq!(parse_only(&p, b"fn").unwrap(), Some("fn".to_owned()));
/// assert_eq!(parse_only(&p, b"if").unwrap(), None);
/// assert_eq!(parse_only(&p, b"lex").unwrap_err().to_string(),
///            "expected \"let\" found 'x' at line 1, column 3");
/// ```
#[inline]
pub fn accept_str(lit: &'static str) -> Literal {
    Literal { lit: lit, soft: true }
}

/// Matches the bytes of `lit` in order, raising an error on any mismatch.
#[inline]
pub fn expect_str(lit: &'static str) -> Literal {
    Literal { lit: lit, soft: false }
}

/// Parser matching a literal string.
///
/// This is created by `accept_str` and `expect_str`.
#[derive(Clone, Copy, Debug)]
pub struct Literal {
    lit:  &'static str,
    soft: bool,
}

impl Literal {
    fn name(&self) -> Cow<'static, str> {
        Cow::Owned(format!("{:?}", self.lit))
    }
}

impl<S> Parser<S> for Literal {
    type Output = String;

    fn parse(&self, i: &mut Stream, mut out: Option<&mut String>, _: &mut S) -> Result<bool> {
        for (n, &b) in self.lit.as_bytes().iter().enumerate() {
            let sym = i.current();

            if sym != Symbol::Byte(b) {
                if n == 0 && self.soft {
                    return Ok(false);
                }

                return i.raise("expected", &self.name());
            }

            push(out.as_deref_mut(), sym);
            i.advance()?;
        }

        Ok(true)
    }
}

/// Always succeeds, consuming nothing.
#[inline]
pub fn succ() -> Succ {
    Succ
}

/// Parser which always succeeds.
///
/// This is created by `succ`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Succ;

impl<S> Parser<S> for Succ {
    type Output = ();

    #[inline]
    fn parse(&self, _: &mut Stream, _: Option<&mut ()>, _: &mut S) -> Result<bool> {
        Ok(true)
    }
}

/// Always fails softly, consuming nothing.
#[inline]
pub fn fail() -> Fail {
    Fail
}

/// Parser which always fails.
///
/// This is created by `fail`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Fail;

impl<S> Parser<S> for Fail {
    type Output = ();

    #[inline]
    fn parse(&self, _: &mut Stream, _: Option<&mut ()>, _: &mut S) -> Result<bool> {
        Ok(false)
    }
}
