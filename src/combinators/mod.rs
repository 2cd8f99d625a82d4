//! Basic combinators.
//!
//! None of the combinators restore consumed input on failure: a soft failure after consuming
//! symbols leaves the stream where the failing parser stopped. Grammars are expected to be
//! written so the first symbol decides which alternative to take.

mod fix;

pub use self::fix::{Fix, Recurse, fix};

use log::{debug, trace};

use crate::parsers::{Accept, Succ, accept, succ};
use crate::predicate::Space;
use crate::stream::Stream;
use crate::types::{Parser, Unify};
use crate::Result;

/// Runs `a`, and then `b` if `a` succeeded. Both write to the shared result slot, see `Unify`.
///
/// Succeeds if both succeed. If `a` fails `b` is never run; if `b` fails the symbols consumed by
/// `a` stay consumed.
///
/// ```
/// use descent::parse_only;
/// use descent::prelude::*;
///
/// let p = sequence(accept(Char(b'a')), accept(Digit));
///
/// assert_eq!(parse_only(&p, b"a1").unwrap(), Some("a1".to_owned()));
/// assert_eq!(parse_only(&p, b"1a").unwrap(), None);
/// ```
#[inline]
pub fn sequence<A, B>(a: A, b: B) -> Sequence<A, B> {
    Sequence::new(a, b)
}

/// Parser running two parsers in sequence.
///
/// This is created by `sequence`.
#[derive(Clone, Copy, Debug)]
pub struct Sequence<A, B> {
    a: A,
    b: B,
}

impl<A, B> Sequence<A, B> {
    pub(crate) fn new(a: A, b: B) -> Self {
        Sequence { a: a, b: b }
    }
}

impl<S, A, B> Parser<S> for Sequence<A, B>
  where A:         Parser<S>,
        B:         Parser<S>,
        A::Output: Unify<B::Output> {
    type Output = <A::Output as Unify<B::Output>>::Output;

    #[inline]
    fn parse(&self, i: &mut Stream, mut out: Option<&mut Self::Output>, st: &mut S) -> Result<bool> {
        Ok(self.a.parse(i, out.as_deref_mut().and_then(<A::Output as Unify<B::Output>>::left), st)?
            && self.b.parse(i, out.and_then(<A::Output as Unify<B::Output>>::right), st)?)
    }
}

/// Runs `a`, and then `b` if `a` failed softly. Both write to the shared result slot, see
/// `Unify`.
///
/// Succeeds if either succeeds. If `a` succeeds `b` is never run. `b` starts wherever `a` left
/// the stream.
///
/// ```
/// use descent::parse_only;
/// use descent::prelude::*;
///
/// let p = choice(accept(Digit), accept(Char(b'-')));
///
/// assert_eq!(parse_only(&p, b"-").unwrap(), Some("-".to_owned()));
/// assert_eq!(parse_only(&p, b"3").unwrap(), Some("3".to_owned()));
/// assert_eq!(parse_only(&p, b"+").unwrap(), None);
/// ```
#[inline]
pub fn choice<A, B>(a: A, b: B) -> Choice<A, B> {
    Choice::new(a, b)
}

/// Parser running the second parser only if the first fails.
///
/// This is created by `choice`.
#[derive(Clone, Copy, Debug)]
pub struct Choice<A, B> {
    a: A,
    b: B,
}

impl<A, B> Choice<A, B> {
    pub(crate) fn new(a: A, b: B) -> Self {
        Choice { a: a, b: b }
    }
}

impl<S, A, B> Parser<S> for Choice<A, B>
  where A:         Parser<S>,
        B:         Parser<S>,
        A::Output: Unify<B::Output> {
    type Output = <A::Output as Unify<B::Output>>::Output;

    #[inline]
    fn parse(&self, i: &mut Stream, mut out: Option<&mut Self::Output>, st: &mut S) -> Result<bool> {
        Ok(self.a.parse(i, out.as_deref_mut().and_then(<A::Output as Unify<B::Output>>::left), st)?
            || self.b.parse(i, out.and_then(<A::Output as Unify<B::Output>>::right), st)?)
    }
}

/// Runs `p` repeatedly until it fails, always succeeding. Every iteration writes to the same slot.
///
/// An iteration which succeeds without consuming any symbol also ends the repetition, as it
/// would succeed forever.
///
/// ```
/// use descent::parse_only;
/// use descent::prelude::*;
///
/// assert_eq!(parse_only(&many(accept(Digit)), b"123a").unwrap(), Some("123".to_owned()));
/// assert_eq!(parse_only(&many(accept(Digit)), b"abc").unwrap(), Some(String::new()));
/// ```
#[inline]
pub fn many<P>(p: P) -> Many<P> {
    Many::new(p)
}

/// Parser repeating its inner parser.
///
/// This is created by `many`.
#[derive(Clone, Copy, Debug)]
pub struct Many<P> {
    p: P,
}

impl<P> Many<P> {
    pub(crate) fn new(p: P) -> Self {
        Many { p: p }
    }
}

impl<S, P> Parser<S> for Many<P>
  where P: Parser<S> {
    type Output = P::Output;

    #[inline]
    fn parse(&self, i: &mut Stream, mut out: Option<&mut Self::Output>, st: &mut S) -> Result<bool> {
        loop {
            let n = i.count();

            if !self.p.parse(i, out.as_deref_mut(), st)? || i.count() == n {
                return Ok(true);
            }
        }
    }
}

/// Runs `p` without a result slot, so `p` only recognises.
///
/// The resulting parser has no result, making it composable with any other parser.
///
/// ```
/// use descent::parse_only;
/// use descent::prelude::*;
///
/// let p = sequence(discard(accept(Char(b'#'))), accept(Digit));
///
/// assert_eq!(parse_only(&p, b"#4").unwrap(), Some("4".to_owned()));
/// ```
#[inline]
pub fn discard<P>(p: P) -> Discard<P> {
    Discard::new(p)
}

/// Parser dropping the result of its inner parser.
///
/// This is created by `discard`.
#[derive(Clone, Copy, Debug)]
pub struct Discard<P> {
    p: P,
}

impl<P> Discard<P> {
    pub(crate) fn new(p: P) -> Self {
        Discard { p: p }
    }
}

impl<S, P> Parser<S> for Discard<P>
  where P: Parser<S> {
    type Output = ();

    #[inline]
    fn parse(&self, i: &mut Stream, _: Option<&mut ()>, st: &mut S) -> Result<bool> {
        self.p.parse(i, None, st)
    }
}

/// Runs `p`, succeeding even if `p` fails softly.
///
/// ```
/// use descent::parse_only;
/// use descent::prelude::*;
///
/// let p = sequence(option(accept(Char(b'-'))), accept(Digit));
///
/// assert_eq!(parse_only(&p, b"-1").unwrap(), Some("-1".to_owned()));
/// assert_eq!(parse_only(&p, b"1").unwrap(), Some("1".to_owned()));
/// ```
#[inline]
pub fn option<P>(p: P) -> Choice<P, Succ> {
    choice(p, succ())
}

/// Runs `p` at least once and then until it fails.
///
/// ```
/// use descent::parse_only;
/// use descent::prelude::*;
///
/// assert_eq!(parse_only(&some(accept(Digit)), b"12").unwrap(), Some("12".to_owned()));
/// assert_eq!(parse_only(&some(accept(Digit)), b"a").unwrap(), None);
/// ```
#[inline]
pub fn some<P: Clone>(p: P) -> Sequence<P, Many<P>> {
    sequence(p.clone(), many(p))
}

/// One or more `p` separated by `sep`, the results of `sep` are discarded.
///
/// A trailing separator which is not followed by `p` stays consumed, the repetition ends there.
///
/// ```
/// use descent::parse_only;
/// use descent::prelude::*;
///
/// let p = sep_by1(accept(Digit), accept(Char(b',')));
///
/// assert_eq!(parse_only(&p, b"1,2,3").unwrap(), Some("123".to_owned()));
/// assert_eq!(parse_only(&p, b";").unwrap(), None);
/// ```
#[inline]
pub fn sep_by1<P: Clone, Q>(p: P, sep: Q) -> Sequence<P, Many<Sequence<Discard<Q>, P>>> {
    sequence(p.clone(), many(sequence(discard(sep), p)))
}

/// Zero or more `p` separated by `sep`, see `sep_by1`.
#[inline]
pub fn sep_by<P: Clone, Q>(p: P, sep: Q) -> Choice<Sequence<P, Many<Sequence<Discard<Q>, P>>>, Succ> {
    option(sep_by1(p, sep))
}

/// Runs `p` and then skips any whitespace following it.
///
/// ```
/// use descent::parse_only;
/// use descent::prelude::*;
///
/// let p = some(lexeme(some(accept(Digit))));
///
/// assert_eq!(parse_only(&p, b"12  3\n4").unwrap(), Some("1234".to_owned()));
/// ```
#[inline]
pub fn lexeme<P>(p: P) -> Sequence<P, Discard<Many<Accept<Space>>>> {
    sequence(p, discard(many(accept(Space))))
}

/// Runs `p`, turning a soft failure into an error stating that `expected` was expected.
///
/// Used to commit to a branch of the grammar once its first symbol has been seen.
///
/// ```
/// use descent::parse_only;
/// use descent::prelude::*;
///
/// let p = sequence(accept(Char(b'(')), strict("expression", some(accept(Digit))));
/// let e = parse_only(&p, b"(x").unwrap_err();
///
/// assert_eq!(e.to_string(), "expected expression found 'x' at line 1, column 2");
/// ```
#[inline]
pub fn strict<P>(expected: &'static str, p: P) -> Strict<P> {
    Strict { expected: expected, p: p }
}

/// Parser raising an error on soft failure.
///
/// This is created by `strict`.
#[derive(Clone, Copy, Debug)]
pub struct Strict<P> {
    expected: &'static str,
    p:        P,
}

impl<S, P> Parser<S> for Strict<P>
  where P: Parser<S> {
    type Output = P::Output;

    #[inline]
    fn parse(&self, i: &mut Stream, out: Option<&mut Self::Output>, st: &mut S) -> Result<bool> {
        if self.p.parse(i, out, st)? {
            Ok(true)
        } else {
            i.raise("expected", self.expected)
        }
    }
}

/// Names the rule `p`.
///
/// The parser is otherwise transparent. Entering and leaving the rule is logged at `trace`
/// level, and an error raised inside it is logged at `debug` level with the rule name, so a
/// failing parse can be followed through the grammar with `RUST_LOG=descent=trace`.
///
/// ```
/// use descent::parse_only;
/// use descent::prelude::*;
///
/// let number = define("number", some(accept(Digit)));
///
/// assert_eq!(number.name(), "number");
/// assert_eq!(parse_only(&number, b"42").unwrap(), Some("42".to_owned()));
/// ```
#[inline]
pub fn define<P>(name: &'static str, p: P) -> Define<P> {
    Define { name: name, p: p }
}

/// Named grammar rule.
///
/// This is created by `define`.
#[derive(Clone, Copy, Debug)]
pub struct Define<P> {
    name: &'static str,
    p:    P,
}

impl<P> Define<P> {
    /// The name of the rule.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<S, P> Parser<S> for Define<P>
  where P: Parser<S> {
    type Output = P::Output;

    fn parse(&self, i: &mut Stream, out: Option<&mut Self::Output>, st: &mut S) -> Result<bool> {
        trace!("{} at {}:{}", self.name, i.row(), i.col());

        match self.p.parse(i, out, st) {
            Ok(r)  => {
                trace!("{} {} at {}:{}", self.name, if r { "matched" } else { "failed" }, i.row(), i.col());

                Ok(r)
            },
            Err(e) => {
                debug!("in {}: {}", self.name, e);

                Err(e)
            },
        }
    }
}
