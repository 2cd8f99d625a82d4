//! The parser trait and the result-slot unification used to compose parsers.

use std::sync::Arc;

use crate::stream::Stream;
use crate::Result;

mod unify;

pub use self::unify::Unify;

/// A recursive-descent parser over a `Stream`, carrying an inherited attribute of type `S`.
///
/// `parse` tries to recognise a prefix of the stream starting at the current symbol:
///
/// * `Ok(true)` means the parser succeeded, consuming zero or more symbols and writing its
///   result into `out` if a slot was given.
/// * `Ok(false)` is a soft failure: the caller is free to try an alternative. The parser may
///   still have consumed symbols and partially written the slot.
/// * `Err(_)` is a hard failure which aborts the whole parse.
///
/// No backtracking takes place; once a symbol is consumed it stays consumed.
///
/// The attribute `st` is threaded through every parser of a grammar unchanged, reducers
/// created by `all_with` and `any_with` receive it mutably.
///
/// # Example
///
/// ```
/// use descent::{Parser, Stream};
/// use descent::combinators::many;
/// use descent::parsers::accept;
/// use descent::predicate::Digit;
///
/// let mut i = Stream::new(&b"12"[..]).unwrap();
/// let mut s = String::new();
///
/// assert_eq!(many(accept(Digit)).parse(&mut i, Some(&mut s), &mut ()).unwrap(), true);
/// assert_eq!(s, "12");
/// ```
pub trait Parser<S = ()> {
    /// The type of the result slot this parser writes to.
    type Output;

    /// Runs the parser against the stream.
    fn parse(&self, i: &mut Stream, out: Option<&mut Self::Output>, st: &mut S) -> Result<bool>;

    /// Erases the type of the parser.
    ///
    /// Useful to name the type of a grammar rule, or to store alternatives of different types.
    #[inline]
    fn boxed<'a>(self) -> Box<dyn Parser<S, Output=Self::Output> + Send + Sync + 'a>
      where Self: Sized + Send + Sync + 'a {
        Box::new(self)
    }
}

impl<'a, S, P> Parser<S> for &'a P
  where P: Parser<S> + ?Sized {
    type Output = P::Output;

    #[inline]
    fn parse(&self, i: &mut Stream, out: Option<&mut Self::Output>, st: &mut S) -> Result<bool> {
        (**self).parse(i, out, st)
    }
}

impl<S, P> Parser<S> for Box<P>
  where P: Parser<S> + ?Sized {
    type Output = P::Output;

    #[inline]
    fn parse(&self, i: &mut Stream, out: Option<&mut Self::Output>, st: &mut S) -> Result<bool> {
        (**self).parse(i, out, st)
    }
}

impl<S, P> Parser<S> for Arc<P>
  where P: Parser<S> + ?Sized {
    type Output = P::Output;

    #[inline]
    fn parse(&self, i: &mut Stream, out: Option<&mut Self::Output>, st: &mut S) -> Result<bool> {
        (**self).parse(i, out, st)
    }
}
