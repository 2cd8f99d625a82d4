//! Lifting of reducer functions over groups of parsers.
//!
//! The parsers of a group each get a fresh slot of their own, and the reducer combines the
//! filled slots into the result slot of the group:
//!
//! ```
//! use descent::parse_only;
//! use descent::prelude::*;
//!
//! fn pair(out: &mut (u32, u32), (a, _, b): (String, (), String)) {
//!     *out = (a.parse().unwrap(), b.parse().unwrap());
//! }
//!
//! let number = some(accept(Digit));
//! let p      = all(pair, (number.clone(), discard(accept(Char(b'x'))), number));
//!
//! assert_eq!(parse_only(&p, b"640x480").unwrap(), Some((640, 480)));
//! ```
//!
//! Groups are tuples of up to eight parsers, the result types of the parsers must implement
//! `Default`. When the group runs without a result slot the reducer is called on a temporary
//! default value, which keeps reducers with side effects on the inherited attribute working
//! inside `discard`.

use std::fmt;
use std::marker::PhantomData;

use ::either::Either;

use crate::stream::Stream;
use crate::types::Parser;
use crate::Result;

/// A tuple of parsers run as a group by `all` and `any`.
pub trait Parsers<S> {
    /// The tuple of the result slots of the parsers.
    type Outputs: Default;

    /// Runs every parser in order into its slot, stopping at the first failure.
    fn all(&self, i: &mut Stream, outs: &mut Self::Outputs, st: &mut S) -> Result<bool>;

    /// Runs the parsers in order until one succeeds, returning its index.
    fn any(&self, i: &mut Stream, outs: &mut Self::Outputs, st: &mut S) -> Result<Option<usize>>;
}

impl<S> Parsers<S> for () {
    type Outputs = ();

    #[inline]
    fn all(&self, _: &mut Stream, _: &mut (), _: &mut S) -> Result<bool> {
        Ok(true)
    }

    #[inline]
    fn any(&self, _: &mut Stream, _: &mut (), _: &mut S) -> Result<Option<usize>> {
        Ok(None)
    }
}

macro_rules! parsers_tuple {
    ( $( $p:ident $n:tt ),+ ) => {
        impl<S, $($p),+> Parsers<S> for ($($p,)+)
          where $($p: Parser<S>, <$p as Parser<S>>::Output: Default),+ {
            type Outputs = ($(<$p as Parser<S>>::Output,)+);

            #[inline]
            fn all(&self, i: &mut Stream, outs: &mut Self::Outputs, st: &mut S) -> Result<bool> {
                $(
                    if !self.$n.parse(i, Some(&mut outs.$n), st)? {
                        return Ok(false);
                    }
                )+

                Ok(true)
            }

            #[inline]
            fn any(&self, i: &mut Stream, outs: &mut Self::Outputs, st: &mut S) -> Result<Option<usize>> {
                $(
                    if self.$n.parse(i, Some(&mut outs.$n), st)? {
                        return Ok(Some($n));
                    }
                )+

                Ok(None)
            }
        }
    }
}

parsers_tuple!(A 0);
parsers_tuple!(A 0, B 1);
parsers_tuple!(A 0, B 1, C 2);
parsers_tuple!(A 0, B 1, C 2, D 3);
parsers_tuple!(A 0, B 1, C 2, D 3, E 4);
parsers_tuple!(A 0, B 1, C 2, D 3, E 4, F 5);
parsers_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6);
parsers_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);

/// Runs all parsers of `ps` in order, and on success calls `f` with the result slot and the
/// results of the parsers.
///
/// Fails as soon as one of the parsers fails, `f` is then never called.
///
/// ```
/// use descent::parse_only;
/// use descent::prelude::*;
///
/// let int = all(|n: &mut i64, (d,): (String,)| *n = d.parse().unwrap(), (some(accept(Digit)),));
///
/// assert_eq!(parse_only(&int, b"42").unwrap(), Some(42));
/// assert_eq!(parse_only(&int, b"x").unwrap(), None);
/// ```
#[inline]
pub fn all<T, A, F, Ps>(f: F, ps: Ps) -> All<F, Ps, T>
  where F: Fn(&mut T, A) {
    All { f: f, ps: ps, _t: PhantomData }
}

/// Like `all`, but `f` also receives the inherited attribute.
///
/// ```
/// use descent::parse_stream;
/// use descent::prelude::*;
///
/// let word = all_with(|_: &mut (), (w,): (String,), seen: &mut Vec<String>| seen.push(w),
///                     (lexeme(some(accept(Alpha))),));
///
/// let mut i    = Stream::new(&b"to be"[..]).unwrap();
/// let mut seen = Vec::new();
///
/// assert!(parse_stream(&many(word), &mut i, &mut seen).unwrap().is_some());
/// assert_eq!(seen, ["to", "be"]);
/// ```
#[inline]
pub fn all_with<T, A, S, F, Ps>(f: F, ps: Ps) -> AllWith<F, Ps, T>
  where F: Fn(&mut T, A, &mut S) {
    AllWith { f: f, ps: ps, _t: PhantomData }
}

/// Tries the parsers of `ps` in order until one succeeds, then calls `f` with the result slot,
/// the index of the successful parser and the results.
///
/// Only the slot of the successful parser is filled, the others keep their default values.
/// Fails if all parsers fail.
///
/// ```
/// use descent::parse_only;
/// use descent::prelude::*;
///
/// #[derive(Debug, PartialEq)]
/// enum Token { Number(String), Name(String) }
///
/// impl Default for Token {
///     fn default() -> Self { Token::Name(String::new()) }
/// }
///
/// let token = any(|t: &mut Token, n: usize, (num, name): (String, String)| {
///     *t = if n == 0 { Token::Number(num) } else { Token::Name(name) };
/// }, (some(accept(Digit)), some(accept(Alpha))));
///
/// assert_eq!(parse_only(&token, b"12").unwrap(), Some(Token::Number("12".to_owned())));
/// assert_eq!(parse_only(&token, b"ab").unwrap(), Some(Token::Name("ab".to_owned())));
/// assert_eq!(parse_only(&token, b"+").unwrap(), None);
/// ```
#[inline]
pub fn any<T, A, F, Ps>(f: F, ps: Ps) -> Any<F, Ps, T>
  where F: Fn(&mut T, usize, A) {
    Any { f: f, ps: ps, _t: PhantomData }
}

/// Like `any`, but `f` also receives the inherited attribute.
#[inline]
pub fn any_with<T, A, S, F, Ps>(f: F, ps: Ps) -> AnyWith<F, Ps, T>
  where F: Fn(&mut T, usize, A, &mut S) {
    AnyWith { f: f, ps: ps, _t: PhantomData }
}

/// Runs `l`, or `r` if `l` failed, storing the result of the successful one.
///
/// The result stays `None` if both fail.
///
/// ```
/// use descent::parse_only;
/// use descent::prelude::*;
/// use descent::Either;
///
/// let p = either(some(accept(Digit)), discard(accept(Char(b'_'))));
///
/// assert_eq!(parse_only(&p, b"12").unwrap(), Some(Some(Either::Left("12".to_owned()))));
/// assert_eq!(parse_only(&p, b"_").unwrap(), Some(Some(Either::Right(()))));
/// ```
#[inline]
pub fn either<L, R>(l: L, r: R) -> EitherOf<L, R> {
    EitherOf { l: l, r: r }
}

macro_rules! reduce {
    ( $f:expr, $out:expr, $($arg:expr),* ) => {
        match $out {
            Some(o) => ($f)(o, $($arg),*),
            None    => ($f)(&mut T::default(), $($arg),*),
        }
    }
}

/// Parser running a group of parsers in sequence.
///
/// This is created by `all`.
pub struct All<F, Ps, T> {
    f:  F,
    ps: Ps,
    _t: PhantomData<fn() -> T>,
}

impl<S, T, F, Ps> Parser<S> for All<F, Ps, T>
  where Ps: Parsers<S>,
        F:  Fn(&mut T, Ps::Outputs),
        T:  Default {
    type Output = T;

    #[inline]
    fn parse(&self, i: &mut Stream, out: Option<&mut T>, st: &mut S) -> Result<bool> {
        let mut rs: Ps::Outputs = Default::default();

        if !self.ps.all(i, &mut rs, st)? {
            return Ok(false);
        }

        reduce!(self.f, out, rs);

        Ok(true)
    }
}

/// Parser running a group of parsers in sequence, with access to the inherited attribute.
///
/// This is created by `all_with`.
pub struct AllWith<F, Ps, T> {
    f:  F,
    ps: Ps,
    _t: PhantomData<fn() -> T>,
}

impl<S, T, F, Ps> Parser<S> for AllWith<F, Ps, T>
  where Ps: Parsers<S>,
        F:  Fn(&mut T, Ps::Outputs, &mut S),
        T:  Default {
    type Output = T;

    #[inline]
    fn parse(&self, i: &mut Stream, out: Option<&mut T>, st: &mut S) -> Result<bool> {
        let mut rs: Ps::Outputs = Default::default();

        if !self.ps.all(i, &mut rs, st)? {
            return Ok(false);
        }

        reduce!(self.f, out, rs, st);

        Ok(true)
    }
}

/// Parser running the first successful parser of a group.
///
/// This is created by `any`.
pub struct Any<F, Ps, T> {
    f:  F,
    ps: Ps,
    _t: PhantomData<fn() -> T>,
}

impl<S, T, F, Ps> Parser<S> for Any<F, Ps, T>
  where Ps: Parsers<S>,
        F:  Fn(&mut T, usize, Ps::Outputs),
        T:  Default {
    type Output = T;

    #[inline]
    fn parse(&self, i: &mut Stream, out: Option<&mut T>, st: &mut S) -> Result<bool> {
        let mut rs: Ps::Outputs = Default::default();

        match self.ps.any(i, &mut rs, st)? {
            Some(n) => {
                reduce!(self.f, out, n, rs);

                Ok(true)
            },
            None => Ok(false),
        }
    }
}

/// Parser running the first successful parser of a group, with access to the inherited
/// attribute.
///
/// This is created by `any_with`.
pub struct AnyWith<F, Ps, T> {
    f:  F,
    ps: Ps,
    _t: PhantomData<fn() -> T>,
}

impl<S, T, F, Ps> Parser<S> for AnyWith<F, Ps, T>
  where Ps: Parsers<S>,
        F:  Fn(&mut T, usize, Ps::Outputs, &mut S),
        T:  Default {
    type Output = T;

    #[inline]
    fn parse(&self, i: &mut Stream, out: Option<&mut T>, st: &mut S) -> Result<bool> {
        let mut rs: Ps::Outputs = Default::default();

        match self.ps.any(i, &mut rs, st)? {
            Some(n) => {
                reduce!(self.f, out, n, rs, st);

                Ok(true)
            },
            None => Ok(false),
        }
    }
}

macro_rules! lifted_impls {
    ( $($ty:ident),+ ) => { $(
        impl<F: Clone, Ps: Clone, T> Clone for $ty<F, Ps, T> {
            fn clone(&self) -> Self {
                $ty { f: self.f.clone(), ps: self.ps.clone(), _t: PhantomData }
            }
        }

        impl<F, Ps: fmt::Debug, T> fmt::Debug for $ty<F, Ps, T> {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.debug_struct(stringify!($ty)).field("ps", &self.ps).finish()
            }
        }
    )+ }
}

lifted_impls!(All, AllWith, Any, AnyWith);

/// Parser yielding which of two parsers succeeded.
///
/// This is created by `either`.
#[derive(Clone, Copy, Debug)]
pub struct EitherOf<L, R> {
    l: L,
    r: R,
}

impl<S, L, R> Parser<S> for EitherOf<L, R>
  where L:         Parser<S>,
        R:         Parser<S>,
        L::Output: Default,
        R::Output: Default {
    type Output = Option<Either<L::Output, R::Output>>;

    fn parse(&self, i: &mut Stream, out: Option<&mut Self::Output>, st: &mut S) -> Result<bool> {
        let mut l: L::Output = Default::default();

        if self.l.parse(i, Some(&mut l), st)? {
            if let Some(o) = out {
                *o = Some(Either::Left(l));
            }

            return Ok(true);
        }

        let mut r: R::Output = Default::default();

        if self.r.parse(i, Some(&mut r), st)? {
            if let Some(o) = out {
                *o = Some(Either::Right(r));
            }

            return Ok(true);
        }

        Ok(false)
    }
}
