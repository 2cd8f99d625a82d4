//! Named tests over a single input symbol.
//!
//! Predicates are stateless and carry a human-readable name which ends up in the `expected`
//! part of raised errors. They compose with `|` (either) and `!` (negation):
//!
//! ```
//! use descent::predicate::{Alnum, Char, Predicate};
//! use descent::stream::Symbol;
//!
//! let ident = Alnum | Char(b'_');
//!
//! assert!(ident.test(Symbol::Byte(b'_')));
//! assert!(!ident.test(Symbol::Byte(b'-')));
//! assert_eq!(ident.name(), "(alphanumeric or '_')");
//! assert_eq!((!ident).name(), "~(alphanumeric or '_')");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::ops;

use crate::ascii;
use crate::stream::Symbol;

/// A pure test over one symbol, with a name used for diagnostics.
pub trait Predicate {
    /// Tests the symbol.
    fn test(&self, sym: Symbol) -> bool;

    /// Description of the symbols this predicate holds for.
    fn name(&self) -> Cow<'static, str>;

    /// Holds if either `self` or `q` holds.
    #[inline]
    fn or<Q>(self, q: Q) -> Or<Self, Q>
      where Q: Predicate,
            Self: Sized {
        Or { p: self, q: q }
    }

    /// Holds if `self` does not.
    #[inline]
    fn not(self) -> Not<Self>
      where Self: Sized {
        Not { p: self }
    }
}

impl<'a, P: Predicate + ?Sized> Predicate for &'a P {
    #[inline]
    fn test(&self, sym: Symbol) -> bool {
        (**self).test(sym)
    }

    fn name(&self) -> Cow<'static, str> {
        (**self).name()
    }
}

macro_rules! byte_class {
    ( $( $(#[$attr:meta])* $ty:ident, $name:expr, $f:path; )+ ) => { $(
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $ty;

        impl Predicate for $ty {
            #[inline]
            fn test(&self, sym: Symbol) -> bool {
                match sym {
                    Symbol::Byte(b) => $f(b),
                    Symbol::End     => false,
                }
            }

            fn name(&self) -> Cow<'static, str> {
                Cow::Borrowed($name)
            }
        }

        predicate_ops!($ty);
    )+ }
}

/// Implements `|` and `!` for a predicate type.
macro_rules! predicate_ops {
    ( $ty:ident $(< $($g:ident),+ >)* ) => {
        impl<$($($g: Predicate,)+)* R: Predicate> ops::BitOr<R> for $ty $(<$($g),+>)* {
            type Output = Or<Self, R>;

            #[inline]
            fn bitor(self, r: R) -> Self::Output {
                Or { p: self, q: r }
            }
        }

        impl<$($($g: Predicate),+)*> ops::Not for $ty $(<$($g),+>)* {
            type Output = Not<Self>;

            #[inline]
            fn not(self) -> Self::Output {
                Not { p: self }
            }
        }
    }
}

#[inline]
fn any_byte(_: u8) -> bool {
    true
}

byte_class! {
    /// Any symbol but the end of input.
    Any,   "anything",     any_byte;
    /// ASCII whitespace, see `ascii::is_whitespace`.
    Space, "space",        ascii::is_whitespace;
    /// `0` to `9`.
    Digit, "digit",        ascii::is_digit;
    /// `A` to `Z`.
    Upper, "uppercase",    ascii::is_uppercase;
    /// `a` to `z`.
    Lower, "lowercase",    ascii::is_lowercase;
    /// Uppercase or lowercase.
    Alpha, "alphabetic",   ascii::is_alpha;
    /// Alphabetic or digit.
    Alnum, "alphanumeric", ascii::is_alphanumeric;
    /// `0x20` to `0x7e`.
    Print, "printable",    ascii::is_printable;
}

/// Holds only for the given byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Char(pub u8);

impl Predicate for Char {
    #[inline]
    fn test(&self, sym: Symbol) -> bool {
        sym == Symbol::Byte(self.0)
    }

    fn name(&self) -> Cow<'static, str> {
        Cow::Owned(Symbol::Byte(self.0).to_string())
    }
}

predicate_ops!(Char);

/// Holds only at the end of input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct End;

impl Predicate for End {
    #[inline]
    fn test(&self, sym: Symbol) -> bool {
        sym.is_end()
    }

    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed("end of input")
    }
}

predicate_ops!(End);

/// Predicate combinator holding if either of its parts hold.
///
/// This is created by `Predicate::or` or the `|` operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Or<P, Q> {
    p: P,
    q: Q,
}

impl<P: Predicate, Q: Predicate> Predicate for Or<P, Q> {
    #[inline]
    fn test(&self, sym: Symbol) -> bool {
        self.p.test(sym) || self.q.test(sym)
    }

    fn name(&self) -> Cow<'static, str> {
        Cow::Owned(format!("({} or {})", self.p.name(), self.q.name()))
    }
}

predicate_ops!(Or<P, Q>);

/// Predicate combinator negating its part.
///
/// This is created by `Predicate::not` or the `!` operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Not<P> {
    p: P,
}

impl<P: Predicate> Predicate for Not<P> {
    #[inline]
    fn test(&self, sym: Symbol) -> bool {
        !self.p.test(sym)
    }

    fn name(&self) -> Cow<'static, str> {
        Cow::Owned(format!("~{}", self.p.name()))
    }
}

predicate_ops!(Not<P>);

/// Named predicate over bytes built from a function, never holds at the end of input.
///
/// ```
/// use descent::predicate::{Predicate, satisfy};
/// use descent::stream::Symbol;
///
/// let hex = satisfy("hex digit", |c: u8| c.is_ascii_hexdigit());
///
/// assert!(hex.test(Symbol::Byte(b'f')));
/// assert!(!hex.test(Symbol::End));
/// ```
#[inline]
pub fn satisfy<F>(name: &'static str, f: F) -> Satisfy<F>
  where F: Fn(u8) -> bool {
    Satisfy { name: name, f: f }
}

/// Predicate wrapping a function.
///
/// This is created by `satisfy`.
#[derive(Clone, Copy)]
pub struct Satisfy<F> {
    name: &'static str,
    f:    F,
}

impl<F: Fn(u8) -> bool> Predicate for Satisfy<F> {
    #[inline]
    fn test(&self, sym: Symbol) -> bool {
        match sym {
            Symbol::Byte(b) => (self.f)(b),
            Symbol::End     => false,
        }
    }

    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed(self.name)
    }
}

impl<F> fmt::Debug for Satisfy<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Satisfy").field("name", &self.name).finish()
    }
}

impl<F: Fn(u8) -> bool, R: Predicate> ops::BitOr<R> for Satisfy<F> {
    type Output = Or<Self, R>;

    #[inline]
    fn bitor(self, r: R) -> Self::Output {
        Or { p: self, q: r }
    }
}

impl<F: Fn(u8) -> bool> ops::Not for Satisfy<F> {
    type Output = Not<Self>;

    #[inline]
    fn not(self) -> Self::Output {
        Not { p: self }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn symbols() -> Vec<Symbol> {
        (0..=255u8).map(Symbol::Byte).chain(Some(Symbol::End)).collect()
    }

    #[test]
    fn or_and_not_laws() {
        let p = Digit;
        let q = Char(b'x');

        for s in symbols() {
            assert_eq!((p | q).test(s), p.test(s) || q.test(s));
            assert_eq!(p.or(q).test(s), p.test(s) || q.test(s));
            assert_eq!((!p).test(s), !p.test(s));
            assert_eq!(p.not().test(s), !p.test(s));
        }
    }

    #[test]
    fn names() {
        assert_eq!(Any.name(), "anything");
        assert_eq!(Space.name(), "space");
        assert_eq!(Digit.name(), "digit");
        assert_eq!(Upper.name(), "uppercase");
        assert_eq!(Lower.name(), "lowercase");
        assert_eq!(Alpha.name(), "alphabetic");
        assert_eq!(Alnum.name(), "alphanumeric");
        assert_eq!(Print.name(), "printable");
        assert_eq!(Char(b',').name(), "','");
        assert_eq!(End.name(), "end of input");
        assert_eq!((Upper | Char(b'_')).name(), "(uppercase or '_')");
        assert_eq!((!(Digit | Space)).name(), "~(digit or space)");
    }

    #[test]
    fn end_of_input() {
        assert!(End.test(Symbol::End));
        assert!(!End.test(Symbol::Byte(0)));
        assert!(!Any.test(Symbol::End));
        assert!(Any.test(Symbol::Byte(0)));
        assert!((!Any).test(Symbol::End));
        assert!(!Char(0).test(Symbol::End));
    }

    #[test]
    fn by_reference() {
        let p = Lower | Digit;

        assert!((&p).test(Symbol::Byte(b'7')));
        assert_eq!((&p).name(), "(lowercase or digit)");
    }
}
