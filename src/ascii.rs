//! Utilities for dealing with ASCII data in `u8` format.
//!
//! Classification follows the C locale: a byte belongs to a class if the corresponding
//! `<ctype.h>` function would accept it.

use bitflags::bitflags;
use conv::ValueFrom;

bitflags! {
    /// Character classes of a byte.
    pub struct Class: u8 {
        /// `' '`, `\t`, `\n`, `\v`, `\f` and `\r`.
        const SPACE = 0b0000_0001;
        /// `0` to `9`.
        const DIGIT = 0b0000_0010;
        /// `A` to `Z`.
        const UPPER = 0b0000_0100;
        /// `a` to `z`.
        const LOWER = 0b0000_1000;
        /// `0x20` to `0x7e`.
        const PRINT = 0b0001_0000;
        /// Uppercase or lowercase.
        const ALPHA = Self::UPPER.bits | Self::LOWER.bits;
        /// Alphabetic or digit.
        const ALNUM = Self::ALPHA.bits | Self::DIGIT.bits;
    }
}

static CLASSES: [Class; 256] = build_table();

const fn build_table() -> [Class; 256] {
    let mut table = [Class::empty(); 256];
    let mut c     = 0;

    while c < 256 {
        table[c] = classify(c as u8);
        c += 1;
    }

    table
}

const fn classify(c: u8) -> Class {
    let mut bits = 0;

    if matches!(c, b' ' | b'\t'..=b'\r') {
        bits |= Class::SPACE.bits();
    }
    if c.is_ascii_digit() {
        bits |= Class::DIGIT.bits();
    }
    if c.is_ascii_uppercase() {
        bits |= Class::UPPER.bits();
    }
    if c.is_ascii_lowercase() {
        bits |= Class::LOWER.bits();
    }
    if c >= 0x20 && c <= 0x7e {
        bits |= Class::PRINT.bits();
    }

    Class::from_bits_truncate(bits)
}

/// The classes of the byte `c`.
#[inline]
pub fn class(c: u8) -> Class {
    CLASSES[c as usize]
}

/// ASCII whitespace predicate.
///
/// Includes:
///
/// * Horizontal tab (TAB)
/// * Line feed (LF)
/// * Vertical tab (VT)
/// * Form feed (FF)
/// * Carriage return (CR)
/// * Space
#[inline]
pub fn is_whitespace(c: u8) -> bool {
    class(c).contains(Class::SPACE)
}

/// ASCII digit predicate.
#[inline]
pub fn is_digit(c: u8) -> bool {
    class(c).contains(Class::DIGIT)
}

/// Uppercase ASCII character predicate.
#[inline]
pub fn is_uppercase(c: u8) -> bool {
    class(c).contains(Class::UPPER)
}

/// Lowercase ASCII predicate.
#[inline]
pub fn is_lowercase(c: u8) -> bool {
    class(c).contains(Class::LOWER)
}

/// ASCII alphabetic predicate.
#[inline]
pub fn is_alpha(c: u8) -> bool {
    class(c).intersects(Class::ALPHA)
}

/// ASCII alphanumeric predicate.
#[inline]
pub fn is_alphanumeric(c: u8) -> bool {
    class(c).intersects(Class::ALNUM)
}

/// Printable ASCII predicate, space included.
#[inline]
pub fn is_printable(c: u8) -> bool {
    class(c).contains(Class::PRINT)
}

/// Converts a string of ASCII digits to the integer type `T`.
///
/// Meant for reducers which receive the text matched by `some(accept(Digit))`. Returns `None` if
/// `digits` is empty, contains anything but `0` to `9`, or does not fit in `T`.
///
/// # Example
///
/// ```
/// use descent::ascii::decimal;
///
/// assert_eq!(decimal::<u32>(b"1234"), Some(1234));
/// assert_eq!(decimal::<u8>(b"256"), None);
/// assert_eq!(decimal::<i64>(b"-1"), None);
/// ```
#[inline]
pub fn decimal<T>(digits: &[u8]) -> Option<T>
  where T: ValueFrom<u64> {
    if digits.is_empty() {
        return None;
    }

    let n = digits.iter().try_fold(0u64, |a, &c| {
        if !is_digit(c) {
            return None;
        }

        a.checked_mul(10)?.checked_add(u64::from(c - b'0'))
    })?;

    T::value_from(n).ok()
}
