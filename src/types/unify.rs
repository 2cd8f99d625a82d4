use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use either::Either;

/// Result-slot unification of two composed parsers.
///
/// When two parsers are composed in sequence or as alternatives they write to a single shared
/// slot. `Unify` picks the slot type of the composite and decides which of the two parsers
/// receives it:
///
/// * Two parsers with the same output type share the slot.
/// * A parser without a result (`()`) composed with one which has a result `T` yields `T`, the
///   `()` side is run without a slot.
///
/// Any other pairing does not implement `Unify` and is rejected by the compiler when the grammar
/// is built.
///
/// Types from the standard library are already registered, use the
/// [`unify!`](../macro.unify.html) macro for types of your own.
pub trait Unify<B> {
    /// The type of the shared slot.
    type Output;

    /// The part of the shared slot passed to the left parser, if any.
    fn left(out: &mut Self::Output) -> Option<&mut Self>;

    /// The part of the shared slot passed to the right parser, if any.
    fn right(out: &mut Self::Output) -> Option<&mut B>;
}

impl<T> Unify<T> for T {
    type Output = T;

    #[inline]
    fn left(out: &mut T) -> Option<&mut T> {
        Some(out)
    }

    #[inline]
    fn right(out: &mut T) -> Option<&mut T> {
        Some(out)
    }
}

unify!(
    bool, char, String,
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
);

unify!(impl<T> Vec<T>);
unify!(impl<T> VecDeque<T>);
unify!(impl<T> Option<T>);
unify!(impl<T> Box<T>);
unify!(impl<T> BTreeSet<T>);
unify!(impl<T> HashSet<T>);
unify!(impl<K, V> BTreeMap<K, V>);
unify!(impl<K, V> HashMap<K, V>);
unify!(impl<L, R> Either<L, R>);
unify!(impl<A, B> (A, B));
