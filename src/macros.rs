/// Registers a type with `Unify`, allowing parsers producing it to be composed with parsers
/// producing no result (`()`).
///
/// Takes either a list of concrete types or a single generic type prefixed by `impl<...>`.
///
/// ```
/// #[macro_use] extern crate descent;
///
/// use descent::parse_only;
/// use descent::prelude::*;
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Digits(Vec<u8>);
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Pair<T>(T, T);
///
/// unify!(Digits);
/// unify!(impl<T> Pair<T>);
///
/// # fn main() {
/// let digit = all(|d: &mut Digits, (s,): (String,)| d.0.extend(s.bytes()), (accept(Digit),));
/// let p     = sequence(discard(accept(Char(b'['))), many(digit));
///
/// assert_eq!(parse_only(&p, b"[12").unwrap(), Some(Digits(vec![b'1', b'2'])));
/// # }
/// ```
#[macro_export]
macro_rules! unify {
    ( impl<$($g:ident),*> $t:ty ) => {
        impl<$($g),*> $crate::Unify<()> for $t {
            type Output = $t;

            #[inline]
            fn left(out: &mut $t) -> ::std::option::Option<&mut $t> {
                ::std::option::Option::Some(out)
            }

            #[inline]
            fn right(_: &mut $t) -> ::std::option::Option<&mut ()> {
                ::std::option::Option::None
            }
        }

        impl<$($g),*> $crate::Unify<$t> for () {
            type Output = $t;

            #[inline]
            fn left(_: &mut $t) -> ::std::option::Option<&mut ()> {
                ::std::option::Option::None
            }

            #[inline]
            fn right(out: &mut $t) -> ::std::option::Option<&mut $t> {
                ::std::option::Option::Some(out)
            }
        }
    };
    ( $($t:ty),+ $(,)* ) => {
        $( $crate::unify!(impl<> $t); )+
    };
}
