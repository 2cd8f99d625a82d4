use std::fmt;
use std::sync::{Arc, OnceLock, Weak};

use crate::stream::Stream;
use crate::types::Parser;
use crate::Result;

type Rule<S, T> = OnceLock<Box<dyn Parser<S, Output=T> + Send + Sync>>;

/// Builds a recursive parser.
///
/// `f` receives a handle which parses using the parser `f` returns, allowing a rule to refer to
/// itself. The handle only holds a weak reference, so the grammar is freed once the returned
/// `Fix` and all its clones are dropped.
///
/// ```
/// use descent::parse_only;
/// use descent::prelude::*;
///
/// // nested = '(' nested ')' | 'x'
/// let nested = fix(|nested| {
///     choice(sequence(accept(Char(b'(')), sequence(nested, expect(Char(b')')))), accept(Char(b'x')))
/// });
///
/// assert_eq!(parse_only(&nested, b"((x))").unwrap(), Some("((x))".to_owned()));
/// assert!(parse_only(&nested, b"((x)").is_err());
/// ```
pub fn fix<S, T, F, P>(f: F) -> Fix<S, T>
  where F: FnOnce(Recurse<S, T>) -> P,
        P: Parser<S, Output=T> + Send + Sync + 'static {
    let rule: Arc<Rule<S, T>> = Arc::new(OnceLock::new());
    let p                     = f(Recurse { rule: Arc::downgrade(&rule) });

    rule.get_or_init(move || Box::new(p));

    Fix { rule: rule }
}

/// A recursive parser.
///
/// This is created by `fix`.
pub struct Fix<S, T> {
    rule: Arc<Rule<S, T>>,
}

impl<S, T> Parser<S> for Fix<S, T> {
    type Output = T;

    #[inline]
    fn parse(&self, i: &mut Stream, out: Option<&mut T>, st: &mut S) -> Result<bool> {
        match self.rule.get() {
            Some(p) => p.parse(i, out, st),
            None    => Ok(false),
        }
    }
}

impl<S, T> Clone for Fix<S, T> {
    fn clone(&self) -> Self {
        Fix { rule: self.rule.clone() }
    }
}

impl<S, T> fmt::Debug for Fix<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Fix").finish()
    }
}

/// Handle to the parser under construction in `fix`.
///
/// Fails softly if the grammar it belongs to has been dropped.
pub struct Recurse<S, T> {
    rule: Weak<Rule<S, T>>,
}

impl<S, T> Parser<S> for Recurse<S, T> {
    type Output = T;

    #[inline]
    fn parse(&self, i: &mut Stream, out: Option<&mut T>, st: &mut S) -> Result<bool> {
        match self.rule.upgrade() {
            Some(rule) => match rule.get() {
                Some(p) => p.parse(i, out, st),
                None    => Ok(false),
            },
            None => Ok(false),
        }
    }
}

impl<S, T> Clone for Recurse<S, T> {
    fn clone(&self) -> Self {
        Recurse { rule: self.rule.clone() }
    }
}

impl<S, T> fmt::Debug for Recurse<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Recurse").finish()
    }
}
