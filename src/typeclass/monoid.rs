//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! Monoid::empty().concat(a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! a.concat(Monoid::empty()) == a
//! ```
//!
//! # Examples
//!
//! ```rust
//! use tacit::control::Maybe::{self, Just};
//! use tacit::typeclass::Monoid;
//!
//! assert_eq!(String::concat_all(vec!["a".to_string(), "b".to_string()]), "ab");
//! assert_eq!(<Maybe<String>>::empty(), Maybe::Nothing);
//! assert_eq!(Maybe::concat_all(vec![Just(vec![1]), Maybe::Nothing, Just(vec![2])]), Just(vec![1, 2]));
//! ```

use std::collections::BTreeMap;

use super::identity::Identity;
use super::semigroup::Semigroup;
use crate::control::Maybe;

/// A type class for semigroups with an identity element.
pub trait Monoid: Semigroup {
    /// Returns the identity element for `concat`.
    fn empty() -> Self;

    /// Concatenates every value of an iterator, starting from `empty`.
    fn concat_all<I>(values: I) -> Self
    where
        Self: Sized,
        I: IntoIterator<Item = Self>,
    {
        values
            .into_iter()
            .fold(Self::empty(), |accumulator, value| accumulator.concat(value))
    }
}

impl Monoid for String {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> Monoid for BTreeMap<K, V> {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }
}

/// `Nothing` is the identity, so any semigroup payload is enough.
impl<A: Semigroup> Monoid for Maybe<A> {
    #[inline]
    fn empty() -> Self {
        Self::Nothing
    }
}

impl<A: Monoid> Monoid for Identity<A> {
    #[inline]
    fn empty() -> Self {
        Identity(A::empty())
    }
}

impl Monoid for () {
    #[inline]
    fn empty() -> Self {}
}
