//! `Functor`: applying a function to every value in a structure without
//! changing the structure's shape.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.map(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.map(f).map(g) == fa.map(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use tacit::control::Maybe::{self, Just, Nothing};
//! use tacit::typeclass::Functor;
//!
//! fn lengths<F: Functor<Inner = String>>(values: F) -> F::WithType<usize> {
//!     values.map(|text| text.len())
//! }
//!
//! assert_eq!(lengths(Just("foo".to_string())), Just(3));
//! assert_eq!(lengths(Nothing::<String>), Nothing);
//! assert_eq!(lengths(vec!["a".to_string(), "bc".to_string()]), vec![1, 2]);
//! ```

use std::collections::BTreeMap;

use super::higher::TypeConstructor;
use super::identity::Identity;
use crate::control::{Either, Maybe};

/// A type class for types that can have a function mapped over their contents.
///
/// The function is `FnMut` so that multi-element containers such as `Vec`
/// can call it once per element. Single-value containers call it at most
/// once; `Nothing` and `Left` never call it.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value(s) inside the functor.
    fn map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Replaces every value inside the functor with `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tacit::typeclass::Functor;
    ///
    /// assert_eq!(vec![1, 2, 3].replace("x"), vec!["x", "x", "x"]);
    /// ```
    #[inline]
    fn replace<B: Clone>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map(|_| value.clone())
    }

    /// Discards the value(s), keeping only the structure.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.map(|_| ())
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Functor for Maybe<A> {
    #[inline]
    fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnMut(A) -> B,
    {
        Self::map(self, function)
    }
}

// =============================================================================
// Either<L, R> Implementation
// =============================================================================

impl<L, R> Functor for Either<L, R> {
    #[inline]
    fn map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnMut(R) -> B,
    {
        Self::map(self, function)
    }
}

// =============================================================================
// Vec<A> Implementation
// =============================================================================

impl<A> Functor for Vec<A> {
    #[inline]
    fn map<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(A) -> B,
    {
        self.into_iter().map(function).collect()
    }
}

// =============================================================================
// Object (BTreeMap<K, V>) Implementation
// =============================================================================

/// Objects map over their values; keys are untouched.
impl<K: Ord, V> Functor for BTreeMap<K, V> {
    fn map<B, F>(self, mut function: F) -> BTreeMap<K, B>
    where
        F: FnMut(V) -> B,
    {
        self.into_iter()
            .map(|(key, value)| (key, function(value)))
            .collect()
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Functor for Identity<A> {
    #[inline]
    fn map<B, F>(self, mut function: F) -> Identity<B>
    where
        F: FnMut(A) -> B,
    {
        Identity(function(self.0))
    }
}
