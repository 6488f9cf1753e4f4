//! Foldable type class - reducing structures to summary values.
//!
//! `Foldable` represents structures that can be folded to a single value.
//! `Maybe` and `Either` hold at most one value: reducing a `Just`/`Right`
//! applies the function once, reducing `Nothing`/`Left` returns the initial
//! value untouched.
//!
//! # Examples
//!
//! ```rust
//! use tacit::control::Maybe::{Just, Nothing};
//! use tacit::typeclass::Foldable;
//!
//! assert_eq!(Just(5).reduce(10, |acc, n| acc + n), 15);
//! assert_eq!(Nothing.reduce(10, |acc, n: i32| acc + n), 10);
//! assert_eq!(vec![1, 2, 3].reduce(0, |acc, n| acc * 10 + n), 123);
//! ```

use std::collections::BTreeMap;

use super::higher::TypeConstructor;
use super::identity::Identity;
use super::monoid::Monoid;
use crate::control::{Either, Maybe};

/// A type class for structures that can be folded to a summary value.
///
/// # Required Methods
///
/// - `reduce`: left-associative fold
/// - `fold_right`: right-associative fold
/// - `length`: number of contained values
///
/// The remaining methods are derived from these.
pub trait Foldable: TypeConstructor {
    /// Folds from the left: `function(function(initial, x0), x1)...`.
    fn reduce<B, F>(self, initial: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds from the right: `function(x0, function(x1, ...initial))`.
    fn fold_right<B, F>(self, initial: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Returns the number of contained values.
    fn length(&self) -> usize;

    /// Returns `true` if there are no contained values.
    #[inline]
    fn is_empty(&self) -> bool {
        self.length() == 0
    }

    /// Maps each value into a monoid and concatenates the results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tacit::typeclass::Foldable;
    ///
    /// let shouted = vec!["a", "b"].fold_map(|text| text.to_uppercase());
    /// assert_eq!(shouted, "AB");
    /// ```
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        Self: Sized,
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
    {
        self.reduce(M::empty(), |accumulator, value| {
            accumulator.concat(function(value))
        })
    }

    /// Collects the contained values into a `Vec`, in fold order.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.reduce(Vec::new(), |mut values, value| {
            values.push(value);
            values
        })
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Foldable for Maybe<A> {
    #[inline]
    fn reduce<B, F>(self, initial: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Self::Just(value) => function(initial, value),
            Self::Nothing => initial,
        }
    }

    #[inline]
    fn fold_right<B, F>(self, initial: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Self::Just(value) => function(value, initial),
            Self::Nothing => initial,
        }
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_just())
    }
}

// =============================================================================
// Either<L, R> Implementation
// =============================================================================

impl<L, R> Foldable for Either<L, R> {
    #[inline]
    fn reduce<B, F>(self, initial: B, mut function: F) -> B
    where
        F: FnMut(B, R) -> B,
    {
        match self {
            Self::Right(value) => function(initial, value),
            Self::Left(_) => initial,
        }
    }

    #[inline]
    fn fold_right<B, F>(self, initial: B, mut function: F) -> B
    where
        F: FnMut(R, B) -> B,
    {
        match self {
            Self::Right(value) => function(value, initial),
            Self::Left(_) => initial,
        }
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_right())
    }
}

// =============================================================================
// Vec<A> Implementation
// =============================================================================

impl<A> Foldable for Vec<A> {
    #[inline]
    fn reduce<B, F>(self, initial: B, function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        self.into_iter().fold(initial, function)
    }

    #[inline]
    fn fold_right<B, F>(self, initial: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(initial, |accumulator, value| function(value, accumulator))
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    #[inline]
    fn to_list(self) -> Vec<A> {
        self
    }
}

// =============================================================================
// Object (BTreeMap<K, V>) Implementation
//
// Values are visited in key order.
// =============================================================================

impl<K: Ord, V> Foldable for BTreeMap<K, V> {
    fn reduce<B, F>(self, initial: B, mut function: F) -> B
    where
        F: FnMut(B, V) -> B,
    {
        self.into_values()
            .fold(initial, |accumulator, value| function(accumulator, value))
    }

    fn fold_right<B, F>(self, initial: B, mut function: F) -> B
    where
        F: FnMut(V, B) -> B,
    {
        self.into_values()
            .rev()
            .fold(initial, |accumulator, value| function(value, accumulator))
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Foldable for Identity<A> {
    #[inline]
    fn reduce<B, F>(self, initial: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        function(initial, self.0)
    }

    #[inline]
    fn fold_right<B, F>(self, initial: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        function(self.0, initial)
    }

    #[inline]
    fn length(&self) -> usize {
        1
    }
}
