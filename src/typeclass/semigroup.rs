//! Semigroup type class - associative binary operations.
//!
//! A `Semigroup` is a type with an associative `concat`. Strings and
//! arrays concatenate, objects merge (the right operand wins on duplicate
//! keys), and `Maybe`/`Either` concatenate their payloads.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! a.concat(b).concat(c) == a.concat(b.concat(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use tacit::control::Maybe::{Just, Nothing};
//! use tacit::typeclass::Semigroup;
//!
//! assert_eq!(String::from("foo").concat(String::from("bar")), "foobar");
//! assert_eq!(vec![1, 2].concat(vec![3]), vec![1, 2, 3]);
//! assert_eq!(Just(vec![1]).concat(Nothing), Just(vec![1]));
//! ```

use std::collections::BTreeMap;

use super::identity::Identity;
use crate::control::{Either, Maybe};

/// A type class for types with an associative binary operation.
pub trait Semigroup {
    /// Combines two values associatively.
    fn concat(self, other: Self) -> Self;

    /// Combines two values by reference, leaving both intact.
    #[inline]
    fn concat_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().concat(other.clone())
    }
}

// =============================================================================
// String Implementation
// =============================================================================

impl Semigroup for String {
    #[inline]
    fn concat(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

// =============================================================================
// Array (Vec<T>) Implementation
// =============================================================================

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn concat(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

// =============================================================================
// Object (BTreeMap<K, V>) Implementation
// =============================================================================

/// Merges two objects; entries of `other` replace entries of `self`.
impl<K: Ord, V> Semigroup for BTreeMap<K, V> {
    #[inline]
    fn concat(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

/// `Nothing` is the identity; two `Just`s concatenate their payloads.
impl<A: Semigroup> Semigroup for Maybe<A> {
    fn concat(self, other: Self) -> Self {
        match (self, other) {
            (Self::Just(left), Self::Just(right)) => Self::Just(left.concat(right)),
            (just @ Self::Just(_), Self::Nothing) | (Self::Nothing, just) => just,
        }
    }
}

// =============================================================================
// Either<L, R> Implementation
// =============================================================================

/// Same-side operands concatenate; for mixed operands the `Right` wins.
impl<L: Semigroup, R: Semigroup> Semigroup for Either<L, R> {
    fn concat(self, other: Self) -> Self {
        match (self, other) {
            (Self::Left(left), Self::Left(right)) => Self::Left(left.concat(right)),
            (Self::Right(left), Self::Right(right)) => Self::Right(left.concat(right)),
            (right @ Self::Right(_), Self::Left(_)) | (Self::Left(_), right @ Self::Right(_)) => {
                right
            }
        }
    }
}

// =============================================================================
// Identity<A> and Unit Implementations
// =============================================================================

impl<A: Semigroup> Semigroup for Identity<A> {
    #[inline]
    fn concat(self, other: Self) -> Self {
        Identity(self.0.concat(other.0))
    }
}

impl Semigroup for () {
    #[inline]
    fn concat(self, _other: Self) -> Self {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{Just, Left, Nothing, Right};
    use rstest::rstest;

    #[rstest]
    #[case(Just("a".to_string()), Just("b".to_string()), Just("ab".to_string()))]
    #[case(Just("a".to_string()), Nothing, Just("a".to_string()))]
    #[case(Nothing, Just("b".to_string()), Just("b".to_string()))]
    #[case(Nothing, Nothing, Nothing)]
    fn maybe_concat(
        #[case] left: Maybe<String>,
        #[case] right: Maybe<String>,
        #[case] expected: Maybe<String>,
    ) {
        assert_eq!(left.concat(right), expected);
    }

    #[rstest]
    #[case(Left(vec![1]), Left(vec![2]), Left(vec![1, 2]))]
    #[case(Right("x".to_string()), Right("y".to_string()), Right("xy".to_string()))]
    #[case(Left(vec![1]), Right("y".to_string()), Right("y".to_string()))]
    #[case(Right("x".to_string()), Left(vec![2]), Right("x".to_string()))]
    fn either_concat(
        #[case] left: Either<Vec<i32>, String>,
        #[case] right: Either<Vec<i32>, String>,
        #[case] expected: Either<Vec<i32>, String>,
    ) {
        assert_eq!(left.concat(right), expected);
    }

    #[rstest]
    fn object_concat_prefers_right_operand() {
        let left: BTreeMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
        let right: BTreeMap<&str, i32> = [("b", 20), ("c", 30)].into_iter().collect();
        let merged = left.concat(right);
        assert_eq!(merged.get("a"), Some(&1));
        assert_eq!(merged.get("b"), Some(&20));
        assert_eq!(merged.get("c"), Some(&30));
    }

    #[rstest]
    fn concat_ref_keeps_operands() {
        let left = String::from("keep");
        let right = String::from("me");
        assert_eq!(left.concat_ref(&right), "keepme");
        assert_eq!(left, "keep");
    }

    #[rstest]
    fn identity_concat_delegates() {
        assert_eq!(Identity(vec![1]).concat(Identity(vec![2])), Identity(vec![1, 2]));
    }
}
