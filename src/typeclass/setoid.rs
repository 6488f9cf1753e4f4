//! Setoid type class - value-based equality.
//!
//! `equals` is a deep equality that differs from `PartialEq` in two places
//! for floating point numbers: `0.0` and `-0.0` are *not* equal, and `NaN`
//! *is* equal to itself. This makes `equals` an equivalence relation
//! (reflexive, symmetric and transitive) for every type implementing it.
//!
//! # Examples
//!
//! ```rust
//! use tacit::control::Maybe::Just;
//! use tacit::typeclass::Setoid;
//!
//! assert!(Just(f64::NAN).equals(&Just(f64::NAN)));
//! assert!(!Just(0.0).equals(&Just(-0.0)));
//! assert!(vec![Just(1), Just(2)].equals(&vec![Just(1), Just(2)]));
//! ```

use std::collections::BTreeMap;

use super::identity::Identity;
use crate::control::{Either, Maybe};

/// A type class for types with a lawful equivalence relation.
pub trait Setoid {
    /// Returns `true` if `self` and `other` are equivalent.
    fn equals(&self, other: &Self) -> bool;
}

macro_rules! setoid_via_eq {
    ($($type:ty),* $(,)?) => {
        $(
            impl Setoid for $type {
                #[inline]
                fn equals(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

setoid_via_eq!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, String, str, (),
);

macro_rules! setoid_for_float {
    ($($type:ty),*) => {
        $(
            impl Setoid for $type {
                #[inline]
                fn equals(&self, other: &Self) -> bool {
                    (self.is_nan() && other.is_nan())
                        || (self == other && self.is_sign_negative() == other.is_sign_negative())
                }
            }
        )*
    };
}

setoid_for_float!(f32, f64);

impl<T: Setoid + ?Sized> Setoid for &T {
    #[inline]
    fn equals(&self, other: &Self) -> bool {
        (**self).equals(*other)
    }
}

impl<T: Setoid> Setoid for [T] {
    fn equals(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.equals(b))
    }
}

impl<T: Setoid> Setoid for Vec<T> {
    #[inline]
    fn equals(&self, other: &Self) -> bool {
        self.as_slice().equals(other.as_slice())
    }
}

impl<K: Ord, V: Setoid> Setoid for BTreeMap<K, V> {
    fn equals(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|((key_a, value_a), (key_b, value_b))| key_a == key_b && value_a.equals(value_b))
    }
}

impl<A: Setoid, B: Setoid> Setoid for (A, B) {
    #[inline]
    fn equals(&self, other: &Self) -> bool {
        self.0.equals(&other.0) && self.1.equals(&other.1)
    }
}

impl<A: Setoid> Setoid for Maybe<A> {
    fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nothing, Self::Nothing) => true,
            (Self::Just(a), Self::Just(b)) => a.equals(b),
            _ => false,
        }
    }
}

impl<L: Setoid, R: Setoid> Setoid for Either<L, R> {
    fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Left(a), Self::Left(b)) => a.equals(b),
            (Self::Right(a), Self::Right(b)) => a.equals(b),
            _ => false,
        }
    }
}

impl<A: Setoid> Setoid for Identity<A> {
    #[inline]
    fn equals(&self, other: &Self) -> bool {
        self.0.equals(&other.0)
    }
}
