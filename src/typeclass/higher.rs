//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Maybe<_>` or `Vec<_>` as type constructors
//! directly. This module uses GAT to work around that limitation, which is
//! what lets a single polymorphic operation such as `map` or `chain` be
//! written once for every container in the library.
//!
//! # Example
//!
//! ```rust
//! use tacit::control::Maybe;
//! use tacit::typeclass::TypeConstructor;
//!
//! fn transform_type<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let just_int: Maybe<i32> = Maybe::Just(42);
//! let nothing_string: Maybe<String> = transform_type(just_int);
//! assert_eq!(nothing_string, Maybe::Nothing);
//! ```

use std::collections::BTreeMap;

use super::identity::Identity;
use crate::control::{Either, Maybe};

/// A trait representing a type constructor.
///
/// The implementing type is a type constructor applied to some type `A`,
/// for example `Maybe<A>` or `Vec<A>`.
///
/// # Laws
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `Maybe<i32>` this is `i32`; for `Either<L, R>` it is `R`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

/// `Either` is a constructor over its right side; the left side is fixed.
impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}

/// Objects are constructors over their values; keys are fixed.
impl<K, V> TypeConstructor for BTreeMap<K, V> {
    type Inner = V;
    type WithType<B> = BTreeMap<K, B>;
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}
