//! Traversable type class - traversing structures with effects.
//!
//! `traverse` maps every value of a structure to an effectful value and
//! collects the effects, turning `T<F<B>>`-shaped work into `F<T<B>>`.
//!
//! The target applicative is chosen by an [`ApplicativeKind`] marker rather
//! than by the result of the function, which is how the unit of the target
//! (`K::of`) is known even when there is nothing to traverse: traversing
//! `Nothing` or `Left` yields `K::of(self)` without calling the function.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! t.traverse::<IdentityKind, _, _>(Identity) == Identity(t)
//! ```
//!
//! ## Naturality
//!
//! For any applicative transformation `n`:
//!
//! ```text
//! n(t.traverse::<F, _, _>(f)) == t.traverse::<G, _, _>(|x| n(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use tacit::control::Maybe::{self, Just, Nothing};
//! use tacit::typeclass::{MaybeKind, Traversable, VecKind};
//!
//! fn parse(text: &str) -> Maybe<i32> {
//!     Maybe::from(text.parse::<i32>().ok())
//! }
//!
//! assert_eq!(vec!["1", "2"].traverse::<MaybeKind, _, _>(parse), Just(vec![1, 2]));
//! assert_eq!(vec!["1", "x"].traverse::<MaybeKind, _, _>(parse), Nothing);
//!
//! let fanned = Just(7).traverse::<VecKind, _, _>(|n| vec![n, n + 1]);
//! assert_eq!(fanned, vec![Just(7), Just(8)]);
//! ```

use std::collections::BTreeMap;
use std::marker::PhantomData;

use super::foldable::Foldable;
use super::functor::Functor;
use super::higher::TypeConstructor;
use super::identity::Identity;
use crate::control::{Either, Maybe};

/// A marker naming an applicative as a type constructor.
///
/// `Applied<T>` is the applicative applied to `T`. The three operations are
/// the minimum `traverse` needs: a unit, a map, and a way to combine two
/// independent effects.
pub trait ApplicativeKind {
    /// The applicative applied to `T`.
    type Applied<T>;

    /// Lifts a value into the applicative.
    fn of<T>(value: T) -> Self::Applied<T>;

    /// Maps over the applicative.
    fn map<T, U, F>(applied: Self::Applied<T>, function: F) -> Self::Applied<U>
    where
        F: FnMut(T) -> U;

    /// Combines two applicative values.
    fn map2<T: Clone, U: Clone, V, F>(
        first: Self::Applied<T>,
        second: Self::Applied<U>,
        function: F,
    ) -> Self::Applied<V>
    where
        F: FnMut(T, U) -> V;
}

/// Marker for the `Maybe` applicative.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaybeKind;

/// Marker for the `Either<L, _>` applicative.
#[derive(Debug, Clone, Copy, Default)]
pub struct EitherKind<L>(PhantomData<L>);

/// Marker for the `Vec` (non-deterministic) applicative.
#[derive(Debug, Clone, Copy, Default)]
pub struct VecKind;

/// Marker for the `Identity` applicative.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityKind;

impl ApplicativeKind for MaybeKind {
    type Applied<T> = Maybe<T>;

    fn of<T>(value: T) -> Maybe<T> {
        Maybe::Just(value)
    }

    fn map<T, U, F>(applied: Maybe<T>, function: F) -> Maybe<U>
    where
        F: FnMut(T) -> U,
    {
        applied.map(function)
    }

    fn map2<T: Clone, U: Clone, V, F>(first: Maybe<T>, second: Maybe<U>, mut function: F) -> Maybe<V>
    where
        F: FnMut(T, U) -> V,
    {
        match (first, second) {
            (Maybe::Just(a), Maybe::Just(b)) => Maybe::Just(function(a, b)),
            _ => Maybe::Nothing,
        }
    }
}

impl<L> ApplicativeKind for EitherKind<L> {
    type Applied<T> = Either<L, T>;

    fn of<T>(value: T) -> Either<L, T> {
        Either::Right(value)
    }

    fn map<T, U, F>(applied: Either<L, T>, function: F) -> Either<L, U>
    where
        F: FnMut(T) -> U,
    {
        applied.map(function)
    }

    fn map2<T: Clone, U: Clone, V, F>(
        first: Either<L, T>,
        second: Either<L, U>,
        mut function: F,
    ) -> Either<L, V>
    where
        F: FnMut(T, U) -> V,
    {
        match (first, second) {
            (Either::Left(error), _) | (Either::Right(_), Either::Left(error)) => {
                Either::Left(error)
            }
            (Either::Right(a), Either::Right(b)) => Either::Right(function(a, b)),
        }
    }
}

impl ApplicativeKind for VecKind {
    type Applied<T> = Vec<T>;

    fn of<T>(value: T) -> Vec<T> {
        vec![value]
    }

    fn map<T, U, F>(applied: Vec<T>, function: F) -> Vec<U>
    where
        F: FnMut(T) -> U,
    {
        applied.into_iter().map(function).collect()
    }

    fn map2<T: Clone, U: Clone, V, F>(first: Vec<T>, second: Vec<U>, mut function: F) -> Vec<V>
    where
        F: FnMut(T, U) -> V,
    {
        let mut result = Vec::with_capacity(first.len().saturating_mul(second.len()));
        for a in &first {
            for b in &second {
                result.push(function(a.clone(), b.clone()));
            }
        }
        result
    }
}

impl ApplicativeKind for IdentityKind {
    type Applied<T> = Identity<T>;

    fn of<T>(value: T) -> Identity<T> {
        Identity(value)
    }

    fn map<T, U, F>(applied: Identity<T>, mut function: F) -> Identity<U>
    where
        F: FnMut(T) -> U,
    {
        Identity(function(applied.0))
    }

    fn map2<T: Clone, U: Clone, V, F>(
        first: Identity<T>,
        second: Identity<U>,
        mut function: F,
    ) -> Identity<V>
    where
        F: FnMut(T, U) -> V,
    {
        Identity(function(first.0, second.0))
    }
}

/// A type class for structures that can be traversed with an applicative
/// effect.
pub trait Traversable: Functor + Foldable {
    /// Maps each value to an effect of kind `K` and collects the results.
    fn traverse<K, B, F>(self, function: F) -> K::Applied<Self::WithType<B>>
    where
        K: ApplicativeKind,
        B: Clone,
        F: FnMut(Self::Inner) -> K::Applied<B>;

    /// Turns a structure of effects into an effect over the structure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tacit::control::Maybe::{Just, Nothing};
    /// use tacit::typeclass::{MaybeKind, Traversable};
    ///
    /// assert_eq!(vec![Just(1), Just(2)].sequence::<MaybeKind, _>(), Just(vec![1, 2]));
    /// assert_eq!(vec![Just(1), Nothing].sequence::<MaybeKind, _>(), Nothing);
    /// ```
    fn sequence<K, B>(self) -> K::Applied<Self::WithType<B>>
    where
        Self: TypeConstructor<Inner = K::Applied<B>> + Sized,
        K: ApplicativeKind,
        B: Clone,
    {
        self.traverse::<K, B, _>(|effect| effect)
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Traversable for Maybe<A> {
    fn traverse<K, B, F>(self, mut function: F) -> K::Applied<Maybe<B>>
    where
        K: ApplicativeKind,
        B: Clone,
        F: FnMut(A) -> K::Applied<B>,
    {
        match self {
            Self::Just(value) => K::map(function(value), Maybe::Just),
            Self::Nothing => K::of(Maybe::Nothing),
        }
    }
}

// =============================================================================
// Either<L, R> Implementation
// =============================================================================

impl<L, R> Traversable for Either<L, R> {
    fn traverse<K, B, F>(self, mut function: F) -> K::Applied<Either<L, B>>
    where
        K: ApplicativeKind,
        B: Clone,
        F: FnMut(R) -> K::Applied<B>,
    {
        match self {
            Self::Right(value) => K::map(function(value), Either::Right),
            Self::Left(value) => K::of(Either::Left(value)),
        }
    }
}

// =============================================================================
// Vec<A> Implementation
// =============================================================================

impl<A> Traversable for Vec<A> {
    fn traverse<K, B, F>(self, mut function: F) -> K::Applied<Vec<B>>
    where
        K: ApplicativeKind,
        B: Clone,
        F: FnMut(A) -> K::Applied<B>,
    {
        let capacity = self.len();
        self.into_iter()
            .fold(K::of(Vec::with_capacity(capacity)), |accumulator, value| {
                K::map2(accumulator, function(value), |mut values, next| {
                    values.push(next);
                    values
                })
            })
    }
}

// =============================================================================
// Object (BTreeMap<K, V>) Implementation
// =============================================================================

impl<Key: Ord + Clone, V> Traversable for BTreeMap<Key, V> {
    fn traverse<K, B, F>(self, mut function: F) -> K::Applied<BTreeMap<Key, B>>
    where
        K: ApplicativeKind,
        B: Clone,
        F: FnMut(V) -> K::Applied<B>,
    {
        self.into_iter()
            .fold(K::of(BTreeMap::new()), |accumulator, (key, value)| {
                K::map2(accumulator, function(value), move |mut object, next| {
                    object.insert(key.clone(), next);
                    object
                })
            })
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Traversable for Identity<A> {
    fn traverse<K, B, F>(self, mut function: F) -> K::Applied<Identity<B>>
    where
        K: ApplicativeKind,
        B: Clone,
        F: FnMut(A) -> K::Applied<B>,
    {
        K::map(function(self.0), Identity)
    }
}
