//! Applicative type class - applying functions within a context.
//!
//! `Applicative` extends `Functor` with `of`, which lifts a bare value into
//! the context, and `ap`, which applies a wrapped function to a wrapped
//! value. `map2` and `map3` combine independent computations and are the
//! basis of the `lift2`/`lift3` combinators.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! v.ap(of(|x| x)) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! of(x).ap(of(f)) == of(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! of(y).ap(u) == u.ap(of(|f| f(y)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use tacit::control::Maybe::{self, Just, Nothing};
//! use tacit::typeclass::Applicative;
//!
//! let lifted: Maybe<i32> = <Maybe<()>>::of(42);
//! assert_eq!(lifted, Just(42));
//!
//! assert_eq!(Just(1).map2(Just(2), |x, y| x + y), Just(3));
//! assert_eq!(Just(1).map2(Nothing::<i32>, |x, y| x + y), Nothing);
//! ```

use super::functor::Functor;
use super::identity::Identity;
use crate::control::{Either, Maybe};

/// A type class for functors that can lift values and apply wrapped
/// functions.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// This is the unit (`of`) of the type: `Just` for `Maybe`, `Right`
    /// for `Either`.
    fn of<B>(value: B) -> Self::WithType<B>;

    /// Applies the function held by `function` to the value held by `self`.
    fn ap<B, F>(self, function: Self::WithType<F>) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Combines two applicative values using a binary function.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Pairs the values of two applicative values.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn of<B>(value: B) -> Maybe<B> {
        Maybe::Just(value)
    }

    #[inline]
    fn ap<B, F>(self, function: Maybe<F>) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        Self::ap(self, function)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Just(a), Maybe::Just(b)) => Maybe::Just(function(a, b)),
            _ => Maybe::Nothing,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Maybe<B>, third: Maybe<C>, function: F) -> Maybe<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Just(a), Maybe::Just(b), Maybe::Just(c)) => Maybe::Just(function(a, b, c)),
            _ => Maybe::Nothing,
        }
    }
}

// =============================================================================
// Either<L, R> Implementation
//
// Combination is left-biased: the first Left in argument order wins.
// =============================================================================

impl<L, R> Applicative for Either<L, R> {
    #[inline]
    fn of<B>(value: B) -> Either<L, B> {
        Either::Right(value)
    }

    #[inline]
    fn ap<B, F>(self, function: Either<L, F>) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        Self::ap(self, function)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Either<L, B>, function: F) -> Either<L, C>
    where
        F: FnOnce(R, B) -> C,
    {
        match (self, other) {
            (Self::Left(error), _) | (Self::Right(_), Either::Left(error)) => Either::Left(error),
            (Self::Right(a), Either::Right(b)) => Either::Right(function(a, b)),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Either<L, B>,
        third: Either<L, C>,
        function: F,
    ) -> Either<L, D>
    where
        F: FnOnce(R, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Right(a), Either::Right(b), Either::Right(c)) => {
                Either::Right(function(a, b, c))
            }
            (Self::Left(error), _, _)
            | (Self::Right(_), Either::Left(error), _)
            | (Self::Right(_), Either::Right(_), Either::Left(error)) => Either::Left(error),
        }
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Applicative for Identity<A> {
    #[inline]
    fn of<B>(value: B) -> Identity<B> {
        Identity(value)
    }

    #[inline]
    fn ap<B, F>(self, function: Identity<F>) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity((function.0)(self.0))
    }

    #[inline]
    fn map2<B, C, F>(self, other: Identity<B>, function: F) -> Identity<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Identity(function(self.0, other.0))
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Identity<B>, third: Identity<C>, function: F) -> Identity<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        Identity(function(self.0, second.0, third.0))
    }
}

// =============================================================================
// Vec<A> Implementation
//
// Note: Vec requires Clone bounds for map2/map3/ap because every element of
// one side meets every element of the other. This is expressed through a
// separate trait to keep the Applicative interface clean.
// =============================================================================

/// Extension trait giving `Vec` its applicative (cartesian) behaviour.
///
/// Combining two Vecs produces every combination of their elements, in
/// row-major order.
///
/// # Examples
///
/// ```rust
/// use tacit::typeclass::ApplicativeVec;
///
/// let pairs = vec![1, 2].map2(vec!['a', 'b'], |n, c| format!("{n}{c}"));
/// assert_eq!(pairs, vec!["1a", "1b", "2a", "2b"]);
/// ```
pub trait ApplicativeVec: Sized {
    /// The element type of the Vec.
    type VecInner;

    /// Lifts a pure value into a singleton Vec.
    fn of<B>(value: B) -> Vec<B> {
        vec![value]
    }

    /// Combines two Vecs using a binary function (cartesian product).
    fn map2<B: Clone, C, F>(self, other: Vec<B>, function: F) -> Vec<C>
    where
        Self::VecInner: Clone,
        F: FnMut(Self::VecInner, B) -> C;

    /// Combines three Vecs using a ternary function (cartesian product).
    fn map3<B: Clone, C: Clone, D, F>(self, second: Vec<B>, third: Vec<C>, function: F) -> Vec<D>
    where
        Self::VecInner: Clone,
        F: FnMut(Self::VecInner, B, C) -> D;

    /// Applies every function in `functions` to every element of `self`.
    fn ap<B, F>(self, functions: Vec<F>) -> Vec<B>
    where
        Self::VecInner: Clone,
        F: FnMut(Self::VecInner) -> B;
}

impl<A> ApplicativeVec for Vec<A> {
    type VecInner = A;

    fn map2<B: Clone, C, F>(self, other: Vec<B>, mut function: F) -> Vec<C>
    where
        A: Clone,
        F: FnMut(A, B) -> C,
    {
        let mut result = Vec::with_capacity(self.len().saturating_mul(other.len()));
        for a in &self {
            for b in &other {
                result.push(function(a.clone(), b.clone()));
            }
        }
        result
    }

    fn map3<B: Clone, C: Clone, D, F>(
        self,
        second: Vec<B>,
        third: Vec<C>,
        mut function: F,
    ) -> Vec<D>
    where
        A: Clone,
        F: FnMut(A, B, C) -> D,
    {
        let mut result = Vec::with_capacity(
            self.len()
                .saturating_mul(second.len())
                .saturating_mul(third.len()),
        );
        for a in &self {
            for b in &second {
                for c in &third {
                    result.push(function(a.clone(), b.clone(), c.clone()));
                }
            }
        }
        result
    }

    fn ap<B, F>(self, functions: Vec<F>) -> Vec<B>
    where
        A: Clone,
        F: FnMut(A) -> B,
    {
        let mut result = Vec::with_capacity(self.len().saturating_mul(functions.len()));
        for mut function in functions {
            for a in &self {
                result.push(function(a.clone()));
            }
        }
        result
    }
}
