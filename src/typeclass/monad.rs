//! Monad type class - sequencing dependent computations.
//!
//! `Monad` extends `Applicative` with `chain`, which feeds the value inside
//! a context to a function that itself returns a context. `Nothing` and
//! `Left` short-circuit: the function is never invoked for them.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! of(a).chain(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.chain(of) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use tacit::control::Maybe::{self, Just, Nothing};
//! use tacit::typeclass::Monad;
//!
//! fn half(n: i32) -> Maybe<i32> {
//!     if n % 2 == 0 { Just(n / 2) } else { Nothing }
//! }
//!
//! fn quarter<M: Monad<Inner = i32, WithType<i32> = M>>(value: M, half: impl Fn(i32) -> M) -> M {
//!     value.chain::<i32, _>(&half).chain::<i32, _>(&half)
//! }
//!
//! assert_eq!(quarter(Just(12), half), Just(3));
//! assert_eq!(quarter(Just(6), half), Nothing);
//! ```

use super::applicative::Applicative;
use super::identity::Identity;
use crate::control::{Either, Maybe};

/// A type class for applicatives whose computations may depend on earlier
/// results.
pub trait Monad: Applicative {
    /// Sequences a computation producing a new context from the inner value.
    fn chain<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Sequences two computations, discarding the first result.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.chain(|_| next)
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Monad for Maybe<A> {
    #[inline]
    fn chain<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        Self::chain(self, function)
    }
}

// =============================================================================
// Either<L, R> Implementation
// =============================================================================

impl<L, R> Monad for Either<L, R> {
    #[inline]
    fn chain<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        Self::chain(self, function)
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Monad for Identity<A> {
    #[inline]
    fn chain<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.0)
    }
}

// =============================================================================
// Vec<A> Implementation
//
// Note: Vec's chain calls the function once per element, so it needs an
// FnMut bound and lives in a separate trait.
// =============================================================================

/// Extension trait giving `Vec` its monadic (flat-map) behaviour.
///
/// # Examples
///
/// ```rust
/// use tacit::typeclass::MonadVec;
///
/// let expanded = vec![1, 2, 3].chain(|n| vec![n; n as usize]);
/// assert_eq!(expanded, vec![1, 2, 2, 3, 3, 3]);
/// ```
pub trait MonadVec: Sized {
    /// The element type of the Vec.
    type VecInner;

    /// Applies `function` to each element and concatenates the results.
    fn chain<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(Self::VecInner) -> Vec<B>;

    /// Flattens a Vec of Vecs.
    fn join<B>(self) -> Vec<B>
    where
        Self::VecInner: IntoIterator<Item = B>;
}

impl<A> MonadVec for Vec<A> {
    type VecInner = A;

    #[inline]
    fn chain<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(A) -> Vec<B>,
    {
        self.into_iter().flat_map(function).collect()
    }

    #[inline]
    fn join<B>(self) -> Vec<B>
    where
        A: IntoIterator<Item = B>,
    {
        self.into_iter().flatten().collect()
    }
}
