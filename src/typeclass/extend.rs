//! Extend type class - mapping with access to the whole context.
//!
//! `extend` is the dual of `chain`: the function receives the entire
//! structure rather than the value inside it, and its result is wrapped
//! back into the structure.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! w.extend(g).extend(f) == w.extend(|w1| f(&w1.extend(g)))
//! ```

use super::functor::Functor;
use super::identity::Identity;
use crate::control::{Either, Maybe};

/// A type class for functors that can be extended.
///
/// # Examples
///
/// ```rust
/// use tacit::control::Maybe::{self, Just, Nothing};
/// use tacit::typeclass::Extend;
///
/// let describe = |value: &Maybe<i32>| value.to_string();
/// assert_eq!(Just(1).extend(describe), Just("Just(1)".to_string()));
/// assert_eq!(Nothing::<i32>.extend(describe), Nothing);
/// ```
pub trait Extend: Functor {
    /// Applies `function` to the whole structure and wraps the result.
    fn extend<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self) -> B;
}

/// An [`Extend`] that always holds exactly one value.
///
/// # Laws
///
/// ```text
/// w.extend(|w1| w1.clone().extract()) == w
/// w.extend(f).extract() == f(&w)
/// ```
pub trait Comonad: Extend {
    /// Returns the held value.
    fn extract(self) -> Self::Inner;
}

impl<A> Comonad for Identity<A> {
    #[inline]
    fn extract(self) -> A {
        self.0
    }
}

impl<A> Extend for Maybe<A> {
    fn extend<B, F>(self, mut function: F) -> Maybe<B>
    where
        F: FnMut(&Self) -> B,
    {
        if self.is_just() {
            Maybe::Just(function(&self))
        } else {
            Maybe::Nothing
        }
    }
}

impl<L, R> Extend for Either<L, R> {
    fn extend<B, F>(self, mut function: F) -> Either<L, B>
    where
        F: FnMut(&Self) -> B,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            right @ Self::Right(_) => Either::Right(function(&right)),
        }
    }
}

/// Each element is replaced by `function` applied to the suffix starting
/// at that element.
impl<A: Clone> Extend for Vec<A> {
    fn extend<B, F>(self, mut function: F) -> Vec<B>
    where
        F: FnMut(&Self) -> B,
    {
        (0..self.len())
            .map(|start| function(&self[start..].to_vec()))
            .collect()
    }
}

impl<A> Extend for Identity<A> {
    fn extend<B, F>(self, mut function: F) -> Identity<B>
    where
        F: FnMut(&Self) -> B,
    {
        Identity(function(&self))
    }
}
