//! Maybe type - an optional value.
//!
//! This module provides the `Maybe<A>` type, which is either `Nothing` or
//! `Just(a)`. It is the library's representation of absence: out-of-range
//! indices, failed lookups and failed type checks all yield `Nothing`
//! instead of a sentinel value.
//!
//! `Maybe` satisfies Functor, Applicative, Monad, Foldable, Traversable,
//! Extend, Setoid, Semigroup (when the payload does) and Monoid. The trait
//! implementations live next to their traits in [`crate::typeclass`]; this
//! module holds the type, its inherent methods and the free functions built
//! on it.
//!
//! # Examples
//!
//! ```rust
//! use tacit::control::Maybe::{self, Just, Nothing};
//!
//! let found: Maybe<i32> = Just(42);
//! assert_eq!(found.map(|n| n + 1), Just(43));
//!
//! let missing: Maybe<i32> = Nothing;
//! assert_eq!(missing.map(|n| n + 1), Nothing);
//!
//! assert_eq!(Just(9).to_string(), "Just(9)");
//! assert_eq!(Nothing::<i32>.to_string(), "Nothing");
//! ```

use std::fmt;

use super::either::Either;
use crate::typeclass::Show;

/// An optional value: `Nothing`, or `Just` a value of type `A`.
///
/// A `Just` may wrap any value, including `()` or a nested `Nothing`.
/// `Nothing` carries no payload; it is a unit variant, so every `Nothing`
/// of a given type is the same value.
///
/// Values are only built through the `Just` and `Nothing` variants and are
/// immutable once built.
///
/// # Examples
///
/// ```rust
/// use tacit::control::Maybe;
///
/// let value: Maybe<&str> = Maybe::Just("hello");
/// assert!(value.is_just());
/// assert!(!value.is_nothing());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "tag", content = "value")
)]
pub enum Maybe<A> {
    /// The empty variant.
    Nothing,
    /// The variant holding exactly one value.
    Just(A),
}

pub use Maybe::{Just, Nothing};

impl<A> Maybe<A> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Just`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tacit::control::Maybe::{self, Just, Nothing};
    ///
    /// assert!(Just(42).is_just());
    /// assert!(!Nothing::<i32>.is_just());
    /// ```
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if this is `Nothing`.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    /// Applies a function to the wrapped value.
    ///
    /// The function is never invoked for `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tacit::control::Maybe::{self, Just, Nothing};
    ///
    /// assert_eq!(Just(9.0_f64).map(f64::sqrt), Just(3.0));
    /// assert_eq!(Nothing::<f64>.map(f64::sqrt), Nothing);
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Applies the function held by `function` to the value held by `self`.
    ///
    /// Returns `Nothing` unless both operands are `Just`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tacit::control::Maybe::{self, Just, Nothing};
    ///
    /// let increment = |n: i32| n + 1;
    /// assert_eq!(Just(42).ap(Just(increment)), Just(43));
    /// assert_eq!(Nothing.ap(Just(increment)), Nothing);
    /// assert_eq!(Just(42).ap(Nothing::<fn(i32) -> i32>), Nothing);
    /// ```
    #[inline]
    pub fn ap<B, F>(self, function: Maybe<F>) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match function {
            Maybe::Just(function) => self.map(function),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Sequences a computation that itself may produce `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tacit::control::Maybe::{self, Just, Nothing};
    ///
    /// fn parse(text: &str) -> Maybe<i32> {
    ///     Maybe::from(text.parse::<i32>().ok())
    /// }
    ///
    /// assert_eq!(Just("12").chain(parse), Just(12));
    /// assert_eq!(Just("xx").chain(parse), Nothing);
    /// assert_eq!(Nothing.chain(parse), Nothing);
    /// ```
    #[inline]
    pub fn chain<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Keeps the value only if it satisfies the predicate.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Self::Just(value) if predicate(&value) => Self::Just(value),
            _ => Self::Nothing,
        }
    }

    // =========================================================================
    // Extraction and Conversion
    // =========================================================================

    /// Returns the wrapped value, or `default` if this is `Nothing`.
    #[inline]
    pub fn from_maybe(self, default: A) -> A {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    /// Converts from `&Maybe<A>` to `Maybe<&A>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&A> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Converts into the nullable representation, `Option<A>`.
    #[inline]
    pub fn into_option(self) -> Option<A> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    /// Converts to an `Either`, using `left` when this is `Nothing`.
    #[inline]
    pub fn to_either<L>(self, left: L) -> Either<L, A> {
        match self {
            Self::Just(value) => Either::Right(value),
            Self::Nothing => Either::Left(left),
        }
    }
}

impl<A> Maybe<Maybe<A>> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tacit::control::Maybe::{self, Just, Nothing};
    ///
    /// assert_eq!(Just(Just(1)).join(), Just(1));
    /// assert_eq!(Just(Nothing::<i32>).join(), Nothing);
    /// ```
    #[inline]
    pub fn join(self) -> Maybe<A> {
        self.chain(|inner| inner)
    }
}

impl<A> Default for Maybe<A> {
    fn default() -> Self {
        Self::Nothing
    }
}

impl<A> From<Option<A>> for Maybe<A> {
    #[inline]
    fn from(option: Option<A>) -> Self {
        match option {
            Some(value) => Self::Just(value),
            None => Self::Nothing,
        }
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    #[inline]
    fn from(maybe: Maybe<A>) -> Self {
        maybe.into_option()
    }
}

impl<A> FromIterator<Maybe<A>> for Maybe<Vec<A>> {
    fn from_iter<I: IntoIterator<Item = Maybe<A>>>(iterator: I) -> Self {
        iterator
            .into_iter()
            .map(Maybe::into_option)
            .collect::<Option<Vec<A>>>()
            .into()
    }
}

impl<A: Show> fmt::Display for Maybe<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.show())
    }
}

// =============================================================================
// Free Functions
// =============================================================================

/// Returns `true` if the given `Maybe` is a `Just`.
#[inline]
pub const fn is_just<A>(maybe: &Maybe<A>) -> bool {
    maybe.is_just()
}

/// Returns `true` if the given `Maybe` is `Nothing`.
#[inline]
pub const fn is_nothing<A>(maybe: &Maybe<A>) -> bool {
    maybe.is_nothing()
}

/// Returns the value of a `Just`, or `default` for `Nothing`.
///
/// # Examples
///
/// ```rust
/// use tacit::control::{from_maybe, Maybe::{Just, Nothing}};
///
/// assert_eq!(from_maybe(0, Just(42)), 42);
/// assert_eq!(from_maybe(0, Nothing), 0);
/// ```
#[inline]
pub fn from_maybe<A>(default: A, maybe: Maybe<A>) -> A {
    maybe.from_maybe(default)
}

/// Returns the value of a `Just`, or `None` for `Nothing`.
#[inline]
pub fn maybe_to_nullable<A>(maybe: Maybe<A>) -> Option<A> {
    maybe.into_option()
}

/// Lifts a nullable value: `None` becomes `Nothing`, anything else `Just`.
///
/// # Examples
///
/// ```rust
/// use tacit::control::{to_maybe, Maybe::{Just, Nothing}};
///
/// assert_eq!(to_maybe(None::<i32>), Nothing);
/// assert_eq!(to_maybe(Some(42)), Just(42));
/// ```
#[inline]
pub fn to_maybe<A>(value: Option<A>) -> Maybe<A> {
    value.into()
}

/// Case analysis: `default` for `Nothing`, `function(value)` for `Just`.
///
/// Equivalent to `from_maybe(default, maybe.map(function))`.
///
/// # Examples
///
/// ```rust
/// use tacit::control::{maybe, Maybe::{Just, Nothing}};
///
/// assert_eq!(maybe(0, |text: &str| text.len(), Just("refuge")), 6);
/// assert_eq!(maybe(0, |text: &str| text.len(), Nothing), 0);
/// ```
#[inline]
pub fn maybe<A, B, F>(default: B, function: F, maybe: Maybe<A>) -> B
where
    F: FnOnce(A) -> B,
{
    maybe.map(function).from_maybe(default)
}

/// Collects the values of every `Just`, in order, dropping each `Nothing`.
///
/// # Examples
///
/// ```rust
/// use tacit::control::{justs, Maybe::{Just, Nothing}};
///
/// assert_eq!(justs(vec![Just("foo"), Nothing, Just("baz")]), vec!["foo", "baz"]);
/// ```
pub fn justs<A, I>(maybes: I) -> Vec<A>
where
    I: IntoIterator<Item = Maybe<A>>,
{
    maybes.into_iter().filter_map(Maybe::into_option).collect()
}

/// Maps `function` over `values` and keeps only the `Just` results.
///
/// Equivalent to `justs(values.map(function))`.
pub fn map_maybe<A, B, I, F>(function: F, values: I) -> Vec<B>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Maybe<B>,
{
    justs(values.into_iter().map(function))
}

/// Converts a `Maybe` to an `Either`: `Nothing` becomes `Left(left)` and
/// `Just(value)` becomes `Right(value)`.
#[inline]
pub fn maybe_to_either<L, A>(left: L, maybe: Maybe<A>) -> Either<L, A> {
    maybe.to_either(left)
}
