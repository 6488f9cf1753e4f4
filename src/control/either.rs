//! The disjoint union `Either<L, R>`: a `Left(L)` or a `Right(R)`.
//!
//! The type itself gives the
//! sides no meaning; the protocol implementations do. `map`, `chain` and
//! `ap` continue with a `Right` and short-circuit on a `Left`, which makes
//! `Left` the natural carrier of failure information.
//!
//! # Examples
//!
//! ```rust
//! use tacit::control::Either::{self, Left, Right};
//!
//! fn safe_divide(numerator: i32, denominator: i32) -> Either<String, i32> {
//!     if denominator == 0 {
//!         Left("Cannot divide by zero".to_string())
//!     } else {
//!         Right(numerator / denominator)
//!     }
//! }
//!
//! assert_eq!(safe_divide(42, 2).map(|n| n + 1), Right(22));
//! assert!(safe_divide(42, 0).is_left());
//! assert_eq!(safe_divide(42, 0).to_string(), "Left(\"Cannot divide by zero\")");
//! ```

use std::fmt;

use super::maybe::Maybe;
use crate::typeclass::Show;

/// A `Left` or a `Right`.
///
/// Computations continue on `Right`; a `Left` passes through `map`,
/// `chain` and `ap` untouched.
///
/// # Examples
///
/// ```rust
/// use tacit::control::Either::{self, Left, Right};
///
/// let parsed: Either<String, u8> = Right(200);
/// let overflowed: Either<String, u8> = Left("300 does not fit".to_string());
///
/// assert_eq!(parsed.map(u8::leading_zeros), Right(0));
/// assert_eq!(overflowed.map(u8::leading_zeros), Left("300 does not fit".to_string()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "tag", content = "value")
)]
pub enum Either<L, R> {
    /// The left variant, conventionally representing failure.
    Left(L),
    /// The right variant, conventionally representing success.
    Right(R),
}

pub use Either::{Left, Right};

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts into `Maybe<L>`, discarding a `Right`.
    #[inline]
    pub fn left(self) -> Maybe<L> {
        match self {
            Self::Left(value) => Maybe::Just(value),
            Self::Right(_) => Maybe::Nothing,
        }
    }

    /// Converts into `Maybe<R>`, discarding a `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tacit::control::{Either, Maybe};
    ///
    /// let right: Either<String, i32> = Either::Right(42);
    /// assert_eq!(right.right(), Maybe::Just(42));
    ///
    /// let left: Either<String, i32> = Either::Left("error".to_string());
    /// assert_eq!(left.right(), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn right(self) -> Maybe<R> {
        match self {
            Self::Left(_) => Maybe::Nothing,
            Self::Right(value) => Maybe::Just(value),
        }
    }

    /// Converts from `&Either<L, R>` to `Either<&L, &R>`.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the `Right` value, leaving a `Left` untouched.
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies a function to the `Left` value, leaving a `Right` untouched.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies one of two functions depending on the variant.
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Applies the function held by `function` to the value held by `self`.
    ///
    /// Left-biased: if `function` is a `Left` it is returned, otherwise if
    /// `self` is a `Left` it is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tacit::control::Either::{self, Left, Right};
    ///
    /// let increment: Either<&str, fn(i32) -> i32> = Right(|n| n + 1);
    /// assert_eq!(Right::<&str, i32>(42).ap(increment), Right(43));
    ///
    /// let missing: Either<&str, fn(i32) -> i32> = Left("no function");
    /// assert_eq!(Left::<&str, i32>("no value").ap(missing), Left("no function"));
    /// ```
    #[inline]
    pub fn ap<T, F>(self, function: Either<L, F>) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match function {
            Either::Left(value) => Either::Left(value),
            Either::Right(function) => self.map(function),
        }
    }

    /// Sequences a computation that itself may produce a `Left`.
    #[inline]
    pub fn chain<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    // =========================================================================
    // Case Analysis
    // =========================================================================

    /// Applies `left_function` to a `Left` or `right_function` to a `Right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tacit::control::Either;
    ///
    /// let value: Either<String, i32> = Either::Right(42);
    /// let text = value.either(|error| error.to_uppercase(), |n| n.to_string());
    /// assert_eq!(text, "42");
    /// ```
    #[inline]
    pub fn either<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Returns the `Right` value, or `default` for a `Left`.
    #[inline]
    pub fn from_either(self, default: R) -> R {
        match self {
            Self::Left(_) => default,
            Self::Right(value) => value,
        }
    }

    /// Exchanges the two sides.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }
}

impl<L, R> Either<L, Either<L, R>> {
    /// Removes one level of nesting on the right.
    #[inline]
    pub fn join(self) -> Either<L, R> {
        self.chain(|inner| inner)
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

impl<L: Show, R: Show> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.show())
    }
}

// =============================================================================
// Free Functions
// =============================================================================

/// Returns `true` if the given `Either` is a `Left`.
#[inline]
pub const fn is_left<L, R>(either: &Either<L, R>) -> bool {
    either.is_left()
}

/// Returns `true` if the given `Either` is a `Right`.
#[inline]
pub const fn is_right<L, R>(either: &Either<L, R>) -> bool {
    either.is_right()
}

/// Returns the `Right` value, or `default` for a `Left`.
#[inline]
pub fn from_either<L, R>(default: R, either: Either<L, R>) -> R {
    either.from_either(default)
}

/// Lifts a nullable value: `None` becomes `Left(left)`, anything else `Right`.
///
/// # Examples
///
/// ```rust
/// use tacit::control::{to_either, Either::{Left, Right}};
///
/// assert_eq!(to_either("Invalid protocol", None::<&str>), Left("Invalid protocol"));
/// assert_eq!(to_either("Invalid protocol", Some("https")), Right("https"));
/// ```
#[inline]
pub fn to_either<L, R>(left: L, value: Option<R>) -> Either<L, R> {
    match value {
        Some(value) => Either::Right(value),
        None => Either::Left(left),
    }
}

/// Case analysis for `Either`.
#[inline]
pub fn either<L, R, T, F, G>(left_function: F, right_function: G, either: Either<L, R>) -> T
where
    F: FnOnce(L) -> T,
    G: FnOnce(R) -> T,
{
    either.either(left_function, right_function)
}

/// Collects the values of every `Left`, in order.
pub fn lefts<L, R, I>(eithers: I) -> Vec<L>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    eithers
        .into_iter()
        .filter_map(|either| either.left().into_option())
        .collect()
}

/// Collects the values of every `Right`, in order.
///
/// # Examples
///
/// ```rust
/// use tacit::control::{rights, Either::{Left, Right}};
///
/// let values = vec![Right(20), Left("foo"), Right(10), Left("bar")];
/// assert_eq!(rights(values), vec![20, 10]);
/// ```
pub fn rights<L, R, I>(eithers: I) -> Vec<R>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    eithers
        .into_iter()
        .filter_map(|either| either.right().into_option())
        .collect()
}

/// Converts an `Either` to a `Maybe`: a `Left` becomes `Nothing`.
#[inline]
pub fn either_to_maybe<L, R>(either: Either<L, R>) -> Maybe<R> {
    either.right()
}
