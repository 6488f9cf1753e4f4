//! Running fallible functions so that failure becomes a value.
//!
//! The `encase` family calls a `Result`-returning function and converts the
//! outcome: `encase*` gives `Just` for `Ok` and discards the error,
//! `encase_either*` gives `Right` for `Ok` and passes the error through a
//! mapper into `Left`.
//!
//! Functions that signal failure by panicking instead are handled by
//! [`encase_panic`] and [`encase_either_panic`], which catch the unwind. A
//! caught panic is never re-raised. The panic hook still runs, so the
//! default hook prints the message to stderr.
//!
//! # Examples
//!
//! ```rust
//! use tacit::control::{encase, encase_either, Either::Left, Maybe::{Just, Nothing}};
//!
//! fn factorial(n: i64) -> Result<i64, String> {
//!     if n < 0 {
//!         Err("Cannot determine factorial of negative number".to_string())
//!     } else {
//!         Ok((1..=n).product())
//!     }
//! }
//!
//! assert_eq!(encase(factorial, 5), Just(120));
//! assert_eq!(encase(factorial, -1), Nothing);
//! assert_eq!(
//!     encase_either(|error| error, factorial, -1),
//!     Left("Cannot determine factorial of negative number".to_string())
//! );
//! ```

use std::panic::{self, AssertUnwindSafe};

use super::either::Either;
use super::maybe::Maybe;
use crate::error::PanicError;

macro_rules! define_encase {
    ($suffix:tt; $($argument:ident: $type:ident),+) => {
        paste::paste! {
            #[doc = concat!(
                "Applies a ", stringify!($suffix), "-argument `Result`-returning function, ",
                "giving `Just` the value or `Nothing` on error."
            )]
            #[inline]
            pub fn [<encase $suffix>]<$($type,)+ Output, Error, Function>(
                function: Function,
                $($argument: $type),+
            ) -> Maybe<Output>
            where
                Function: FnOnce($($type),+) -> Result<Output, Error>,
            {
                function($($argument),+).ok().into()
            }

            #[doc = concat!(
                "Applies a ", stringify!($suffix), "-argument `Result`-returning function, ",
                "giving `Right` the value or `Left` the mapped error."
            )]
            #[inline]
            pub fn [<encase_either $suffix>]<$($type,)+ Output, Error, L, Mapper, Function>(
                mapper: Mapper,
                function: Function,
                $($argument: $type),+
            ) -> Either<L, Output>
            where
                Mapper: FnOnce(Error) -> L,
                Function: FnOnce($($type),+) -> Result<Output, Error>,
            {
                Either::from(function($($argument),+)).map_left(mapper)
            }
        }
    };
}

define_encase!(2; first: A, second: B);
define_encase!(3; first: A, second: B, third: C);

/// Applies a unary `Result`-returning function, giving `Just` the value or
/// `Nothing` on error. The error itself is discarded.
#[inline]
pub fn encase<A, Output, Error, Function>(function: Function, argument: A) -> Maybe<Output>
where
    Function: FnOnce(A) -> Result<Output, Error>,
{
    function(argument).ok().into()
}

/// Applies a unary `Result`-returning function, giving `Right` the value or
/// `Left` the error mapped through `mapper`.
#[inline]
pub fn encase_either<A, Output, Error, L, Mapper, Function>(
    mapper: Mapper,
    function: Function,
    argument: A,
) -> Either<L, Output>
where
    Mapper: FnOnce(Error) -> L,
    Function: FnOnce(A) -> Result<Output, Error>,
{
    Either::from(function(argument)).map_left(mapper)
}

fn catch<Output>(function: impl FnOnce() -> Output) -> Result<Output, PanicError> {
    panic::catch_unwind(AssertUnwindSafe(function)).map_err(|payload| {
        let error = PanicError::from_payload(payload.as_ref());
        tracing::debug!(message = %error.message, "caught panic in encased function");
        error
    })
}

/// Applies a function that may panic, giving `Just` the value or `Nothing`
/// if it panicked.
///
/// The function is treated as unwind safe: state it mutated before
/// panicking is observable afterwards.
///
/// # Examples
///
/// ```rust
/// use tacit::control::{encase_panic, Maybe::{Just, Nothing}};
///
/// let head = |values: Vec<i32>| values[0];
/// assert_eq!(encase_panic(head, vec![7]), Just(7));
/// assert_eq!(encase_panic(head, vec![]), Nothing);
/// ```
pub fn encase_panic<A, Output, Function>(function: Function, argument: A) -> Maybe<Output>
where
    Function: FnOnce(A) -> Output,
{
    catch(move || function(argument)).ok().into()
}

/// Applies a function that may panic, giving `Right` the value or `Left` the
/// caught [`PanicError`] mapped through `mapper`.
pub fn encase_either_panic<A, Output, L, Mapper, Function>(
    mapper: Mapper,
    function: Function,
    argument: A,
) -> Either<L, Output>
where
    Mapper: FnOnce(PanicError) -> L,
    Function: FnOnce(A) -> Output,
{
    Either::from(catch(move || function(argument))).map_left(mapper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn checked_divide(numerator: i32, denominator: i32) -> Result<i32, String> {
        numerator
            .checked_div(denominator)
            .ok_or_else(|| format!("cannot divide {numerator} by {denominator}"))
    }

    #[rstest]
    fn encase_discards_error() {
        assert_eq!(encase(|text: &str| text.parse::<i32>(), "12"), Maybe::Just(12));
        assert_eq!(encase(|text: &str| text.parse::<i32>(), "twelve"), Maybe::Nothing);
    }

    #[rstest]
    #[case(10, 2, Maybe::Just(5))]
    #[case(10, 0, Maybe::Nothing)]
    fn encase2_applies_both_arguments(
        #[case] numerator: i32,
        #[case] denominator: i32,
        #[case] expected: Maybe<i32>,
    ) {
        assert_eq!(encase2(checked_divide, numerator, denominator), expected);
    }

    #[rstest]
    fn encase3_applies_all_arguments() {
        let clamp = |low: i32, high: i32, value: i32| -> Result<i32, ()> {
            if low > high { Err(()) } else { Ok(value.clamp(low, high)) }
        };
        assert_eq!(encase3(clamp, 0, 10, 42), Maybe::Just(10));
        assert_eq!(encase3(clamp, 10, 0, 42), Maybe::Nothing);
    }

    #[rstest]
    fn encase_either2_maps_error() {
        assert_eq!(
            encase_either2(|message: String| message.len(), checked_divide, 1, 0),
            Either::Left("cannot divide 1 by 0".len())
        );
        assert_eq!(encase_either2(|message: String| message.len(), checked_divide, 9, 3), Either::Right(3));
    }

    #[rstest]
    fn encase_either3_maps_error() {
        let sum_positive = |a: i32, b: i32, c: i32| -> Result<i32, i32> {
            [a, b, c].into_iter().find(|n| *n <= 0).map_or(Ok(a + b + c), Err)
        };
        assert_eq!(encase_either3(|n| n * 100, sum_positive, 1, -2, 3), Either::Left(-200));
        assert_eq!(encase_either3(|n| n * 100, sum_positive, 1, 2, 3), Either::Right(6));
    }

    #[rstest]
    fn encase_panic_converts_panic_to_nothing() {
        let result: Maybe<i32> = encase_panic(|n: i32| if n < 0 { panic!("negative") } else { n }, -1);
        assert_eq!(result, Maybe::Nothing);
    }

    #[rstest]
    fn encase_either_panic_carries_message() {
        let result = encase_either_panic(
            |error: PanicError| error.message,
            |n: i32| -> i32 { panic!("bad input {n}") },
            3,
        );
        assert_eq!(result, Either::Left("bad input 3".to_string()));
    }
}
