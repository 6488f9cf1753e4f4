//! Arithmetic as plain functions, plus folds over any [`Foldable`].
//!
//! The binary operations take their operands in reading order, so
//! `sub(4, 2)` is `2`. They work for every type with the matching operator;
//! the folds need a zero or one, which is taken from `From<u8>`.
//!
//! # Examples
//!
//! ```rust
//! use tacit::control::Maybe::{Just, Nothing};
//! use tacit::number::{div, mean, product, sum};
//!
//! assert_eq!(sum(vec![1, 2, 3, 4, 5]), 15);
//! assert_eq!(product(Just(42)), 42);
//! assert_eq!(mean(vec![1.0, 2.0, 3.0, 4.0, 5.0]), Just(3.0));
//! assert_eq!(div(7.0, 2.0), Just(3.5));
//! assert_eq!(div(7.0, 0.0), Nothing);
//! ```

use std::ops::{Add, Mul, Neg, Rem, Sub};

use crate::control::Maybe::{self, Just, Nothing};
use crate::typeclass::Foldable;

/// Negates `value`.
#[inline]
pub fn negate<T: Neg<Output = T>>(value: T) -> T {
    -value
}

/// `left + right`.
#[inline]
pub fn add<T: Add<Output = T>>(left: T, right: T) -> T {
    left + right
}

/// `left - right`.
#[inline]
pub fn sub<T: Sub<Output = T>>(left: T, right: T) -> T {
    left - right
}

/// `left * right`.
#[inline]
pub fn mult<T: Mul<Output = T>>(left: T, right: T) -> T {
    left * right
}

/// `left / right`, or `Nothing` unless `right` is finite and non-zero.
#[inline]
pub fn div(left: f64, right: f64) -> Maybe<f64> {
    if right.is_finite() && right.abs() > 0.0 {
        Just(left / right)
    } else {
        Nothing
    }
}

/// `value + 1`.
#[inline]
pub fn inc<T: Add<Output = T> + From<u8>>(value: T) -> T {
    value + T::from(1)
}

/// `value - 1`.
#[inline]
pub fn dec<T: Sub<Output = T> + From<u8>>(value: T) -> T {
    value - T::from(1)
}

/// The sum of every number in `foldable`; `0` when it is empty.
pub fn sum<F, T>(foldable: F) -> T
where
    F: Foldable<Inner = T>,
    T: Add<Output = T> + From<u8>,
{
    foldable.reduce(T::from(0), add)
}

/// The product of every number in `foldable`; `1` when it is empty.
pub fn product<F, T>(foldable: F) -> T
where
    F: Foldable<Inner = T>,
    T: Mul<Output = T> + From<u8>,
{
    foldable.reduce(T::from(1), mult)
}

/// The arithmetic mean of `foldable`, or `Nothing` when it is empty.
///
/// # Examples
///
/// ```rust
/// use tacit::control::Maybe::{Just, Nothing};
/// use tacit::number::mean;
///
/// assert_eq!(mean(vec![1_i32, 2]), Just(1.5));
/// assert_eq!(mean(Vec::<f64>::new()), Nothing);
/// assert_eq!(mean(Nothing::<f32>), Nothing);
/// ```
pub fn mean<F, T>(foldable: F) -> Maybe<f64>
where
    F: Foldable<Inner = T>,
    T: Into<f64>,
{
    let (total, count) = foldable.reduce((0.0, 0.0), |(total, count): (f64, f64), value| {
        let value: f64 = value.into();
        (total + value, count + 1.0)
    });
    if count > 0.0 { Just(total / count) } else { Nothing }
}

/// The smaller operand; `right` when they are equal or unordered.
#[inline]
pub fn min<T: PartialOrd>(left: T, right: T) -> T {
    if left < right { left } else { right }
}

/// The larger operand; `right` when they are equal or unordered.
#[inline]
pub fn max<T: PartialOrd>(left: T, right: T) -> T {
    if left > right { left } else { right }
}

/// Returns `true` if `value` is divisible by two.
#[inline]
pub fn even<T: Rem<Output = T> + PartialEq + From<u8>>(value: T) -> bool {
    value % T::from(2) == T::from(0)
}

/// Returns `true` if `value` is not divisible by two.
#[inline]
pub fn odd<T: Rem<Output = T> + PartialEq + From<u8>>(value: T) -> bool {
    !even(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert_eq, proptest};
    use rstest::rstest;

    #[rstest]
    fn binary_operations_read_left_to_right() {
        assert_eq!(add(1, 1), 2);
        assert_eq!(sub(4, 2), 2);
        assert_eq!(mult(4, 2), 8);
        assert_eq!(negate(12.5), -12.5);
        assert_eq!(negate(-42), 42);
        assert_eq!(inc(1), 2);
        assert_eq!(dec(2.5), 1.5);
    }

    #[rstest]
    #[case(1.0, f64::INFINITY)]
    #[case(1.0, f64::NAN)]
    #[case(1.0, -0.0)]
    fn div_needs_a_finite_non_zero_divisor(#[case] left: f64, #[case] right: f64) {
        assert_eq!(div(left, right), Nothing);
    }

    #[rstest]
    fn folds_over_any_foldable() {
        assert_eq!(sum(Vec::<i64>::new()), 0);
        assert_eq!(sum(Nothing::<u32>), 0);
        assert_eq!(product(vec![1, 2, 3, 4, 5]), 120);
        assert_eq!(product(Vec::<f64>::new()), 1.0);
        assert_eq!(mean(Just(42_u8)), Just(42.0));
    }

    #[rstest]
    #[case(10, 2, 2, 10)]
    #[case(-1, 1, -1, 1)]
    #[case(3, 3, 3, 3)]
    fn min_and_max(#[case] left: i32, #[case] right: i32, #[case] smaller: i32, #[case] larger: i32) {
        assert_eq!(min(left, right), smaller);
        assert_eq!(max(left, right), larger);
    }

    #[rstest]
    fn strings_compare_by_code_point() {
        assert_eq!(min("10", "2"), "10");
        assert_eq!(max("10", "2"), "2");
    }

    #[rstest]
    #[case(42, true)]
    #[case(99, false)]
    #[case(0, true)]
    #[case(-3, false)]
    fn parity(#[case] value: i64, #[case] is_even: bool) {
        assert_eq!(even(value), is_even);
        assert_eq!(odd(value), !is_even);
    }

    proptest! {
        #[test]
        fn sum_agrees_with_iterator_sum(values in proptest::collection::vec(-1000_i64..1000, 0..20)) {
            prop_assert_eq!(sum(values.clone()), values.iter().sum::<i64>());
        }

        #[test]
        fn mean_lies_between_extremes(values in proptest::collection::vec(-1000_i32..1000, 1..20)) {
            let average = mean(values.clone()).from_maybe(f64::NAN);
            let lowest = values.iter().copied().fold(i32::MAX, min);
            let highest = values.iter().copied().fold(i32::MIN, max);
            proptest::prop_assert!(f64::from(lowest) <= average && average <= f64::from(highest));
        }
    }
}
