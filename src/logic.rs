//! Logic combinators over the `toBoolean` capability.
//!
//! `and`, `or` and `xor` choose between their operands by truthiness (see
//! [`ToBoolean`]) rather than producing a `bool`, so they work for
//! booleans, `Maybe`, `Either` and monoids alike.
//!
//! # Examples
//!
//! ```rust
//! use tacit::control::Maybe::{Just, Nothing};
//! use tacit::logic::{and, or, xor};
//!
//! assert_eq!(or(Nothing, Just(1)), Just(1));
//! assert_eq!(and(Just(1), Just(2)), Just(2));
//! assert_eq!(xor(Just(1), Just(2)), Nothing);
//! assert_eq!(xor(Nothing, Just(2)), Just(2));
//! ```

use crate::dispatch::ToBoolean;

/// Returns `right` if `left` is truthy, otherwise `left`.
#[inline]
pub fn and<T: ToBoolean>(left: T, right: T) -> T {
    if left.to_boolean() { right } else { left }
}

/// Returns `left` if it is truthy, otherwise `right`.
#[inline]
pub fn or<T: ToBoolean>(left: T, right: T) -> T {
    if left.to_boolean() { left } else { right }
}

/// Returns the truthy operand if exactly one is truthy, otherwise the
/// empty value of the type.
#[inline]
pub fn xor<T: ToBoolean + Default>(left: T, right: T) -> T {
    match (left.to_boolean(), right.to_boolean()) {
        (true, false) => left,
        (false, true) => right,
        _ => T::default(),
    }
}

/// Boolean negation.
#[inline]
pub const fn not(value: bool) -> bool {
    !value
}

/// Applies `if_true` to `value` when `predicate` holds, `if_false`
/// otherwise.
///
/// # Examples
///
/// ```rust
/// use tacit::logic::if_else;
///
/// let magnitude = |n: i32| if_else(|n: &i32| *n < 0, |n: i32| -n, |n| n, n);
/// assert_eq!(magnitude(-3), 3);
/// assert_eq!(magnitude(4), 4);
/// ```
#[inline]
pub fn if_else<A, B, P, T, F>(predicate: P, if_true: T, if_false: F, value: A) -> B
where
    P: FnOnce(&A) -> bool,
    T: FnOnce(A) -> B,
    F: FnOnce(A) -> B,
{
    if predicate(&value) { if_true(value) } else { if_false(value) }
}

/// Returns `true` if every predicate holds for `value`.
///
/// Stops at the first predicate that fails; an empty list passes.
pub fn all_pass<A, P>(predicates: &[P], value: &A) -> bool
where
    P: Fn(&A) -> bool,
{
    predicates.iter().all(|predicate| predicate(value))
}

/// Returns `true` if any predicate holds for `value`.
///
/// Stops at the first predicate that passes; an empty list fails.
///
/// # Examples
///
/// ```rust
/// use tacit::logic::any_pass;
///
/// let checks: [fn(&i32) -> bool; 2] = [|n| *n < 0, |n| *n > 100];
/// assert!(any_pass(&checks, &-1));
/// assert!(!any_pass(&checks, &50));
/// ```
pub fn any_pass<A, P>(predicates: &[P], value: &A) -> bool
where
    P: Fn(&A) -> bool,
{
    predicates.iter().any(|predicate| predicate(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{Either, Left, Maybe, Nothing, Right};
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[case(false, false, false)]
    #[case(false, true, false)]
    #[case(true, false, false)]
    #[case(true, true, true)]
    fn and_on_booleans(#[case] left: bool, #[case] right: bool, #[case] expected: bool) {
        assert_eq!(and(left, right), expected);
    }

    #[rstest]
    #[case(false, false, false)]
    #[case(false, true, true)]
    #[case(true, false, true)]
    #[case(true, true, false)]
    fn xor_on_booleans(#[case] left: bool, #[case] right: bool, #[case] expected: bool) {
        assert_eq!(xor(left, right), expected);
    }

    #[rstest]
    fn or_on_either_prefers_right_values() {
        let left: Either<&str, i32> = Left("a");
        let right: Either<&str, i32> = Right(1);
        assert_eq!(or(left, right), Right(1));
        assert_eq!(or(left, Left("b")), Left("b"));
    }

    #[rstest]
    fn and_on_strings_uses_non_emptiness() {
        assert_eq!(and(String::new(), "x".to_string()), "");
        assert_eq!(and("a".to_string(), "b".to_string()), "b");
    }

    #[rstest]
    fn xor_of_two_values_is_empty() {
        assert_eq!(xor(vec![1], vec![2]), Vec::<i32>::new());
        assert_eq!(xor(Maybe::Just(1), Nothing), Maybe::Just(1));
    }

    #[rstest]
    fn not_negates() {
        assert!(not(false));
        assert!(!not(true));
    }

    #[rstest]
    fn all_pass_short_circuits() {
        let calls = Cell::new(0);
        let predicates: Vec<Box<dyn Fn(&i32) -> bool + '_>> = vec![
            Box::new(|n| {
                calls.set(calls.get() + 1);
                *n > 10
            }),
            Box::new(|_| {
                calls.set(calls.get() + 1);
                true
            }),
        ];
        assert!(!all_pass(&predicates, &1));
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn empty_predicate_lists() {
        let none: [fn(&i32) -> bool; 0] = [];
        assert!(all_pass(&none, &0));
        assert!(!any_pass(&none, &0));
    }
}
