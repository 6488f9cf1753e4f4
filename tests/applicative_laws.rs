//! Property-based tests for the Apply and Applicative laws.
//!
//! - **Identity**: `v.ap(of(|x| x)) == v`
//! - **Homomorphism**: `of(x).ap(of(f)) == of(f(x))`
//! - **Interchange**: `of(y).ap(u) == u.ap(of(|f| f(y)))`
//! - **Composition** (Apply): `v.ap(u).ap(a) == v.ap(u.ap(a.map(compose)))`

use proptest::prelude::*;
use proptest::strategy;
use tacit::control::{Either, Just, Left, Maybe, Nothing, Right};
use tacit::typeclass::{Applicative, ApplicativeVec};

type Function = fn(i32) -> i32;

fn maybe_of<T: Arbitrary + 'static>() -> impl Strategy<Value = Maybe<T>> {
    any::<Option<T>>().prop_map(Maybe::from)
}

fn maybe_function() -> impl Strategy<Value = Maybe<Function>> {
    prop_oneof![
        strategy::Just(Nothing),
        strategy::Just(Just(i32::wrapping_neg as Function)),
        strategy::Just(Just((|n: i32| n.wrapping_add(3)) as Function)),
        strategy::Just(Just((|n: i32| n.wrapping_mul(5)) as Function)),
    ]
}

proptest! {
    #[test]
    fn prop_maybe_identity(value in maybe_of::<i32>()) {
        prop_assert_eq!(value.ap(Just(|x: i32| x)), value);
    }

    #[test]
    fn prop_maybe_homomorphism(value in any::<i32>()) {
        let function = |n: i32| n.wrapping_sub(9);
        let lifted = <Maybe<i32> as Applicative>::of(value).ap(Maybe::Just(function));
        prop_assert_eq!(lifted, Maybe::Just(function(value)));
    }

    #[test]
    fn prop_maybe_interchange(value in any::<i32>(), function in maybe_function()) {
        let left = Maybe::Just(value).ap(function);
        let right = function.ap(Maybe::Just(move |f: Function| f(value)));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_maybe_composition(
        value in maybe_of::<i32>(),
        first in maybe_function(),
        second in maybe_function(),
    ) {
        let left = value.ap(second).ap(first);
        let composed = first.map(|f: Function| move |g: Function| move |x: i32| f(g(x)));
        let right = value.ap(second.ap(composed));
        prop_assert_eq!(left, right);
    }
}

proptest! {
    #[test]
    fn prop_either_homomorphism(value in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(-1);
        let lifted = <Either<String, i32> as Applicative>::of(value).ap(Right(function));
        prop_assert_eq!(lifted, Right(function(value)));
    }

    #[test]
    fn prop_either_map2_matches_ap(first in any::<i16>(), second in any::<i16>()) {
        let add = |a: i16, b: i16| i32::from(a) + i32::from(b);
        let combined = Applicative::map2(Right::<String, i16>(first), Right(second), add);
        prop_assert_eq!(combined, Right(add(first, second)));
    }
}

#[test]
fn either_ap_reports_the_function_left_first() {
    let function: Either<&str, Function> = Left("no function");
    let value: Either<&str, i32> = Left("no value");
    assert_eq!(value.ap(function), Left("no function"));
}

proptest! {
    #[test]
    fn prop_vec_ap_length_is_product(
        values in prop::collection::vec(any::<i32>(), 0..6),
        count in 0usize..4,
    ) {
        let functions: Vec<Function> = vec![i32::wrapping_neg as Function; count];
        let applied = ApplicativeVec::ap(values.clone(), functions);
        prop_assert_eq!(applied.len(), values.len() * count);
    }
}
