#![cfg(feature = "compose")]
//! Integration tests for the combinators and function-building macros.

use rstest::rstest;
use tacit::compose::{
    always, bluebird, cardinal, compose, constant, flip, flipped, identity, lift2_vec, lift3,
    pipe, starling, thrush,
};
use tacit::control::{Just, Left, Maybe, Nothing, Right};
use tacit::{curry, meld, partial};

fn subtract(a: i32, b: i32) -> i32 {
    a - b
}

fn volume(length: i32, width: i32, height: i32) -> i32 {
    length * width * height
}

// =============================================================================
// Combinators
// =============================================================================

#[rstest]
fn identity_and_constant() {
    assert_eq!(identity(Just(1)), Just(1));
    assert_eq!(constant('k', 1.5), 'k');
    let nothing_at_all: Vec<Maybe<i32>> = (0..3).map(always(Nothing)).collect();
    assert_eq!(nothing_at_all, vec![Nothing, Nothing, Nothing]);
}

#[rstest]
fn argument_order_combinators() {
    assert_eq!(flip(subtract, 1, 10), 9);
    assert_eq!(flipped(subtract)(1, 10), 9);
    assert_eq!(cardinal(|a: i32| move |b: i32| a - b, 1, 10), 9);
    assert_eq!(thrush(10, |n: i32| n / 2), 5);
}

#[rstest]
fn sharing_combinators() {
    assert_eq!(bluebird(|n: i32| n + 1, |n: i32| n * 10, 2), 21);
    assert_eq!(starling(|a: i32| move |b: i32| a * b, |n: i32| n + 1, 4), 20);
}

#[rstest]
fn pipe_function_threads_left_to_right() {
    let steps: [fn(i32) -> i32; 3] = [|n| n + 1, |n| n * 3, |n| n - 2];
    assert_eq!(pipe(steps, 1), 4);
}

#[rstest]
fn compose_function_and_macro_agree() {
    let increment = |n: i32| n + 1;
    let double = |n: i32| n * 2;
    assert_eq!(compose(increment, double)(5), compose!(increment, double)(5));
}

// =============================================================================
// Macros
// =============================================================================

#[rstest]
fn pipe_macro_applies_each_step() {
    let result = pipe!("  tacit  ", str::trim, str::to_uppercase, |text: String| text.len());
    assert_eq!(result, 5);
    assert_eq!(pipe!(3), 3);
}

#[rstest]
fn curry_then_apply_one_at_a_time() {
    let curried = curry!(volume, 3);
    assert_eq!(curried(2)(3)(4), 24);

    let two_by = curried(2);
    let two_by_three = two_by(3);
    assert_eq!(two_by_three(1), 6);
    assert_eq!(two_by_three(10), 60);
}

#[rstest]
fn partial_with_holes() {
    let from_hundred = partial!(subtract, 100, __);
    let minus_one = partial!(subtract, __, 1);
    assert_eq!(from_hundred(1), 99);
    assert_eq!(minus_one(1), 0);

    let flat_box = partial!(volume, __, __, 1);
    assert_eq!(flat_box(3, 4), 12);
}

#[rstest]
fn meld_threads_results_into_first_argument() {
    let negate = |n: i32| -n;
    let melded = meld!(subtract(_, _), volume(_, _, _), negate(_));
    assert_eq!(melded(5, 3, 2, 10), -40);
}

#[rstest]
fn lifted_functions() {
    let product = lift3(
        |a: i32, b: i32, c: i32| a * b * c,
        Just(2),
        Just(3),
        Just(4),
    );
    assert_eq!(product, Just(24));
    assert_eq!(
        lift3(
            |a: i32, b: i32, c: i32| a + b + c,
            Right::<&str, i32>(1),
            Left("missing"),
            Right(3),
        ),
        Left("missing")
    );
    assert_eq!(lift2_vec(|a: i32, b: char| (a, b), vec![1, 2], vec!['x']), vec![(1, 'x'), (2, 'x')]);
}

#[rstest]
fn functions_map_apply_and_wrap_through_combinators() {
    let double = |n: i32| n * 2;
    let describe = |n: i32| format!("<{n}>");
    assert_eq!(compose(describe, double)(4), bluebird(describe, double, 4));
    assert_eq!(compose(identity, double)(7), double(7));
    let pair = |a: i32| move |b: i32| (a, b);
    assert_eq!(starling(pair, double, 5), (5, 10));
    assert_eq!(constant(1, "ignored"), 1);
}
