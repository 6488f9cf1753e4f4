//! Integration tests for Either.

use rstest::rstest;
use tacit::control::{
    Either, Just, Left, Nothing, Right, either, either_to_maybe, from_either, is_left, is_right,
    lefts, rights, to_either,
};

#[rstest]
fn predicates() {
    assert!(is_left(&Left::<i32, i32>(1)));
    assert!(is_right(&Right::<i32, i32>(1)));
}

#[rstest]
fn either_eliminates_both_sides() {
    let describe = |value: Either<String, i32>| {
        either(|error: String| format!("error: {error}"), |n: i32| format!("ok: {n}"), value)
    };
    assert_eq!(describe(Left("bad".to_string())), "error: bad");
    assert_eq!(describe(Right(1)), "ok: 1");
}

#[rstest]
fn from_either_defaults_left() {
    assert_eq!(from_either(0, Left::<&str, i32>("x")), 0);
    assert_eq!(from_either(0, Right::<&str, i32>(9)), 9);
}

#[rstest]
fn to_either_from_option() {
    assert_eq!(to_either("none", Some(1)), Right(1));
    assert_eq!(to_either::<&str, i32>("none", None), Left("none"));
}

#[rstest]
fn either_to_maybe_drops_left() {
    assert_eq!(either_to_maybe(Right::<&str, i32>(1)), Just(1));
    assert_eq!(either_to_maybe(Left::<&str, i32>("x")), Nothing);
}

#[rstest]
fn lefts_and_rights_partition() {
    let values: Vec<Either<&str, i32>> = vec![Left("a"), Right(1), Left("b"), Right(2)];
    assert_eq!(lefts(values.clone()), vec!["a", "b"]);
    assert_eq!(rights(values), vec![1, 2]);
}

#[rstest]
fn result_conversions() {
    let parsed: Either<std::num::ParseIntError, i32> = "12".parse::<i32>().into();
    assert_eq!(parsed.map(|n| n * 2).from_either(0), 24);
    let back = Result::from(Left::<&str, i32>("x"));
    assert_eq!(back, Err("x"));
}

#[rstest]
fn bimap_and_swap() {
    let value: Either<i32, &str> = Left(2);
    assert_eq!(value.bimap(|n| n * 10, str::len), Left(20));
    assert_eq!(value.swap(), Right(2));
    assert_eq!(Right::<i32, &str>("abc").bimap(|n| n * 10, str::len), Right(3));
}

#[rstest]
fn chain_short_circuits_on_left() {
    let positive = |n: i32| if n > 0 { Right(n) } else { Left(format!("{n} is not positive")) };
    assert_eq!(Right(1).chain(positive).map(|n| n + 1), Right(2));
    assert_eq!(Right(-1).chain(positive), Left("-1 is not positive".to_string()));
}

#[rstest]
fn display_shows_structure() {
    assert_eq!(Left::<&str, i32>("x").to_string(), "Left(\"x\")");
    assert_eq!(Right::<i32, Vec<i32>>(vec![1, 2]).to_string(), "Right([1, 2])");
}
