//! Integration tests for the arithmetic functions.

use rstest::rstest;
use tacit::control::{Just, Nothing};
use tacit::dispatch::{filter, map, reduce};
use tacit::number::{add, dec, div, even, inc, max, mean, min, mult, negate, odd, product, sub, sum};

#[rstest]
fn functions_slot_into_generic_operations() {
    assert_eq!(map(inc, vec![1, 2, 3]), vec![2, 3, 4]);
    assert_eq!(map(dec, Just(1.5)), Just(0.5));
    assert_eq!(map(negate, vec![1, -2]), vec![-1, 2]);
    assert_eq!(reduce(add, 0, vec![1, 2, 3]), 6);
    assert_eq!(reduce(mult, 1, vec![2, 3, 4]), 24);
    assert_eq!(reduce(max, i32::MIN, vec![3, 9, 2]), 9);
    assert_eq!(reduce(min, i32::MAX, vec![3, 9, 2]), 2);
    assert_eq!(filter(|n: &i64| even(*n), vec![1, 2, 3, 4]), vec![2, 4]);
    assert_eq!(filter(|n: &i64| odd(*n), vec![1, 2, 3, 4]), vec![1, 3]);
}

#[rstest]
fn subtraction_is_not_commutative() {
    assert_eq!(sub(4, 2), 2);
    assert_eq!(sub(2, 4), -2);
}

#[rstest]
fn folds_work_on_every_foldable() {
    assert_eq!(sum(vec![1, 2, 3, 4, 5]), 15);
    assert_eq!(sum(Just(42)), 42);
    assert_eq!(product(Nothing::<i32>), 1);
    assert_eq!(mean(vec![1, 2, 3, 4, 5]), Just(3.0));
    assert_eq!(mean(Nothing::<i32>), Nothing);
}

#[rstest]
fn division_chains_on_maybe() {
    let inverted_quarter = div(1.0, 4.0).chain(|quarter| div(1.0, quarter));
    assert_eq!(inverted_quarter, Just(4.0));
    assert_eq!(div(0.0, 1.0).chain(|zero| div(1.0, zero)), Nothing);
}
