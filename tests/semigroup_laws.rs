//! Property-based tests for the Semigroup and Monoid laws.
//!
//! - **Associativity**: `a.concat(b).concat(c) == a.concat(b.concat(c))`
//! - **Left identity**: `empty().concat(a) == a`
//! - **Right identity**: `a.concat(empty()) == a`

use std::collections::BTreeMap;

use proptest::prelude::*;
use tacit::control::{Either, Just, Left, Maybe, Nothing, Right};
use tacit::typeclass::{Identity, Monoid, Semigroup};

fn maybe_string() -> impl Strategy<Value = Maybe<String>> {
    any::<Option<String>>().prop_map(Maybe::from)
}

// =============================================================================
// Associativity
// =============================================================================

proptest! {
    #[test]
    fn prop_string_associativity(a in ".{0,8}", b in ".{0,8}", c in ".{0,8}") {
        prop_assert_eq!(
            a.clone().concat(b.clone()).concat(c.clone()),
            a.concat(b.concat(c))
        );
    }

    #[test]
    fn prop_vec_associativity(
        a in prop::collection::vec(any::<u8>(), 0..6),
        b in prop::collection::vec(any::<u8>(), 0..6),
        c in prop::collection::vec(any::<u8>(), 0..6),
    ) {
        prop_assert_eq!(
            Semigroup::concat(Semigroup::concat(a.clone(), b.clone()), c.clone()),
            Semigroup::concat(a, Semigroup::concat(b, c))
        );
    }

    #[test]
    fn prop_maybe_associativity(a in maybe_string(), b in maybe_string(), c in maybe_string()) {
        prop_assert_eq!(
            a.clone().concat(b.clone()).concat(c.clone()),
            a.concat(b.concat(c))
        );
    }

    #[test]
    fn prop_object_associativity(
        a in prop::collection::btree_map("[a-c]", any::<i8>(), 0..3),
        b in prop::collection::btree_map("[a-c]", any::<i8>(), 0..3),
        c in prop::collection::btree_map("[a-c]", any::<i8>(), 0..3),
    ) {
        prop_assert_eq!(
            a.clone().concat(b.clone()).concat(c.clone()),
            a.concat(b.concat(c))
        );
    }
}

// =============================================================================
// Monoid identity
// =============================================================================

proptest! {
    #[test]
    fn prop_string_identity(a in ".{0,8}") {
        prop_assert_eq!(String::empty().concat(a.clone()), a.clone());
        prop_assert_eq!(a.clone().concat(String::empty()), a);
    }

    #[test]
    fn prop_maybe_identity(a in maybe_string()) {
        prop_assert_eq!(Maybe::empty().concat(a.clone()), a.clone());
        prop_assert_eq!(a.clone().concat(Maybe::empty()), a);
    }

    #[test]
    fn prop_identity_wrapper_identity(a in ".{0,8}") {
        prop_assert_eq!(Identity::empty().concat(Identity(a.clone())), Identity(a));
    }
}

// =============================================================================
// Concrete behaviour
// =============================================================================

#[test]
fn either_concatenates_matching_sides() {
    let rights: Either<String, String> = Right("ab".to_string()).concat(Right("c".to_string()));
    assert_eq!(rights, Right("abc".to_string()));
    let lefts: Either<String, String> = Left("x".to_string()).concat(Left("y".to_string()));
    assert_eq!(lefts, Left("xy".to_string()));
}

#[test]
fn either_mixed_pair_prefers_right() {
    let left: Either<String, String> = Left("x".to_string());
    let right: Either<String, String> = Right("y".to_string());
    assert_eq!(left.clone().concat(right.clone()), right);
    assert_eq!(right.clone().concat(left), right);
}

#[test]
fn objects_merge_with_right_bias() {
    let first = BTreeMap::from([("a".to_string(), 1), ("b".to_string(), 2)]);
    let second = BTreeMap::from([("b".to_string(), 20), ("c".to_string(), 30)]);
    let merged = first.concat(second);
    assert_eq!(
        merged,
        BTreeMap::from([("a".to_string(), 1), ("b".to_string(), 20), ("c".to_string(), 30)])
    );
}

#[test]
fn concat_all_folds_from_empty() {
    let words = vec!["tac".to_string(), "it".to_string()];
    assert_eq!(String::concat_all(words), "tacit");
    assert_eq!(Maybe::<String>::concat_all(vec![Nothing, Just("a".to_string()), Nothing]), Just("a".to_string()));
}
