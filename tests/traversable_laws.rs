//! Property-based tests for Traversable.
//!
//! - **Identity**: `u.traverse::<IdentityKind>(Identity) == Identity(u)`
//! - **Sequence short-circuit**: a structure containing an empty effect
//!   sequences to the empty effect

use proptest::prelude::*;
use tacit::control::{Either, Just, Left, Maybe, Nothing, Right};
use tacit::typeclass::{
    ApplicativeKind, EitherKind, Identity, IdentityKind, MaybeKind, Traversable, VecKind,
};

fn maybe_of<T: Arbitrary + 'static>() -> impl Strategy<Value = Maybe<T>> {
    any::<Option<T>>().prop_map(Maybe::from)
}

fn either_of<L: Arbitrary + 'static, R: Arbitrary + 'static>()
-> impl Strategy<Value = Either<L, R>> {
    prop::result::maybe_ok(any::<R>(), any::<L>()).prop_map(Either::from)
}

// =============================================================================
// Identity law
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_identity_law(value in maybe_of::<i32>()) {
        prop_assert_eq!(value.traverse::<IdentityKind, i32, _>(Identity), Identity(value));
    }

    #[test]
    fn prop_either_identity_law(value in either_of::<String, i32>()) {
        let traversed = value.clone().traverse::<IdentityKind, i32, _>(Identity);
        prop_assert_eq!(traversed, Identity(value));
    }

    #[test]
    fn prop_vec_identity_law(values in prop::collection::vec(any::<i32>(), 0..12)) {
        let traversed = values.clone().traverse::<IdentityKind, i32, _>(Identity);
        prop_assert_eq!(traversed, Identity(values));
    }
}

// =============================================================================
// Effects
// =============================================================================

proptest! {
    #[test]
    fn prop_vec_of_justs_sequences_to_just(values in prop::collection::vec(any::<i32>(), 0..12)) {
        let wrapped: Vec<Maybe<i32>> = values.iter().copied().map(Just).collect();
        prop_assert_eq!(wrapped.sequence::<MaybeKind, i32>(), Just(values));
    }

    #[test]
    fn prop_any_nothing_sequences_to_nothing(
        values in prop::collection::vec(maybe_of::<i32>(), 1..12),
    ) {
        let has_nothing = values.iter().any(Maybe::is_nothing);
        let sequenced = values.sequence::<MaybeKind, i32>();
        prop_assert_eq!(sequenced.is_nothing(), has_nothing);
    }
}

#[test]
fn nothing_traverses_to_the_target_unit() {
    let absent: Maybe<i32> = Nothing;
    let traversed = absent.traverse::<VecKind, i32, _>(|n| vec![n, n]);
    assert_eq!(traversed, vec![Nothing]);
}

#[test]
fn left_traverses_without_calling_the_function() {
    let failed: Either<&str, i32> = Left("failed");
    let traversed = failed.traverse::<MaybeKind, i32, _>(|_| -> Maybe<i32> {
        unreachable!("the function must not run for Left")
    });
    assert_eq!(traversed, Just(Left("failed")));
}

#[test]
fn traversing_with_either_reports_first_left() {
    let parse = |text: &str| -> Either<String, i32> {
        text.parse::<i32>().map_err(|_| format!("bad: {text}")).into()
    };
    let parsed = vec!["1", "x", "y"].traverse::<EitherKind<String>, i32, _>(parse);
    assert_eq!(parsed, Left("bad: x".to_string()));
    let parsed = vec!["1", "2"].traverse::<EitherKind<String>, i32, _>(parse);
    assert_eq!(parsed, Right(vec![1, 2]));
}

#[test]
fn kinds_lift_values() {
    assert_eq!(MaybeKind::of(1), Just(1));
    assert_eq!(VecKind::of('a'), vec!['a']);
    assert_eq!(<EitherKind<()>>::of(2), Right(2));
}
