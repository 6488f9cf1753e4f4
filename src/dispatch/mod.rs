//! Capability dispatch: one polymorphic operation for every value family.
//!
//! Each protocol is a trait in [`crate::typeclass`], so the choice of
//! implementation for `map`, `reduce`, `chain`, `ap`, `traverse`, `extend`,
//! `equals` and `concat` is made at compile time. The free functions here
//! take their arguments in the curried order (function first, structure
//! last), which makes them easy to partially apply with `partial!`.
//!
//! Types identify themselves through [`TypeIdentity`]. Values whose type is
//! only known at run time (`serde_json::Value`) are inspected by
//! [`dynamic::type_identifier`] instead, and primitive pseudo-methods such
//! as `Boolean#toBoolean` are looked up with [`dynamic::bound_method`].
//!
//! # Examples
//!
//! ```rust
//! use tacit::control::{Either::Right, Maybe::Just};
//! use tacit::dispatch::{chain, concat, equals, map, reduce};
//!
//! assert_eq!(map(|n: i32| n + 1, Just(1)), Just(2));
//! assert_eq!(map(|n: i32| n + 1, vec![1, 2]), vec![2, 3]);
//! assert_eq!(reduce(|acc, n: i32| acc + n, 0, vec![1, 2, 3]), 6);
//! assert_eq!(chain(|n: i32| Right::<String, i32>(n * 2), Right(4)), Right(8));
//! assert_eq!(concat(vec![1], vec![2]), vec![1, 2]);
//! assert!(equals(&Just(f64::NAN), &Just(f64::NAN)));
//! ```

#[cfg(feature = "accessor")]
pub mod dynamic;

use std::collections::BTreeMap;

use crate::control::{Either, Maybe};
use crate::typeclass::{
    Applicative, ApplicativeKind, ApplicativeVec, Comonad, Extend, Foldable, Functor, Identity,
    Monad, MonadVec, Monoid, Semigroup, Setoid, Show, Traversable, TypeConstructor,
};

/// A type's identifier, the string that names its family.
///
/// Library types are namespaced (`tacit/Maybe`); built-in families use the
/// bare names `Array`, `Object`, `String`, `Number`, `Boolean` and `Null`.
/// Two values with the same identifier are handled identically by the
/// dispatcher.
pub trait TypeIdentity {
    /// Returns the identifier of this value's type.
    fn type_identifier(&self) -> &'static str;
}

macro_rules! type_identity {
    ($identifier:literal => $($type:ty),+) => {
        $(
            impl TypeIdentity for $type {
                #[inline]
                fn type_identifier(&self) -> &'static str {
                    $identifier
                }
            }
        )+
    };
}

type_identity!("Boolean" => bool);
type_identity!("Number" => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
type_identity!("String" => String, str, char);
type_identity!("Null" => ());

impl<T> TypeIdentity for Vec<T> {
    fn type_identifier(&self) -> &'static str {
        "Array"
    }
}

impl<V> TypeIdentity for BTreeMap<String, V> {
    fn type_identifier(&self) -> &'static str {
        "Object"
    }
}

impl<A> TypeIdentity for Maybe<A> {
    fn type_identifier(&self) -> &'static str {
        "tacit/Maybe"
    }
}

impl<L, R> TypeIdentity for Either<L, R> {
    fn type_identifier(&self) -> &'static str {
        "tacit/Either"
    }
}

impl<A> TypeIdentity for Identity<A> {
    fn type_identifier(&self) -> &'static str {
        "tacit/Identity"
    }
}

impl<T: TypeIdentity + ?Sized> TypeIdentity for &T {
    fn type_identifier(&self) -> &'static str {
        (**self).type_identifier()
    }
}

/// Returns the type identifier of `value`.
///
/// # Examples
///
/// ```rust
/// use tacit::control::Maybe::Nothing;
/// use tacit::dispatch::type_identifier;
///
/// assert_eq!(type_identifier(&Nothing::<i32>), "tacit/Maybe");
/// assert_eq!(type_identifier(&vec![1]), "Array");
/// assert_eq!(type_identifier("text"), "String");
/// ```
#[inline]
pub fn type_identifier<T: TypeIdentity + ?Sized>(value: &T) -> &'static str {
    value.type_identifier()
}

// =============================================================================
// Truthiness
// =============================================================================

/// The `toBoolean` capability used by the logic combinators.
///
/// Booleans are themselves; `Maybe` is true for `Just`; `Either` is true
/// for `Right`; strings, arrays and objects are true when non-empty.
pub trait ToBoolean {
    /// Returns the truthiness of `self`.
    fn to_boolean(&self) -> bool;
}

impl ToBoolean for bool {
    #[inline]
    fn to_boolean(&self) -> bool {
        *self
    }
}

impl<A> ToBoolean for Maybe<A> {
    #[inline]
    fn to_boolean(&self) -> bool {
        self.is_just()
    }
}

impl<L, R> ToBoolean for Either<L, R> {
    #[inline]
    fn to_boolean(&self) -> bool {
        self.is_right()
    }
}

impl ToBoolean for String {
    #[inline]
    fn to_boolean(&self) -> bool {
        !self.is_empty()
    }
}

impl ToBoolean for str {
    #[inline]
    fn to_boolean(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> ToBoolean for Vec<T> {
    #[inline]
    fn to_boolean(&self) -> bool {
        !self.is_empty()
    }
}

impl<K, V> ToBoolean for BTreeMap<K, V> {
    #[inline]
    fn to_boolean(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: ToBoolean + ?Sized> ToBoolean for &T {
    #[inline]
    fn to_boolean(&self) -> bool {
        (**self).to_boolean()
    }
}

// =============================================================================
// Filtering
// =============================================================================

/// Structures that can discard the values failing a predicate.
pub trait Filter: Functor {
    /// Keeps only the values satisfying `predicate`.
    fn filter<P>(self, predicate: P) -> Self
    where
        P: FnMut(&Self::Inner) -> bool;
}

impl<A> Filter for Maybe<A> {
    #[inline]
    fn filter<P>(self, predicate: P) -> Self
    where
        P: FnMut(&A) -> bool,
    {
        Self::filter(self, predicate)
    }
}

impl<A> Filter for Vec<A> {
    #[inline]
    fn filter<P>(mut self, mut predicate: P) -> Self
    where
        P: FnMut(&A) -> bool,
    {
        self.retain(|value| predicate(value));
        self
    }
}

// =============================================================================
// Sequencing and Application
// =============================================================================

/// Structures whose values can each produce a new structure to splice in.
///
/// Every [`Monad`] is a `Chain`. Arrays are too: `bind` on a `Vec` is a
/// flat map.
pub trait Chain: Functor {
    /// Replaces every value with the structure `function` builds from it.
    fn bind<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> Self::WithType<B>;
}

impl<T: Monad> Chain for T {
    #[inline]
    fn bind<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> Self::WithType<B>,
    {
        Monad::chain(self, function)
    }
}

impl<A> Chain for Vec<A> {
    #[inline]
    fn bind<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(A) -> Vec<B>,
    {
        MonadVec::chain(self, function)
    }
}

/// Structures that can apply held functions to held values.
///
/// Every [`Applicative`] is an `Apply`; so is a `Vec` of cloneable values,
/// which applies every function to every value.
pub trait Apply: Functor {
    /// Applies the functions held by `function` to the values of `self`.
    fn apply<B, F>(self, function: Self::WithType<F>) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Combines the values of two structures with a binary function.
    fn apply2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        B: Clone,
        F: FnMut(Self::Inner, B) -> C;
}

impl<T: Applicative> Apply for T {
    #[inline]
    fn apply<B, F>(self, function: Self::WithType<F>) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B,
    {
        Applicative::ap(self, function)
    }

    #[inline]
    fn apply2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        B: Clone,
        F: FnMut(Self::Inner, B) -> C,
    {
        Applicative::map2(self, other, function)
    }
}

impl<A: Clone> Apply for Vec<A> {
    #[inline]
    fn apply<B, F>(self, function: Vec<F>) -> Vec<B>
    where
        F: FnMut(A) -> B,
    {
        ApplicativeVec::ap(self, function)
    }

    #[inline]
    fn apply2<B, C, F>(self, other: Vec<B>, function: F) -> Vec<C>
    where
        B: Clone,
        F: FnMut(A, B) -> C,
    {
        ApplicativeVec::map2(self, other, function)
    }
}

/// Structures with a unit: a way to wrap a single value.
pub trait Pointed: TypeConstructor {
    /// Wraps `value` as the only value of the structure.
    fn point(value: Self::Inner) -> Self;
}

impl<T, A> Pointed for T
where
    T: Applicative<Inner = A, WithType<A> = T>,
{
    #[inline]
    fn point(value: A) -> T {
        <T as Applicative>::of(value)
    }
}

impl<A> Pointed for Vec<A> {
    #[inline]
    fn point(value: A) -> Self {
        vec![value]
    }
}

// =============================================================================
// Generic Operations
// =============================================================================

/// Maps `function` over any functor.
#[inline]
pub fn map<T, B, F>(function: F, functor: T) -> T::WithType<B>
where
    T: Functor,
    F: FnMut(T::Inner) -> B,
{
    functor.map(function)
}

/// Folds any foldable from the left.
#[inline]
pub fn reduce<T, B, F>(function: F, initial: B, foldable: T) -> B
where
    T: Foldable,
    F: FnMut(B, T::Inner) -> B,
{
    foldable.reduce(initial, function)
}

/// Sequences `function` after any monad or array.
///
/// # Examples
///
/// ```rust
/// use tacit::dispatch::chain;
///
/// assert_eq!(chain(|n: i32| vec![n, -n], vec![1, 2]), vec![1, -1, 2, -2]);
/// ```
#[inline]
pub fn chain<T, B, F>(function: F, monad: T) -> T::WithType<B>
where
    T: Chain,
    F: FnMut(T::Inner) -> T::WithType<B>,
{
    monad.bind(function)
}

/// Applies the function inside `function` to the value inside `applicative`.
///
/// # Examples
///
/// ```rust
/// use tacit::control::Maybe::{self, Just, Nothing};
/// use tacit::dispatch::ap;
///
/// let double: Maybe<fn(i32) -> i32> = Just(|n| n * 2);
/// assert_eq!(ap(double, Just(21)), Just(42));
/// assert_eq!(ap(double, Nothing), Nothing);
/// ```
#[inline]
pub fn ap<T, B, F>(function: T::WithType<F>, applicative: T) -> T::WithType<B>
where
    T: Apply,
    F: FnMut(T::Inner) -> B,
{
    applicative.apply(function)
}

/// Combines the values of two applicatives or arrays with `function`.
///
/// # Examples
///
/// ```rust
/// use tacit::control::Maybe::{Just, Nothing};
/// use tacit::dispatch::lift2;
///
/// assert_eq!(lift2(|a: i32, b: i32| a + b, Just(1), Just(2)), Just(3));
/// assert_eq!(lift2(|a: i32, b: i32| a + b, Just(1), Nothing), Nothing);
/// assert_eq!(lift2(|a: i32, b: char| (a, b), vec![1, 2], vec!['x']), vec![(1, 'x'), (2, 'x')]);
/// ```
#[inline]
pub fn lift2<T, B, C, F>(function: F, first: T, second: T::WithType<B>) -> T::WithType<C>
where
    T: Apply,
    B: Clone,
    F: FnMut(T::Inner, B) -> C,
{
    first.apply2(second, function)
}

/// Lifts `value` into the applicative `T`.
///
/// # Examples
///
/// ```rust
/// use tacit::control::{Either, Maybe};
/// use tacit::dispatch::of;
///
/// assert_eq!(of::<Maybe<i32>, _>(1), Maybe::Just(1));
/// assert_eq!(of::<Either<String, i32>, _>(1), Either::Right(1));
/// assert_eq!(of::<Vec<i32>, _>(1), vec![1]);
/// ```
#[inline]
pub fn of<T, A>(value: A) -> T
where
    T: Pointed<Inner = A>,
{
    T::point(value)
}

/// Traverses any traversable with the applicative named by `K`.
#[inline]
pub fn traverse<K, T, B, F>(function: F, traversable: T) -> K::Applied<T::WithType<B>>
where
    K: ApplicativeKind,
    T: Traversable,
    B: Clone,
    F: FnMut(T::Inner) -> K::Applied<B>,
{
    traversable.traverse::<K, B, F>(function)
}

/// Extends any extendable structure.
#[inline]
pub fn extend<T, B, F>(function: F, extend: T) -> T::WithType<B>
where
    T: Extend,
    F: FnMut(&T) -> B,
{
    extend.extend(function)
}

/// Deep equality, with `0 != -0` and `NaN == NaN`.
#[inline]
pub fn equals<T: Setoid + ?Sized>(left: &T, right: &T) -> bool {
    left.equals(right)
}

/// Concatenates two semigroup values.
#[inline]
pub fn concat<T: Semigroup>(left: T, right: T) -> T {
    left.concat(right)
}

/// Returns the identity element of the monoid `T`.
#[inline]
pub fn empty<T: Monoid>() -> T {
    T::empty()
}

/// Keeps the values satisfying `predicate`.
///
/// # Examples
///
/// ```rust
/// use tacit::control::Maybe::{Just, Nothing};
/// use tacit::dispatch::filter;
///
/// assert_eq!(filter(|n: &i32| n % 2 == 0, vec![1, 2, 3, 4]), vec![2, 4]);
/// assert_eq!(filter(|n: &i32| *n > 5, Just(3)), Nothing);
/// ```
#[inline]
pub fn filter<T, P>(predicate: P, filterable: T) -> T
where
    T: Filter,
    P: FnMut(&T::Inner) -> bool,
{
    filterable.filter(predicate)
}

/// Keeps the values satisfying `predicate`, using only the monad and
/// monoid structure of `T`.
///
/// Each value is replaced by `of(value)` when it passes and by `empty()`
/// otherwise, so `filter_m` agrees with [`filter`] wherever both apply.
///
/// # Examples
///
/// ```rust
/// use tacit::control::Maybe::{Just, Nothing};
/// use tacit::dispatch::filter_m;
///
/// assert_eq!(filter_m(|n: &i32| n % 2 == 1, vec![1, 2, 3, 4, 5]), vec![1, 3, 5]);
/// assert_eq!(filter_m(|word: &String| word.len() > 3, Just("tacit".to_string())), Just("tacit".to_string()));
/// assert_eq!(filter_m(|word: &String| word.len() > 9, Just("tacit".to_string())), Nothing);
/// ```
pub fn filter_m<T, A, P>(mut predicate: P, monad: T) -> T
where
    T: Chain<Inner = A, WithType<A> = T> + Pointed<Inner = A> + Monoid,
    P: FnMut(&A) -> bool,
{
    monad.bind::<A, _>(|value| {
        if predicate(&value) {
            T::point(value)
        } else {
            T::empty()
        }
    })
}

/// Returns the value held by a comonad.
///
/// ```rust
/// use tacit::dispatch::extract;
/// use tacit::typeclass::Identity;
///
/// assert_eq!(extract(Identity(42)), 42);
/// ```
#[inline]
pub fn extract<T: Comonad>(comonad: T) -> T::Inner {
    comonad.extract()
}

/// Returns the deep representation of `value`.
#[inline]
pub fn to_string<T: Show + ?Sized>(value: &T) -> String {
    value.show()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{Just, Left, Nothing, Right};
    use crate::typeclass::MaybeKind;
    use rstest::rstest;

    #[rstest]
    #[case(&true, "Boolean")]
    #[case(&1.5_f64, "Number")]
    #[case(&"x", "String")]
    fn primitive_identifiers(#[case] value: &dyn TypeIdentity, #[case] expected: &str) {
        assert_eq!(value.type_identifier(), expected);
    }

    #[rstest]
    fn library_identifiers_are_namespaced() {
        assert_eq!(type_identifier(&Just(1)), "tacit/Maybe");
        assert_eq!(type_identifier(&Left::<i32, i32>(1)), "tacit/Either");
        assert_eq!(type_identifier(&BTreeMap::<String, i32>::new()), "Object");
    }

    #[rstest]
    #[case(Just(0), true)]
    #[case(Nothing, false)]
    fn maybe_truthiness(#[case] value: Maybe<i32>, #[case] expected: bool) {
        assert_eq!(value.to_boolean(), expected);
    }

    #[rstest]
    fn monoid_truthiness_is_non_emptiness() {
        assert!(!String::new().to_boolean());
        assert!("x".to_boolean());
        assert!(!Vec::<i32>::new().to_boolean());
        assert!(Right::<i32, i32>(0).to_boolean());
        assert!(!Left::<i32, i32>(0).to_boolean());
    }

    #[rstest]
    fn generic_operations_dispatch_per_type() {
        assert_eq!(map(|n: i32| n * 2, Right::<&str, i32>(2)), Right(4));
        assert_eq!(reduce(|acc: i32, n: i32| acc + n, 10, Nothing::<i32>), 10);
        assert_eq!(chain(|n: i32| Identity(n + 1), Identity(1)), Identity(2));
        assert_eq!(of::<Identity<&str>, _>("x"), Identity("x"));
        assert_eq!(empty::<String>(), "");
        assert_eq!(to_string(&Just(-0.0)), "Just(-0)");
    }

    #[rstest]
    fn traverse_dispatches_to_target_kind() {
        let result = traverse::<MaybeKind, _, _, _>(|n: i32| Just(n + 1), vec![1, 2]);
        assert_eq!(result, Just(vec![2, 3]));
    }

    #[rstest]
    fn extend_dispatches() {
        assert_eq!(extend(|whole: &Maybe<i32>| whole.is_just(), Just(1)), Just(true));
    }
}
