//! Lifting plain functions into a shared context.
//!
//! `lift` promotes a unary function over a [`Functor`]; `lift2` and `lift3`
//! promote binary and ternary functions over an [`Applicative`], combining
//! the contexts the way that type's `ap` does (`Nothing` and `Left`
//! short-circuit, arrays take the cartesian product).
//!
//! # Examples
//!
//! ```rust
//! use tacit::compose::{lift, lift2};
//! use tacit::control::Maybe::{self, Just, Nothing};
//!
//! assert_eq!(lift(|n: i32| n + 1, Just(1)), Just(2));
//! assert_eq!(lift2(|a: i32, b: i32| a * b, Just(3), Just(4)), Just(12));
//! assert_eq!(lift2(|a: i32, b: i32| a * b, Just(3), Maybe::<i32>::Nothing), Nothing);
//! ```

use crate::typeclass::{Applicative, ApplicativeVec, Functor};

/// Applies `function` inside `functor`.
#[inline]
pub fn lift<T, B, F>(function: F, functor: T) -> T::WithType<B>
where
    T: Functor,
    F: FnMut(T::Inner) -> B,
{
    functor.map(function)
}

/// Applies a binary `function` to the values of two applicatives.
#[inline]
pub fn lift2<T, B, C, F>(function: F, first: T, second: T::WithType<B>) -> T::WithType<C>
where
    T: Applicative,
    F: FnOnce(T::Inner, B) -> C,
{
    first.map2(second, function)
}

/// Applies a ternary `function` to the values of three applicatives.
#[inline]
pub fn lift3<T, B, C, D, F>(
    function: F,
    first: T,
    second: T::WithType<B>,
    third: T::WithType<C>,
) -> T::WithType<D>
where
    T: Applicative,
    F: FnOnce(T::Inner, B, C) -> D,
{
    first.map3(second, third, function)
}

/// [`lift2`] for arrays: every combination, first array outermost.
///
/// # Examples
///
/// ```rust
/// use tacit::compose::lift2_vec;
///
/// let sums = lift2_vec(|a: i32, b: i32| a + b, vec![0, 10], vec![1, 2]);
/// assert_eq!(sums, vec![1, 2, 11, 12]);
/// ```
#[inline]
pub fn lift2_vec<A, B, C, F>(function: F, first: Vec<A>, second: Vec<B>) -> Vec<C>
where
    A: Clone,
    B: Clone,
    F: FnMut(A, B) -> C,
{
    ApplicativeVec::map2(first, second, function)
}

/// [`lift3`] for arrays.
#[inline]
pub fn lift3_vec<A, B, C, D, F>(function: F, first: Vec<A>, second: Vec<B>, third: Vec<C>) -> Vec<D>
where
    A: Clone,
    B: Clone,
    C: Clone,
    F: FnMut(A, B, C) -> D,
{
    ApplicativeVec::map3(first, second, third, function)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{Either, Just, Left, Maybe, Nothing, Right};
    use crate::typeclass::Identity;
    use rstest::rstest;

    #[rstest]
    fn lift_maps_over_every_functor() {
        assert_eq!(lift(|n: i32| n * 2, vec![1, 2]), vec![2, 4]);
        assert_eq!(lift(|n: i32| n * 2, Identity(5)), Identity(10));
        assert_eq!(lift(|n: i32| n * 2, Maybe::<i32>::Nothing), Nothing);
    }

    #[rstest]
    fn lift2_first_left_wins() {
        let first: Either<&str, i32> = Left("first");
        let second: Either<&str, i32> = Left("second");
        assert_eq!(lift2(|a: i32, b: i32| a + b, first, second), Left("first"));
    }

    #[rstest]
    fn lift3_combines_three() {
        let total = lift3(|a: i32, b: i32, c: i32| a + b + c, Just(1), Just(2), Just(3));
        assert_eq!(total, Just(6));
        let right: Either<(), i32> = lift3(|a: i32, b: i32, c: i32| a * b * c, Right(2), Right(3), Right(4));
        assert_eq!(right, Right(24));
    }

    #[rstest]
    fn lift3_vec_is_cartesian() {
        let words = lift3_vec(
            |a: char, b: char, c: char| [a, b, c].iter().collect::<String>(),
            vec!['a', 'b'],
            vec!['x'],
            vec!['1', '2'],
        );
        assert_eq!(words, vec!["ax1", "ax2", "bx1", "bx2"]);
    }
}
