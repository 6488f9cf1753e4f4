//! Building arrays from a seed.

use crate::control::Maybe::{self, Just};

/// Builds an array by repeatedly applying `generator` to a seed.
///
/// While `generator` returns `Just((element, next))`, `element` is appended
/// and `next` becomes the seed; the first `Nothing` ends the array. There
/// is no iteration limit, so `generator` must eventually return `Nothing`.
///
/// # Examples
///
/// ```rust
/// use tacit::control::Maybe::{Just, Nothing};
/// use tacit::list::unfoldr;
///
/// let counted = unfoldr(|n: i32| if n < 5 { Just((n, n + 1)) } else { Nothing }, 1);
/// assert_eq!(counted, vec![1, 2, 3, 4]);
/// ```
pub fn unfoldr<A, B, F>(mut generator: F, seed: B) -> Vec<A>
where
    F: FnMut(B) -> Maybe<(A, B)>,
{
    let mut result = Vec::new();
    let mut step = generator(seed);
    while let Just((element, next)) = step {
        result.push(element);
        step = generator(next);
    }
    result
}

/// The consecutive integers from `from` up to, not including, `to`.
///
/// Empty when `to <= from`.
///
/// # Examples
///
/// ```rust
/// use tacit::list::range;
///
/// assert_eq!(range(0, 4), vec![0, 1, 2, 3]);
/// assert_eq!(range(-2, 0), vec![-2, -1]);
/// assert!(range(0, -5).is_empty());
/// ```
pub fn range(from: i64, to: i64) -> Vec<i64> {
    (from..to).collect()
}

/// Returns `list` with `element` added at the end.
///
/// # Examples
///
/// ```rust
/// use tacit::list::{append, prepend};
///
/// assert_eq!(append(3, vec![1, 2]), vec![1, 2, 3]);
/// assert_eq!(prepend(1, vec![2, 3]), vec![1, 2, 3]);
/// ```
pub fn append<T>(element: T, mut list: Vec<T>) -> Vec<T> {
    list.push(element);
    list
}

/// Returns `list` with `element` added at the front.
pub fn prepend<T>(element: T, list: Vec<T>) -> Vec<T> {
    std::iter::once(element).chain(list).collect()
}
