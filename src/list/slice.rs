//! The slice family: `slice`, `at` and the operations derived from them.
//!
//! Every operation here is total. Out-of-range boundaries, negative counts
//! and start boundaries past the end boundary yield `Nothing`.

use super::{Index, List};
use crate::control::Maybe::{self, Just, Nothing};

/// Returns the elements from `start` (inclusive) to `end` (exclusive).
///
/// Returns `Nothing` unless both boundaries lie within the list and the
/// resolved start does not exceed the resolved end. The result has the
/// owned form of the input: slices of arrays are `Vec`s, slices of strings
/// are `String`s.
///
/// # Examples
///
/// ```rust
/// use tacit::control::Maybe::{Just, Nothing};
/// use tacit::list::{Index, slice};
///
/// let letters = vec!['a', 'b', 'c', 'd', 'e'];
/// assert_eq!(slice(1, 3, &letters), Just(vec!['b', 'c']));
/// assert_eq!(slice(1, 6, &letters), Nothing);
/// assert_eq!(slice(3, 1, &letters), Nothing);
/// assert_eq!(slice(2, 6, "banana"), Just("nana".to_string()));
/// assert_eq!(slice(-3, Index::End, "banana"), Just("ana".to_string()));
/// ```
pub fn slice<L>(start: impl Into<Index>, end: impl Into<Index>, list: &L) -> Maybe<L::Owned>
where
    L: List + ?Sized,
{
    let length = list.element_count();
    match (start.into().boundary(length), end.into().boundary(length)) {
        (Some(from), Some(to)) if from <= to => Just(list.sub_list(from, to)),
        _ => Nothing,
    }
}

/// Returns the element at `index`.
///
/// Negative indices count back from the end; `Index::End` names no
/// element.
///
/// # Examples
///
/// ```rust
/// use tacit::control::Maybe::{Just, Nothing};
/// use tacit::list::at;
///
/// let letters = ['a', 'b', 'c', 'd', 'e'];
/// assert_eq!(at(2, &letters[..]), Just('c'));
/// assert_eq!(at(5, &letters[..]), Nothing);
/// assert_eq!(at(-2, &letters[..]), Just('d'));
/// ```
pub fn at<L>(index: impl Into<Index>, list: &L) -> Maybe<L::Element>
where
    L: List + ?Sized,
{
    index
        .into()
        .position(list.element_count())
        .and_then(|position| list.element_at(position))
        .into()
}

/// The first element, if any.
pub fn head<L: List + ?Sized>(list: &L) -> Maybe<L::Element> {
    at(0, list)
}

/// The last element, if any.
pub fn last<L: List + ?Sized>(list: &L) -> Maybe<L::Element> {
    at(-1, list)
}

/// All but the first element; `Nothing` for an empty list.
///
/// # Examples
///
/// ```rust
/// use tacit::control::Maybe::{Just, Nothing};
/// use tacit::list::tail;
///
/// assert_eq!(tail(&vec![1, 2, 3]), Just(vec![2, 3]));
/// assert_eq!(tail(&Vec::<i32>::new()), Nothing);
/// ```
pub fn tail<L: List + ?Sized>(list: &L) -> Maybe<L::Owned> {
    slice(1, Index::End, list)
}

/// All but the last element; `Nothing` for an empty list.
pub fn init<L: List + ?Sized>(list: &L) -> Maybe<L::Owned> {
    slice(0, -1, list)
}

fn with_count<L, F>(count: impl Into<Index>, list: &L, bounds: F) -> Maybe<L::Owned>
where
    L: List + ?Sized,
    F: FnOnce(isize) -> (Index, Index),
{
    match count.into().count() {
        Some(count) => {
            let (start, end) = bounds(count);
            slice(start, end, list)
        }
        None => Nothing,
    }
}

/// The first `count` elements.
///
/// `Nothing` if `count` is negative, is `Index::End`, or exceeds the
/// length.
///
/// # Examples
///
/// ```rust
/// use tacit::control::Maybe::{Just, Nothing};
/// use tacit::list::take;
///
/// assert_eq!(take(2, &vec!['a', 'b', 'c', 'd', 'e']), Just(vec!['a', 'b']));
/// assert_eq!(take(4, "abcdefg"), Just("abcd".to_string()));
/// assert_eq!(take(4, &vec!['a', 'b', 'c']), Nothing);
/// ```
pub fn take<L: List + ?Sized>(count: impl Into<Index>, list: &L) -> Maybe<L::Owned> {
    with_count(count, list, |count| (Index::Offset(0), Index::Offset(count)))
}

/// The last `count` elements.
///
/// # Examples
///
/// ```rust
/// use tacit::control::Maybe::{Just, Nothing};
/// use tacit::list::take_last;
///
/// assert_eq!(take_last(2, &vec!['a', 'b', 'c', 'd', 'e']), Just(vec!['d', 'e']));
/// assert_eq!(take_last(0, "abc"), Just(String::new()));
/// assert_eq!(take_last(4, "abc"), Nothing);
/// ```
pub fn take_last<L: List + ?Sized>(count: impl Into<Index>, list: &L) -> Maybe<L::Owned> {
    with_count(count, list, |count| (Index::from_end(count), Index::End))
}

/// All but the first `count` elements.
///
/// # Examples
///
/// ```rust
/// use tacit::control::Maybe::{Just, Nothing};
/// use tacit::list::drop;
///
/// assert_eq!(drop(2, &vec!['a', 'b', 'c', 'd', 'e']), Just(vec!['c', 'd', 'e']));
/// assert_eq!(drop(4, "abcdefg"), Just("efg".to_string()));
/// assert_eq!(drop(6, "abcde"), Nothing);
/// ```
pub fn drop<L: List + ?Sized>(count: impl Into<Index>, list: &L) -> Maybe<L::Owned> {
    with_count(count, list, |count| (Index::Offset(count), Index::End))
}

/// All but the last `count` elements.
///
/// `drop_last(0, xs)` is all of `xs`.
pub fn drop_last<L: List + ?Sized>(count: impl Into<Index>, list: &L) -> Maybe<L::Owned> {
    with_count(count, list, |count| (Index::Offset(0), Index::from_end(count)))
}

/// The elements in reverse order, in the owned form of the input.
///
/// # Examples
///
/// ```rust
/// use tacit::list::reverse;
///
/// assert_eq!(reverse(&vec![1, 2, 3]), vec![3, 2, 1]);
/// assert_eq!(reverse("abc"), "cba");
/// ```
pub fn reverse<L: List + ?Sized>(list: &L) -> L::Owned {
    list.reversed()
}
