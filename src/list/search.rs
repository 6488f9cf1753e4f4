//! Searching lists: `index_of`, `last_index_of` and `find`.

use crate::control::Maybe;

/// Lists that can report where a needle occurs.
///
/// Arrays search for an equal element. Strings search for a substring or
/// a character and report positions in characters, not bytes.
pub trait Search<Needle: ?Sized> {
    /// Position of the first occurrence of `needle`.
    fn first_position(&self, needle: &Needle) -> Option<usize>;

    /// Position of the last occurrence of `needle`.
    fn last_position(&self, needle: &Needle) -> Option<usize>;
}

impl<T: PartialEq> Search<T> for [T] {
    fn first_position(&self, needle: &T) -> Option<usize> {
        self.iter().position(|element| element == needle)
    }

    fn last_position(&self, needle: &T) -> Option<usize> {
        self.iter().rposition(|element| element == needle)
    }
}

impl<T: PartialEq> Search<T> for Vec<T> {
    fn first_position(&self, needle: &T) -> Option<usize> {
        self.as_slice().first_position(needle)
    }

    fn last_position(&self, needle: &T) -> Option<usize> {
        self.as_slice().last_position(needle)
    }
}

fn character_position(text: &str, byte_offset: usize) -> usize {
    text[..byte_offset].chars().count()
}

impl Search<str> for str {
    fn first_position(&self, needle: &str) -> Option<usize> {
        self.find(needle).map(|offset| character_position(self, offset))
    }

    fn last_position(&self, needle: &str) -> Option<usize> {
        self.rfind(needle).map(|offset| character_position(self, offset))
    }
}

impl Search<char> for str {
    fn first_position(&self, needle: &char) -> Option<usize> {
        self.chars().position(|character| character == *needle)
    }

    fn last_position(&self, needle: &char) -> Option<usize> {
        <Self as Search<str>>::last_position(self, needle.encode_utf8(&mut [0; 4]))
    }
}

impl<Needle: ?Sized> Search<Needle> for String
where
    str: Search<Needle>,
{
    fn first_position(&self, needle: &Needle) -> Option<usize> {
        self.as_str().first_position(needle)
    }

    fn last_position(&self, needle: &Needle) -> Option<usize> {
        self.as_str().last_position(needle)
    }
}

/// Returns the position of the first occurrence of `needle` in `list`.
///
/// # Examples
///
/// ```rust
/// use tacit::control::Maybe::{Just, Nothing};
/// use tacit::list::index_of;
///
/// assert_eq!(index_of(&'a', &vec!['b', 'a', 'n', 'a', 'n', 'a']), Just(1));
/// assert_eq!(index_of(&'x', &vec!['b', 'a', 'n', 'a', 'n', 'a']), Nothing);
/// assert_eq!(index_of("an", "banana"), Just(1));
/// assert_eq!(index_of("ax", "banana"), Nothing);
/// ```
pub fn index_of<Needle, L>(needle: &Needle, list: &L) -> Maybe<usize>
where
    Needle: ?Sized,
    L: Search<Needle> + ?Sized,
{
    list.first_position(needle).into()
}

/// Returns the position of the last occurrence of `needle` in `list`.
///
/// # Examples
///
/// ```rust
/// use tacit::control::Maybe::{Just, Nothing};
/// use tacit::list::last_index_of;
///
/// assert_eq!(last_index_of(&'a', &vec!['b', 'a', 'n', 'a', 'n', 'a']), Just(5));
/// assert_eq!(last_index_of("an", "banana"), Just(3));
/// assert_eq!(last_index_of("ax", "banana"), Nothing);
/// ```
pub fn last_index_of<Needle, L>(needle: &Needle, list: &L) -> Maybe<usize>
where
    Needle: ?Sized,
    L: Search<Needle> + ?Sized,
{
    list.last_position(needle).into()
}

/// Returns the leftmost element satisfying `predicate`.
///
/// Stops at the first match.
///
/// # Examples
///
/// ```rust
/// use tacit::control::Maybe::{Just, Nothing};
/// use tacit::list::find;
///
/// assert_eq!(find(|n: &i32| *n < 0, vec![1, -2, 3, -4, 5]), Just(-2));
/// assert_eq!(find(|n: &&i32| **n < 0, &vec![1, 2, 3]), Nothing);
/// ```
pub fn find<I, P>(mut predicate: P, list: I) -> Maybe<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    list.into_iter().find(|element| predicate(element)).into()
}
