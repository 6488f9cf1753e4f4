//! Total operations over indexable lists: arrays and strings.
//!
//! A [`List`] is anything with a length, an element at each position and a
//! way to copy out a contiguous run. Arrays (`[T]`, `Vec<T>`) and strings
//! (`str`, `String`) are lists; strings are lists of `char`s, indexed by
//! character rather than by byte. Operations return the owned form of
//! their input, so slicing a string gives a `String`.
//!
//! Nothing here panics on a bad index. Out-of-range requests yield
//! [`Nothing`](crate::control::Maybe::Nothing), and the position one past
//! the end is written [`Index::End`].
//!
//! # Examples
//!
//! ```rust
//! use tacit::control::Maybe::{Just, Nothing};
//! use tacit::list::{drop, head, slice, take, unfoldr, Index};
//!
//! assert_eq!(slice(-2, Index::End, &vec!['a', 'b', 'c', 'd', 'e']), Just(vec!['d', 'e']));
//! assert_eq!(drop(6, "abcde"), Nothing);
//! assert_eq!(take(3, "tacit"), Just("tac".to_string()));
//! assert_eq!(head(&unfoldr(|n: u8| if n < 3 { Just((n, n + 1)) } else { Nothing }, 0)), Just(0));
//! ```

mod index;
mod search;
mod slice;
mod unfold;

pub use index::Index;
pub use search::{Search, find, index_of, last_index_of};
pub use slice::{at, drop, drop_last, head, init, last, reverse, slice, tail, take, take_last};
pub use unfold::{append, prepend, range, unfoldr};

static_assertions::assert_impl_all!(Index: Send, Sync, Copy);

/// An indexable, finite sequence of elements.
pub trait List {
    /// The type of a single element.
    type Element;
    /// The owned form produced by slicing.
    type Owned;

    /// The number of elements.
    fn element_count(&self) -> usize;

    /// The element at `position`, if it exists.
    fn element_at(&self, position: usize) -> Option<Self::Element>;

    /// The elements from `start` to `end`.
    ///
    /// Callers guarantee `start <= end <= self.element_count()`.
    fn sub_list(&self, start: usize, end: usize) -> Self::Owned;

    /// The elements in reverse order.
    fn reversed(&self) -> Self::Owned;
}

impl<T: Clone> List for [T] {
    type Element = T;
    type Owned = Vec<T>;

    fn element_count(&self) -> usize {
        self.len()
    }

    fn element_at(&self, position: usize) -> Option<T> {
        self.get(position).cloned()
    }

    fn sub_list(&self, start: usize, end: usize) -> Vec<T> {
        self.get(start..end).map(<[T]>::to_vec).unwrap_or_default()
    }

    fn reversed(&self) -> Vec<T> {
        self.iter().rev().cloned().collect()
    }
}

impl<T: Clone> List for Vec<T> {
    type Element = T;
    type Owned = Self;

    fn element_count(&self) -> usize {
        self.len()
    }

    fn element_at(&self, position: usize) -> Option<T> {
        self.as_slice().element_at(position)
    }

    fn sub_list(&self, start: usize, end: usize) -> Self {
        self.as_slice().sub_list(start, end)
    }

    fn reversed(&self) -> Self {
        self.as_slice().reversed()
    }
}

/// Byte offset of the character at `position`, or the length of `text`.
fn byte_offset(text: &str, position: usize) -> usize {
    text.char_indices()
        .nth(position)
        .map_or(text.len(), |(offset, _)| offset)
}

impl List for str {
    type Element = char;
    type Owned = String;

    fn element_count(&self) -> usize {
        self.chars().count()
    }

    fn element_at(&self, position: usize) -> Option<char> {
        self.chars().nth(position)
    }

    fn sub_list(&self, start: usize, end: usize) -> String {
        let from = byte_offset(self, start);
        let to = byte_offset(self, end);
        self.get(from..to).map(str::to_owned).unwrap_or_default()
    }

    fn reversed(&self) -> String {
        self.chars().rev().collect()
    }
}

impl List for String {
    type Element = char;
    type Owned = Self;

    fn element_count(&self) -> usize {
        self.as_str().element_count()
    }

    fn element_at(&self, position: usize) -> Option<char> {
        self.as_str().element_at(position)
    }

    fn sub_list(&self, start: usize, end: usize) -> Self {
        self.as_str().sub_list(start, end)
    }

    fn reversed(&self) -> Self {
        self.as_str().reversed()
    }
}
