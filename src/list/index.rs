//! Positions within a list, counted from either end.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A position in a list or string.
///
/// `Offset(n)` with `n >= 0` counts from the front; a negative `n` counts
/// back from the end, so `Offset(-1)` is the last element. `End` is the
/// position one past the last element. It is distinct from `Offset(0)`:
/// as a slice boundary `End` resolves to the length of the list, wherever
/// it appears.
///
/// Plain integers (`i32`, `i64`, `isize` and `usize`) convert into `Offset`.
///
/// # Examples
///
/// ```rust
/// use tacit::control::Maybe::Just;
/// use tacit::list::{Index, slice};
///
/// let letters = vec!['a', 'b', 'c', 'd', 'e'];
/// assert_eq!(slice(-2, Index::End, &letters), Just(vec!['d', 'e']));
/// assert_eq!(slice(2, Index::End, &letters), Just(vec!['c', 'd', 'e']));
/// assert_eq!(slice(0, 0, &letters), Just(vec![]));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Index {
    /// An offset from the front (non-negative) or from the end (negative).
    Offset(isize),
    /// One past the last element.
    End,
}

impl Index {
    /// The boundary `n` elements before the end.
    ///
    /// `from_end(0)` is `End`, not `Offset(0)`.
    pub const fn from_end(count: isize) -> Self {
        if count == 0 {
            Self::End
        } else {
            Self::Offset(count.wrapping_neg())
        }
    }

    /// Resolves a slice boundary against a list of `length` elements.
    ///
    /// Returns `None` when the offset's magnitude exceeds `length`.
    pub(crate) const fn boundary(self, length: usize) -> Option<usize> {
        match self {
            Self::End => Some(length),
            Self::Offset(offset) => {
                let magnitude = offset.unsigned_abs();
                if magnitude > length {
                    None
                } else if offset < 0 {
                    Some(length - magnitude)
                } else {
                    Some(magnitude)
                }
            }
        }
    }

    /// Resolves an element position against a list of `length` elements.
    ///
    /// `End` never names an element.
    pub(crate) const fn position(self, length: usize) -> Option<usize> {
        match self {
            Self::End => None,
            Self::Offset(offset) if offset >= 0 => {
                let position = offset.unsigned_abs();
                if position < length { Some(position) } else { None }
            }
            Self::Offset(offset) => {
                let magnitude = offset.unsigned_abs();
                if magnitude <= length { Some(length - magnitude) } else { None }
            }
        }
    }

    /// Interprets the index as an element count.
    ///
    /// Only non-negative offsets are counts.
    pub(crate) const fn count(self) -> Option<isize> {
        match self {
            Self::Offset(count) if count >= 0 => Some(count),
            _ => None,
        }
    }
}

impl From<isize> for Index {
    fn from(offset: isize) -> Self {
        Self::Offset(offset)
    }
}

impl From<i32> for Index {
    #[allow(clippy::cast_possible_truncation)]
    fn from(offset: i32) -> Self {
        // isize is at least 32 bits on every supported target
        Self::Offset(offset as isize)
    }
}

/// Offsets beyond `isize::MAX` saturate, which is past the end of any list.
impl From<usize> for Index {
    fn from(offset: usize) -> Self {
        Self::Offset(isize::try_from(offset).unwrap_or(isize::MAX))
    }
}

/// Offsets outside the range of `isize` saturate towards their sign.
impl From<i64> for Index {
    fn from(offset: i64) -> Self {
        Self::Offset(isize::try_from(offset).unwrap_or(if offset < 0 {
            isize::MIN
        } else {
            isize::MAX
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Index::Offset(0), 5, Some(0))]
    #[case(Index::Offset(5), 5, Some(5))]
    #[case(Index::Offset(6), 5, None)]
    #[case(Index::Offset(-2), 5, Some(3))]
    #[case(Index::Offset(-5), 5, Some(0))]
    #[case(Index::Offset(-6), 5, None)]
    #[case(Index::End, 5, Some(5))]
    #[case(Index::End, 0, Some(0))]
    fn boundaries(#[case] index: Index, #[case] length: usize, #[case] expected: Option<usize>) {
        assert_eq!(index.boundary(length), expected);
    }

    #[rstest]
    #[case(Index::Offset(0), 3, Some(0))]
    #[case(Index::Offset(3), 3, None)]
    #[case(Index::Offset(-1), 3, Some(2))]
    #[case(Index::Offset(-3), 3, Some(0))]
    #[case(Index::Offset(-4), 3, None)]
    #[case(Index::End, 3, None)]
    #[case(Index::Offset(0), 0, None)]
    fn positions(#[case] index: Index, #[case] length: usize, #[case] expected: Option<usize>) {
        assert_eq!(index.position(length), expected);
    }

    #[rstest]
    fn lengths_and_wide_integers_convert() {
        let letters = vec!['a', 'b', 'c'];
        assert_eq!(Index::from(letters.len()), Index::Offset(3));
        assert_eq!(Index::from(-2_i64), Index::Offset(-2));
        assert_eq!(Index::from(usize::MAX), Index::Offset(isize::MAX));
        assert_eq!(Index::from(i64::MIN).count(), None);
    }

    #[rstest]
    fn from_end_of_zero_is_end() {
        assert_eq!(Index::from_end(0), Index::End);
        assert_eq!(Index::from_end(2), Index::Offset(-2));
    }

    #[rstest]
    fn counts_exclude_end_and_negatives() {
        assert_eq!(Index::from(3).count(), Some(3));
        assert_eq!(Index::from(-1).count(), None);
        assert_eq!(Index::End.count(), None);
    }
}
