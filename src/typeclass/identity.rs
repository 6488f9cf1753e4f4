//! Identity wrapper type - the identity functor.
//!
//! `Identity` is the simplest possible context around a value. It is the
//! neutral applicative: traversing any structure with `Identity::new`
//! gives the structure back unchanged, which makes it the witness for the
//! traversable identity law.

/// A transparent wrapper with no additional effect.
///
/// # Examples
///
/// ```rust
/// use tacit::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.extract(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Wraps a value. This is the unit of the identity applicative.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Returns the wrapped value, consuming the wrapper.
    ///
    /// This is the comonadic `extract`; together with `Extend::extend` it
    /// makes `Identity` a comonad.
    #[inline]
    pub fn extract(self) -> A {
        self.0
    }

    /// Returns a reference to the wrapped value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}
