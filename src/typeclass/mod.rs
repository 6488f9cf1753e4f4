//! Type class traits for the protocols every value family implements.
//!
//! - [`Functor`]: `map`
//! - [`Applicative`]: `of`, `ap` (plus [`ApplicativeVec`] for arrays)
//! - [`Monad`]: `chain` (plus [`MonadVec`] for arrays)
//! - [`Foldable`]: `reduce`
//! - [`Traversable`]: `traverse`, over an [`ApplicativeKind`]
//! - [`Extend`]: `extend` (plus [`Comonad`]: `extract`)
//! - [`Semigroup`] / [`Monoid`]: `concat` / `empty`
//! - [`Setoid`]: `equals`
//! - [`Show`]: the deep representation behind `Display`
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to emulate them,
//! which is what lets `Functor` or `Monad` be stated once for `Maybe`,
//! `Either`, `Vec`, objects and [`Identity`].
//!
//! # Examples
//!
//! ```rust
//! use tacit::control::Maybe::{Just, Nothing};
//! use tacit::typeclass::{Monoid, Semigroup, Setoid};
//!
//! assert_eq!(String::empty().concat("hello".to_string()), "hello");
//! assert!(Just(1.5).equals(&Just(1.5)));
//! assert!(!Nothing.equals(&Just(1.5)));
//! ```

mod applicative;
mod extend;
mod foldable;
mod functor;
mod higher;
mod identity;
mod monad;
mod monoid;
mod semigroup;
mod setoid;
mod show;
mod traversable;

pub use applicative::{Applicative, ApplicativeVec};
pub use extend::{Comonad, Extend};
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::{Monad, MonadVec};
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use setoid::Setoid;
pub use show::Show;
pub use traversable::{
    ApplicativeKind, EitherKind, IdentityKind, MaybeKind, Traversable, VecKind,
};

#[cfg(feature = "accessor")]
pub(crate) use show::{quote, show_number};
