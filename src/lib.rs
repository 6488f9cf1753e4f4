//! # tacit
//!
//! A functional programming standard library for Rust: two algebraic types,
//! a set of combinators, and law-abiding implementations of the common
//! type-class protocols for them and for the built-in containers.
//!
//! ## Overview
//!
//! - **Algebraic types**: [`Maybe`](control::Maybe) and
//!   [`Either`](control::Either), with the `encase` family for turning
//!   fallible or panicking functions into values
//! - **Type classes**: Functor, Applicative, Monad, Foldable, Traversable,
//!   Extend, Semigroup, Monoid, Setoid and Show, implemented for `Maybe`,
//!   `Either`, `Vec`, `BTreeMap<String, _>`, `String` and
//!   [`Identity`](typeclass::Identity)
//! - **Dispatch**: one polymorphic free function per protocol operation,
//!   plus capability lookup for dynamic values
//! - **Combinators**: I, K, A, T, C, B, S, `flip`, `lift*`, and the
//!   `compose!`, `pipe!`, `partial!`, `curry!` and `meld!` macros
//! - **Lists**: total `slice`/`at`/`take`/`drop` over arrays and strings
//! - **Accessors**: type-checked access to `serde_json::Value`s
//! - **Numbers**: arithmetic as functions, and `sum`/`product`/`mean` over
//!   any foldable
//! - **Text**: string utilities, regular expressions and strict parsers
//!
//! ## Feature Flags
//!
//! - `compose` (default): combinators and composition macros
//! - `list` (default): the slice family, searching and unfolding
//! - `accessor` (default): dynamic values, `get`/`gets`/`pluck`/`parse_json`
//! - `text` (default): strings, regular expressions and parsing, with
//!   `regex` and `chrono`
//! - `serde`: `Serialize`/`Deserialize` for the library's types
//! - `full`: all of the above
//!
//! ## Example
//!
//! ```rust
//! use tacit::prelude::*;
//!
//! let parsed: Vec<Maybe<i32>> = ["1", "x", "3"]
//!     .iter()
//!     .map(|text| text.parse::<i32>().ok().into())
//!     .collect();
//! let total = parsed.clone().traverse::<MaybeKind, i32, _>(|value| value);
//! assert_eq!(total, Nothing);
//! assert_eq!(justs(parsed).reduce(0, |sum, n| sum + n), 4);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the algebraic types, the type-class traits and the
/// composition macros. Free functions whose names collide with the
/// standard library (`drop`, `map`, `concat`) are left in their modules.
///
/// ```rust
/// use tacit::prelude::*;
///
/// assert_eq!(Just(2).chain(|n| if n > 1 { Just(n * 10) } else { Nothing }), Just(20));
/// ```
pub mod prelude {
    pub use crate::control::{
        Either, Just, Left, Maybe, Nothing, Right, from_either, from_maybe, justs, lefts, rights,
    };
    pub use crate::typeclass::{
        Applicative, ApplicativeKind, ApplicativeVec, EitherKind, Foldable, Functor, Identity,
        IdentityKind, MaybeKind, Monad, MonadVec, Monoid, Semigroup, Setoid, Show, Traversable,
        TypeConstructor, VecKind,
    };

    #[cfg(feature = "compose")]
    pub use crate::compose::{
        __, always, apply, bluebird, cardinal, constant, flip, flipped, identity, lift, lift2,
        lift3, starling, thrush,
    };
    #[cfg(feature = "compose")]
    pub use crate::{compose, curry, meld, partial, pipe};

    #[cfg(feature = "list")]
    pub use crate::list::Index;

    #[cfg(feature = "accessor")]
    pub use crate::accessor::TypeRep;
}

pub mod control;
pub mod dispatch;
pub mod error;
pub mod logic;
pub mod number;
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "list")]
pub mod list;

#[cfg(feature = "accessor")]
pub mod accessor;

#[cfg(feature = "text")]
pub mod text;

pub use error::PanicError;
