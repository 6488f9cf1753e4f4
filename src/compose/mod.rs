//! Combinators and function-composition tools.
//!
//! - [`identity`], [`constant`], [`apply`], [`thrush`], [`cardinal`],
//!   [`bluebird`], [`starling`] and [`flip`]: the I, K, A, T, C, B, S and
//!   flip combinators, each taking all of its arguments at once
//! - [`compose`] / [`pipe`]: composition as functions
//! - [`lift`], [`lift2`], [`lift3`]: promoting plain functions into a
//!   Functor or Applicative context
//! - [`compose!`](crate::compose!), [`pipe!`](crate::pipe!): composition of
//!   a fixed list of functions
//! - [`partial!`](crate::partial!): partial application with `__` holes
//! - [`curry!`](crate::curry!): one-argument-at-a-time application
//! - [`meld!`](crate::meld!): composition of functions of any arity
//!
//! # Examples
//!
//! ```rust
//! use tacit::compose::{bluebird, flip};
//! use tacit::{curry, partial, pipe};
//!
//! fn divide(numerator: f64, denominator: f64) -> f64 {
//!     numerator / denominator
//! }
//!
//! let half = partial!(divide, __, 2.0);
//! assert_eq!(pipe!(9.0, half, |n: f64| n.floor()), 4.0);
//! assert_eq!(flip(divide, 2.0, 9.0), 4.5);
//! assert_eq!(curry!(divide, 2)(1.0)(4.0), 0.25);
//! assert_eq!(bluebird(half, half, 8.0), 2.0);
//! ```

mod combinators;
mod compose_macro;
mod curry_macro;
mod lift;
mod meld_macro;
mod partial_macro;
mod pipe_macro;

pub use combinators::{
    Placeholder, __, always, apply, bluebird, cardinal, compose, constant, flip, flipped,
    identity, pipe, starling, thrush,
};
pub use lift::{lift, lift2, lift2_vec, lift3, lift3_vec};

pub use crate::compose;
pub use crate::curry;
pub use crate::meld;
pub use crate::partial;
pub use crate::pipe;
