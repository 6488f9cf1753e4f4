//! Typed access to dynamic values.
//!
//! Dynamic values are `serde_json::Value`s. A [`TypeRep`] names the type a
//! caller expects, and every accessor returns
//! [`Nothing`](crate::control::Maybe::Nothing) rather than a value of some
//! other type:
//!
//! - [`is`]: type test
//! - [`get`], [`gets`], [`pluck`]: property access by name or path
//! - [`prop`]: property access without a type check
//! - [`keys`], [`values`], [`pairs`]: the entries of a [`StrMap`]
//! - [`parse_json`]: parsing with a type check
//!
//! `Value` also implements [`Setoid`](crate::typeclass::Setoid) and
//! [`Show`](crate::typeclass::Show).
//!
//! # Examples
//!
//! ```rust
//! use serde_json::json;
//! use tacit::accessor::{TypeRep, gets, parse_json};
//! use tacit::control::Maybe::Just;
//!
//! let config = parse_json(&TypeRep::Object, r#"{"server": {"port": 8080}}"#);
//! let port = config.chain(|config| gets(&TypeRep::Number, &["server", "port"], &config).map(Clone::clone));
//! assert_eq!(port, Just(json!(8080)));
//! ```

mod get;
mod object;
mod type_rep;
mod value;

pub use get::{get, gets, parse_json, pluck};
pub use object::{StrMap, keys, pairs, prop, values};
pub use type_rep::{TypeRep, is};
