//! Strings: case and whitespace, regular expressions and strict parsing.
//!
//! - [`to_upper`], [`to_lower`], [`trim`], [`words`], [`unwords`],
//!   [`lines`], [`unlines`]: whole-string transformations
//! - [`regex`], [`regex_escape`], [`test`], [`match_groups`]: regular
//!   expressions through [`Pattern`]
//! - [`parse_int`], [`parse_float`], [`parse_date`]: parsers that accept
//!   only well-formed input and return `Nothing` otherwise
//!
//! # Examples
//!
//! ```rust
//! use tacit::control::Maybe::{Just, Nothing};
//! use tacit::text::{lines, match_groups, parse_int, regex, words};
//!
//! assert_eq!(words(" foo bar baz "), vec!["foo", "bar", "baz"]);
//! assert_eq!(lines("foo\r\nbar\n"), vec!["foo", "bar"]);
//! assert_eq!(parse_int(16, "0xFF"), Just(255));
//! assert_eq!(parse_int(16, "0xGG"), Nothing);
//!
//! let farewell = regex("", "(good)?bye");
//! assert_eq!(
//!     farewell.chain(|pattern| match_groups(&pattern, "bye")),
//!     Just(vec![Just("bye".to_string()), Nothing])
//! );
//! ```

mod parse;
mod pattern;
mod string;

pub use parse::{parse_date, parse_float, parse_int};
pub use pattern::{Pattern, match_groups, regex, regex_escape, test};
pub use string::{lines, to_lower, to_upper, trim, unlines, unwords, words};
