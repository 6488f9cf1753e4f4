//! Show type class - the deep string representation of a value.
//!
//! `show` renders a value the way it would be written as an expression:
//! strings are double-quoted with JSON escapes, `-0.0` renders as `-0`,
//! arrays render as `[a, b]`, objects as `{"key": value}`, and the algebraic
//! types as `Just(x)`, `Nothing`, `Left(x)`, `Right(x)`. `Display` for
//! `Maybe` and `Either` is implemented on top of it.
//!
//! # Examples
//!
//! ```rust
//! use tacit::control::Either::{Left, Right};
//! use tacit::control::Maybe::{Just, Nothing};
//! use tacit::typeclass::Show;
//!
//! assert_eq!(Just(vec![1, 2]).show(), "Just([1, 2])");
//! assert_eq!(Just(Nothing::<i32>).show(), "Just(Nothing)");
//! assert_eq!(Left::<&str, i32>("oops").show(), "Left(\"oops\")");
//! assert_eq!(Right::<&str, f64>(-0.0).show(), "Right(-0)");
//! ```

use std::collections::BTreeMap;
use std::fmt;

use super::identity::Identity;
use crate::control::{Either, Maybe};

/// A type class for types with a deep string representation.
pub trait Show {
    /// Returns the representation of `self`.
    fn show(&self) -> String;
}

/// Quotes `text` as a JSON string literal.
pub(crate) fn quote(text: &str) -> String {
    serde_json::Value::from(text).to_string()
}

/// Renders a number the way JavaScript's `String(number)` does.
pub(crate) fn show_number(value: f64) -> String {
    format_number(value, value)
}

/// Formats `value` in its shortest round-tripping form. `wide` is the same
/// value as an `f64` and picks the notation: exponents appear outside
/// `[1e-6, 1e21)` and always carry a sign.
fn format_number<T: fmt::Display + fmt::LowerExp>(value: T, wide: f64) -> String {
    let magnitude = wide.abs();
    if wide.is_infinite() {
        let text = if wide.is_sign_negative() { "-Infinity" } else { "Infinity" };
        text.to_string()
    } else if wide.is_finite() && magnitude > 0.0 && !(1e-6..1e21).contains(&magnitude) {
        let text = format!("{value:e}");
        match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => text,
        }
    } else {
        value.to_string()
    }
}

fn show_sequence<'a, T, I>(values: I) -> String
where
    T: Show + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let items: Vec<String> = values.into_iter().map(Show::show).collect();
    format!("[{}]", items.join(", "))
}

macro_rules! show_via_display {
    ($($type:ty),* $(,)?) => {
        $(
            impl Show for $type {
                #[inline]
                fn show(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

show_via_display!(bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Show for f64 {
    #[inline]
    fn show(&self) -> String {
        show_number(*self)
    }
}

impl Show for f32 {
    #[inline]
    fn show(&self) -> String {
        format_number(*self, f64::from(*self))
    }
}

impl Show for char {
    fn show(&self) -> String {
        let mut buffer = [0; 4];
        quote(self.encode_utf8(&mut buffer))
    }
}

impl Show for str {
    #[inline]
    fn show(&self) -> String {
        quote(self)
    }
}

impl Show for String {
    #[inline]
    fn show(&self) -> String {
        quote(self)
    }
}

impl Show for () {
    #[inline]
    fn show(&self) -> String {
        "null".to_string()
    }
}

impl<T: Show + ?Sized> Show for &T {
    #[inline]
    fn show(&self) -> String {
        (**self).show()
    }
}

impl<T: Show> Show for [T] {
    fn show(&self) -> String {
        show_sequence(self)
    }
}

impl<T: Show> Show for Vec<T> {
    fn show(&self) -> String {
        show_sequence(self)
    }
}

impl<V: Show> Show for BTreeMap<String, V> {
    fn show(&self) -> String {
        let entries: Vec<String> = self
            .iter()
            .map(|(key, value)| format!("{}: {}", quote(key), value.show()))
            .collect();
        format!("{{{}}}", entries.join(", "))
    }
}

impl<A: Show, B: Show> Show for (A, B) {
    fn show(&self) -> String {
        format!("[{}, {}]", self.0.show(), self.1.show())
    }
}

impl<A: Show> Show for Maybe<A> {
    fn show(&self) -> String {
        match self {
            Self::Nothing => "Nothing".to_string(),
            Self::Just(value) => format!("Just({})", value.show()),
        }
    }
}

impl<L: Show, R: Show> Show for Either<L, R> {
    fn show(&self) -> String {
        match self {
            Self::Left(value) => format!("Left({})", value.show()),
            Self::Right(value) => format!("Right({})", value.show()),
        }
    }
}

impl<A: Show> Show for Identity<A> {
    fn show(&self) -> String {
        format!("Identity({})", self.0.show())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{Just, Left, Nothing, Right};
    use rstest::rstest;

    #[rstest]
    #[case(3.0, "3")]
    #[case(-0.0, "-0")]
    #[case(0.5, "0.5")]
    #[case(f64::NAN, "NaN")]
    #[case(f64::INFINITY, "Infinity")]
    #[case(f64::NEG_INFINITY, "-Infinity")]
    #[case(1e21, "1e+21")]
    #[case(1.5e300, "1.5e+300")]
    #[case(1e20, "100000000000000000000")]
    #[case(1e-7, "1e-7")]
    #[case(-2.5e-9, "-2.5e-9")]
    #[case(0.000_001, "0.000001")]
    fn numbers(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(value.show(), expected);
    }

    #[rstest]
    #[case(0.1, "0.1")]
    #[case(-0.0, "-0")]
    #[case(3.25, "3.25")]
    #[case(f32::MAX, "3.4028235e+38")]
    fn single_precision_keeps_its_shortest_form(#[case] value: f32, #[case] expected: &str) {
        assert_eq!(value.show(), expected);
    }

    #[rstest]
    #[case("plain", "\"plain\"")]
    #[case("say \"hi\"", "\"say \\\"hi\\\"\"")]
    #[case("line\nbreak", "\"line\\nbreak\"")]
    #[case("\u{01}", "\"\\u0001\"")]
    #[case("tab\there", "\"tab\\there\"")]
    #[case("back\\slash", "\"back\\\\slash\"")]
    #[case("\u{08}\u{0c}\u{1f}", "\"\\b\\f\\u001f\"")]
    #[case("naïve ☃", "\"naïve ☃\"")]
    fn strings_are_json_quoted(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(text.show(), expected);
    }

    #[rstest]
    fn algebraic_types_render_constructor_form() {
        assert_eq!(Nothing::<i32>.show(), "Nothing");
        assert_eq!(Just(Just(1)).show(), "Just(Just(1))");
        assert_eq!(Left::<i32, i32>(1).show(), "Left(1)");
        assert_eq!(Right::<i32, String>("x".into()).show(), "Right(\"x\")");
        assert_eq!(Identity(true).show(), "Identity(true)");
    }

    #[rstest]
    fn containers_render_recursively() {
        let object: BTreeMap<String, Maybe<i32>> =
            [("a".to_string(), Just(1)), ("b".to_string(), Nothing)].into_iter().collect();
        assert_eq!(object.show(), "{\"a\": Just(1), \"b\": Nothing}");
        assert_eq!(Vec::<i32>::new().show(), "[]");
        assert_eq!(vec![(1, 'x')].show(), "[[1, \"x\"]]");
    }

    #[rstest]
    fn display_matches_show() {
        assert_eq!(Just("x").to_string(), "Just(\"x\")");
        assert_eq!(Left::<i32, bool>(2).to_string(), "Left(2)");
    }
}
