//! Strict parsers for numbers and dates.
//!
//! Each parser accepts the whole input or nothing: trailing garbage, which
//! lenient parsers skip, makes the result `Nothing`.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use regex::Regex;

use crate::control::Maybe::{self, Just, Nothing};

/// The largest integer every `f64` between it and zero represents exactly.
const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

static FLOAT_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"^\s*[+-]?(?:Infinity|NaN|(?:[0-9]+|[0-9]+[.][0-9]+|[0-9]+[.]|[.][0-9]+)(?:[Ee][+-]?[0-9]+)?)\s*$",
    )
    .ok()
});

/// Parses `text` as an integer in base `radix`.
///
/// The input is an optional sign followed by one or more digits of the
/// radix, in either case; base 16 also allows a `0x` prefix. Radixes
/// outside `2..=36` and values beyond `±(2^53 - 1)` yield `Nothing`.
///
/// # Examples
///
/// ```rust
/// use tacit::control::Maybe::{Just, Nothing};
/// use tacit::text::parse_int;
///
/// assert_eq!(parse_int(10, "-42"), Just(-42));
/// assert_eq!(parse_int(16, "0xFF"), Just(255));
/// assert_eq!(parse_int(16, "0xGG"), Nothing);
/// assert_eq!(parse_int(10, "12px"), Nothing);
/// ```
pub fn parse_int(radix: u32, text: &str) -> Maybe<i64> {
    if !(2..=36).contains(&radix) {
        return Nothing;
    }
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let digits = if radix == 16 {
        unsigned
            .strip_prefix("0x")
            .or_else(|| unsigned.strip_prefix("0X"))
            .unwrap_or(unsigned)
    } else {
        unsigned
    };
    if digits.is_empty() || !digits.chars().all(|digit| digit.is_digit(radix)) {
        return Nothing;
    }
    match i64::from_str_radix(digits, radix) {
        Ok(magnitude) if magnitude <= MAX_SAFE_INTEGER => {
            Just(if negative { -magnitude } else { magnitude })
        }
        _ => Nothing,
    }
}

/// Parses `text` as a decimal number.
///
/// Surrounding whitespace is allowed. The number may have a leading or
/// trailing decimal point and an exponent, or be `Infinity` or `NaN`.
///
/// # Examples
///
/// ```rust
/// use tacit::control::Maybe::{Just, Nothing};
/// use tacit::text::parse_float;
///
/// assert_eq!(parse_float("-123.45"), Just(-123.45));
/// assert_eq!(parse_float(" .5e2 "), Just(50.0));
/// assert_eq!(parse_float("foo.bar"), Nothing);
/// assert_eq!(parse_float("1.5.2"), Nothing);
/// ```
pub fn parse_float(text: &str) -> Maybe<f64> {
    let well_formed = FLOAT_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(text));
    if well_formed {
        text.trim().parse::<f64>().ok().into()
    } else {
        Nothing
    }
}

/// Parses `text` as a date and time in UTC.
///
/// Accepts RFC 3339 timestamps with any offset, bare `YYYY-MM-DD` dates
/// (midnight UTC) and `YYYY-MM-DDTHH:MM:SS` timestamps without an offset,
/// which are read as UTC.
///
/// # Examples
///
/// ```rust
/// use tacit::text::parse_date;
///
/// let parsed = parse_date("2011-01-19T17:40:00Z");
/// assert_eq!(parsed.map(|date| date.timestamp()).from_maybe(0), 1_295_458_800);
/// assert!(parse_date("today").is_nothing());
/// ```
pub fn parse_date(text: &str) -> Maybe<DateTime<Utc>> {
    let trimmed = text.trim();
    let parsed = DateTime::parse_from_rfc3339(trimmed)
        .map(|date| date.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| Utc.from_utc_datetime(&naive))
        })
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| Utc.from_utc_datetime(&naive))
        });
    if parsed.is_none() {
        tracing::trace!(text, "discarding unrecognised date");
    }
    parsed.into()
}
