//! Regular expressions with JavaScript-style flags.

use std::fmt;

use regex::{Regex, RegexBuilder};

use crate::control::Maybe::{self, Just, Nothing};
use crate::typeclass::Show;

/// A compiled regular expression together with its source and flags.
///
/// The flags are any of `g` (global), `i` (case-insensitive) and `m`
/// (multi-line), each at most once. A global pattern matches every
/// occurrence in [`match_groups`]; the flag has no effect on [`test`].
/// Patterns hold no match state, so repeated calls always agree.
#[derive(Clone, Debug)]
pub struct Pattern {
    regex: Regex,
    source: String,
    global: bool,
    ignore_case: bool,
    multi_line: bool,
}

impl Pattern {
    /// The source the pattern was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The flags, in canonical `gim` order.
    pub fn flags(&self) -> String {
        [(self.global, 'g'), (self.ignore_case, 'i'), (self.multi_line, 'm')]
            .into_iter()
            .filter_map(|(set, flag)| set.then_some(flag))
            .collect()
    }

    /// Returns `true` if the `g` flag is set.
    pub const fn is_global(&self) -> bool {
        self.global
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.flags() == other.flags()
    }
}

impl Eq for Pattern {}

impl fmt::Display for Pattern {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "/{}/{}", self.source, self.flags())
    }
}

impl Show for Pattern {
    fn show(&self) -> String {
        self.to_string()
    }
}

/// Compiles `source` with `flags`.
///
/// Unknown or repeated flags and invalid sources yield `Nothing`; the
/// compile error is logged at trace level.
///
/// # Examples
///
/// ```rust
/// use tacit::text::regex;
///
/// let pattern = regex("g", r":\d+:");
/// assert_eq!(pattern.as_ref().map(ToString::to_string).from_maybe(String::new()), r"/:\d+:/g");
/// assert!(regex("x", "a").is_nothing());
/// assert!(regex("", "(").is_nothing());
/// ```
pub fn regex(flags: &str, source: &str) -> Maybe<Pattern> {
    let mut seen = (false, false, false);
    for flag in flags.chars() {
        let slot = match flag {
            'g' => &mut seen.0,
            'i' => &mut seen.1,
            'm' => &mut seen.2,
            _ => return Nothing,
        };
        if *slot {
            return Nothing;
        }
        *slot = true;
    }
    let (global, ignore_case, multi_line) = seen;
    match RegexBuilder::new(source)
        .case_insensitive(ignore_case)
        .multi_line(multi_line)
        .build()
    {
        Ok(regex) => Just(Pattern {
            regex,
            source: source.to_owned(),
            global,
            ignore_case,
            multi_line,
        }),
        Err(error) => {
            tracing::trace!(%error, source, "discarding invalid pattern");
            Nothing
        }
    }
}

/// Escapes the pattern metacharacters in `text`.
///
/// The result compiles to a pattern matching exactly `text`. Whitespace is
/// already literal and is left as it is.
///
/// ```rust
/// assert_eq!(tacit::text::regex_escape("-=*{XYZ}*=-"), r"\-=\*\{XYZ\}\*=\-");
/// ```
pub fn regex_escape(text: &str) -> String {
    const METACHARACTERS: &str = r"-[]{}()*+?.,\^$|#";
    let mut escaped = String::with_capacity(text.len());
    for character in text.chars() {
        if METACHARACTERS.contains(character) {
            escaped.push('\\');
        }
        escaped.push(character);
    }
    escaped
}

/// Returns `true` if `pattern` matches anywhere in `text`.
///
/// ```rust
/// use tacit::text::{regex, test};
///
/// let anchored = regex("", "^a");
/// assert!(anchored.as_ref().map(|pattern| test(pattern, "abacus")).from_maybe(false));
/// assert!(!anchored.as_ref().map(|pattern| test(pattern, "banana")).from_maybe(true));
/// ```
#[inline]
pub fn test(pattern: &Pattern, text: &str) -> bool {
    pattern.regex.is_match(text)
}

/// The match of `pattern` in `text`, or `Nothing` if there is none.
///
/// A non-global pattern gives the whole match followed by each capture
/// group, with `Nothing` for groups that did not participate. A global
/// pattern gives every non-overlapping match and no groups.
///
/// # Examples
///
/// ```rust
/// use tacit::control::Maybe::{Just, Nothing};
/// use tacit::text::{match_groups, regex};
///
/// let owned = |text: &str| Just(text.to_string());
/// let pattern = regex("", "(good)?bye");
/// assert_eq!(
///     pattern.chain(|pattern| match_groups(&pattern, "goodbye")),
///     Just(vec![owned("goodbye"), owned("good")])
/// );
///
/// let digits = regex("g", r"\d+");
/// assert_eq!(
///     digits.chain(|pattern| match_groups(&pattern, "a1b22c333")),
///     Just(vec![owned("1"), owned("22"), owned("333")])
/// );
/// ```
pub fn match_groups(pattern: &Pattern, text: &str) -> Maybe<Vec<Maybe<String>>> {
    let groups: Vec<Maybe<String>> = if pattern.global {
        pattern
            .regex
            .find_iter(text)
            .map(|found| Just(found.as_str().to_owned()))
            .collect()
    } else {
        match pattern.regex.captures(text) {
            Some(captures) => captures
                .iter()
                .map(|group| group.map(|found| found.as_str().to_owned()).into())
                .collect(),
            None => return Nothing,
        }
    };
    if groups.is_empty() { Nothing } else { Just(groups) }
}
