//! Whole-string transformations.
//!
//! Whitespace is Unicode whitespace throughout.

/// The upper-case equivalent of `text`.
///
/// ```rust
/// assert_eq!(tacit::text::to_upper("ABC def 123"), "ABC DEF 123");
/// ```
#[inline]
pub fn to_upper(text: &str) -> String {
    text.to_uppercase()
}

/// The lower-case equivalent of `text`.
///
/// ```rust
/// assert_eq!(tacit::text::to_lower("ABC def 123"), "abc def 123");
/// ```
#[inline]
pub fn to_lower(text: &str) -> String {
    text.to_lowercase()
}

/// `text` without leading and trailing whitespace.
#[inline]
pub fn trim(text: &str) -> &str {
    text.trim()
}

/// The whitespace-delimited words of `text`.
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Joins `words` with single spaces.
pub fn unwords<S: AsRef<str>>(words: &[S]) -> String {
    words.iter().map(AsRef::as_ref).collect::<Vec<&str>>().join(" ")
}

/// The lines of `text`, split at `"\n"`, `"\r\n"` or `"\r"`.
///
/// A terminator ends a line rather than starting a new one, so a trailing
/// newline adds no empty line.
///
/// # Examples
///
/// ```rust
/// use tacit::text::lines;
///
/// assert_eq!(lines("foo\nbar\nbaz\n"), vec!["foo", "bar", "baz"]);
/// assert_eq!(lines("a\r\rb"), vec!["a", "", "b"]);
/// assert!(lines("").is_empty());
/// ```
pub fn lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        match rest.find(['\r', '\n']) {
            Some(end) => {
                let (line, terminated) = rest.split_at(end);
                lines.push(line);
                rest = terminated
                    .strip_prefix("\r\n")
                    .or_else(|| terminated.get(1..))
                    .unwrap_or_default();
            }
            None => {
                lines.push(rest);
                rest = "";
            }
        }
    }
    lines
}

/// Joins `lines`, terminating each with `"\n"`.
///
/// ```rust
/// assert_eq!(tacit::text::unlines(&["foo", "bar"]), "foo\nbar\n");
/// ```
pub fn unlines<S: AsRef<str>>(lines: &[S]) -> String {
    lines.iter().fold(String::new(), |mut joined, line| {
        joined.push_str(line.as_ref());
        joined.push('\n');
        joined
    })
}
