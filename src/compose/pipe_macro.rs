//! Left-to-right application.

/// Threads a value through functions, left to right.
///
/// `pipe!(x, f, g, h)` is `h(g(f(x)))`; `pipe!(x)` is `x`. Unlike
/// [`compose!`](crate::compose!), the functions are applied immediately,
/// so they only need to implement [`FnOnce`].
///
/// For a run-time list of functions use
/// [`compose::pipe`](crate::compose::pipe).
///
/// # Examples
///
/// ```rust
/// use tacit::pipe;
///
/// let words = pipe!(
///     "  Tacit programming  ",
///     str::trim,
///     str::to_lowercase,
///     |text: String| text.split(' ').map(String::from).collect::<Vec<_>>()
/// );
/// assert_eq!(words, vec!["tacit", "programming"]);
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(, $function:expr)* $(,)?) => {{
        let value = $value;
        $( let value = $crate::compose::thrush(value, $function); )*
        value
    }};
}
