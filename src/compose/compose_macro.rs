//! Right-to-left function composition.

/// Composes functions right to left.
///
/// `compose!(f, g, h)` is `|x| f(g(h(x)))`; a single function is returned
/// as is. Composition is associative and [`identity`](crate::compose::identity)
/// is its unit on both sides.
///
/// Every function must implement [`Fn`], and each function's output type
/// must be the input type of the function to its left.
///
/// # Examples
///
/// ```rust
/// use tacit::compose;
///
/// fn increment(n: i32) -> i32 { n + 1 }
/// fn double(n: i32) -> i32 { n * 2 }
/// fn square(n: i32) -> i32 { n * n }
///
/// assert_eq!(compose!(increment, double)(5), 11);
/// assert_eq!(compose!(increment, double, square)(3), 19);
/// ```
///
/// Types may change along the chain:
///
/// ```rust
/// use tacit::compose;
///
/// let describe = compose!(|n: usize| format!("{n} chars"), |text: &str| text.chars().count());
/// assert_eq!(describe("héllo"), "5 chars");
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };
    ($outer:expr, $($inner:expr),+ $(,)?) => {
        $crate::compose::compose($outer, $crate::compose!($($inner),+))
    };
}
