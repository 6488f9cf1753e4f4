//! Melding: composition of functions of any arity.

/// Composes N-ary functions into one function.
///
/// Each function is written with one `_` per parameter. The result of each
/// function is passed as the first argument of the next; all other
/// parameters become parameters of the melded function, in order. The
/// melded arity is therefore the sum of the arities minus one for every
/// function after the first.
///
/// `meld!(f(_, _), g(_, _), h(_))` is `|a, b, c| h(g(f(a, b), c))`.
///
/// The functions must be named by identifiers (local bindings or function
/// items).
///
/// # Examples
///
/// ```rust
/// use tacit::meld;
///
/// fn add(a: i32, b: i32) -> i32 { a + b }
/// fn scale(value: i32, by: i32) -> i32 { value * by }
/// let negate = |n: i32| -n;
///
/// let melded = meld!(add(_, _), scale(_, _), negate(_));
/// assert_eq!(melded(1, 2, 10), -30);
/// ```
#[macro_export]
macro_rules! meld {
    ($first:ident ($($first_slot:tt),*) $(, $function:ident ($($slot:tt),*))* $(,)?) => {
        $crate::__meld!(@first $first [] [$($first_slot)*] $([$function] [$($slot)*])*)
    };
}

/// Parameter threading behind [`meld!`].
///
/// Every `_` introduces a fresh `parameter` binding.
#[doc(hidden)]
#[macro_export]
macro_rules! __meld {
    (@first $function:ident [$($parameter:ident)*] [_ $($slot:tt)*] $($rest:tt)*) => {
        $crate::__meld!(@first $function [$($parameter)* parameter] [$($slot)*] $($rest)*)
    };
    (@first $function:ident [$($parameter:ident)*] [] $($rest:tt)*) => {
        $crate::__meld!(@next [$($parameter)*] [$function($($parameter),*)] $($rest)*)
    };
    (@next [$($parameter:ident)*] [$($body:tt)*]) => {
        move |$($parameter),*| $($body)*
    };
    (@next [$($parameter:ident)*] [$($body:tt)*] [$function:ident] [_ $($slot:tt)*] $($rest:tt)*) => {
        $crate::__meld!(@later $function [$($parameter)*] [$($body)*] [] [$($slot)*] $($rest)*)
    };
    (@later $function:ident [$($parameter:ident)*] [$($body:tt)*] [$($extra:ident)*] [_ $($slot:tt)*] $($rest:tt)*) => {
        $crate::__meld!(@later $function [$($parameter)* parameter] [$($body)*] [$($extra)* parameter] [$($slot)*] $($rest)*)
    };
    (@later $function:ident [$($parameter:ident)*] [$($body:tt)*] [$($extra:ident)*] [] $($rest:tt)*) => {
        $crate::__meld!(@next [$($parameter)*] [$function($($body)* $(, $extra)*)] $($rest)*)
    };
}
