//! Partial application with `__` holes.

/// Fixes some arguments of a function, leaving the `__` positions open.
///
/// `partial!(f, a, __, c, __)` is `move |x, y| f(a.clone(), x, c.clone(), y)`:
/// the holes become the parameters of the result, in their original
/// relative order. Fixed arguments are evaluated once, when the macro runs,
/// and cloned on every call, so the result implements [`Fn`] whenever `f`
/// does. With no holes the result is a thunk.
///
/// `__` is matched as a token; it does not need to be imported. Any number
/// of arguments is supported.
///
/// # Examples
///
/// ```rust
/// use tacit::partial;
///
/// fn clamp(low: i32, value: i32, high: i32) -> i32 {
///     value.max(low).min(high)
/// }
///
/// let percentage = partial!(clamp, 0, __, 100);
/// assert_eq!(percentage(140), 100);
/// assert_eq!(percentage(-3), 0);
///
/// let between = partial!(clamp, __, 50, __);
/// assert_eq!(between(60, 70), 60);
///
/// let thunk = partial!(clamp, 1, 2, 3);
/// assert_eq!(thunk(), 2);
/// ```
#[macro_export]
macro_rules! partial {
    ($function:expr $(,)?) => {{
        let function = $function;
        move || function()
    }};
    ($function:expr, $($arguments:tt)+) => {
        $crate::__partial!(@collect [$function] [] [] [] $($arguments)+)
    };
}

/// Argument collector behind [`partial!`].
///
/// Each step introduces a fresh `hole` or `fixed` binding; bindings from
/// different steps never collide because every expansion is hygienic.
#[doc(hidden)]
#[macro_export]
macro_rules! __partial {
    (@collect [$function:expr] [$($hole:ident)*] [$($fixed:ident = $value:expr;)*] [$({$($argument:tt)*})*]) => {{
        let function = $function;
        $( let $fixed = $value; )*
        move |$($hole),*| function($($($argument)*),*)
    }};
    (@collect [$function:expr] [$($hole:ident)*] [$($fixed:tt)*] [$($call:tt)*] __ $(, $($rest:tt)*)?) => {
        $crate::__partial!(
            @collect [$function] [$($hole)* hole] [$($fixed)*] [$($call)* {hole}] $($($rest)*)?
        )
    };
    (@collect [$function:expr] [$($hole:ident)*] [$($fixed:tt)*] [$($call:tt)*] $value:expr $(, $($rest:tt)*)?) => {
        $crate::__partial!(
            @collect [$function] [$($hole)*] [$($fixed)* fixed = $value;] [$($call)* {fixed.clone()}] $($($rest)*)?
        )
    };
}

#[cfg(test)]
mod tests {
    use crate::compose;
    use rstest::rstest;

    fn subtract(minuend: i32, subtrahend: i32) -> i32 {
        minuend - subtrahend
    }

    fn join(first: &str, second: &str, third: &str, fourth: &str) -> String {
        [first, second, third, fourth].concat()
    }

    #[rstest]
    fn hole_first() {
        let minus_ten = partial!(subtract, __, 10);
        assert_eq!(minus_ten(15), 5);
    }

    #[rstest]
    fn hole_last() {
        let from_ten = partial!(subtract, 10, __);
        assert_eq!(from_ten(15), -5);
    }

    #[rstest]
    fn holes_keep_relative_order() {
        let shape = partial!(join, "<", __, "|", __);
        assert_eq!(shape("a", "b"), "<a|b");
    }

    #[rstest]
    fn all_holes_is_the_function() {
        let same = partial!(subtract, __, __);
        assert_eq!(same(3, 1), subtract(3, 1));
    }

    #[rstest]
    fn fixed_values_are_cloned_per_call() {
        let greeting = String::from("hello ");
        let greet = partial!(|prefix: String, name: &str| prefix + name, greeting, __);
        assert_eq!(greet("a"), "hello a");
        assert_eq!(greet("b"), "hello b");
    }

    #[rstest]
    fn fixed_arguments_are_evaluated_once() {
        let evaluations = std::cell::Cell::new(0);
        let next = || {
            evaluations.set(evaluations.get() + 1);
            evaluations.get()
        };
        let offset = partial!(subtract, __, next());
        assert_eq!(offset(10), 9);
        assert_eq!(offset(20), 19);
        assert_eq!(evaluations.get(), 1);
    }

    #[rstest]
    fn composes_with_other_partials() {
        let pipeline = compose!(partial!(subtract, 100, __), partial!(subtract, __, 1));
        assert_eq!(pipeline(11), 90);
    }

    #[rstest]
    fn nullary_function_becomes_thunk() {
        let thunk = partial!(|| 7);
        assert_eq!(thunk(), 7);
    }
}
