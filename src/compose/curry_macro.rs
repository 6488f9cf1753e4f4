//! Currying of functions of any fixed arity.
//!
//! The function and every argument received so far are kept behind
//! `std::rc::Rc`, so each intermediate closure implements [`Fn`] and can be
//! applied more than once. An argument is cloned out of its `Rc` only when
//! the final call is made.

/// Converts an `n`-argument function into a chain of one-argument closures.
///
/// The arity is given as a literal: `curry!(f, 3)` is
/// `|a| |b| |c| f(a, b, c)`. Arities 2 through 8 are supported. Every
/// argument except the last must implement [`Clone`], and `f` must
/// implement [`Fn`].
///
/// # Examples
///
/// ```rust
/// use tacit::curry;
///
/// fn volume(width: u32, height: u32, depth: u32) -> u32 {
///     width * height * depth
/// }
///
/// let curried = curry!(volume, 3);
/// let square_base = curried(2)(2);
/// assert_eq!(square_base(5), 20);
/// assert_eq!(square_base(1), 4);
///
/// let label = curry!(|name: String, count: usize| format!("{name}: {count}"), 2);
/// let apples = label("apples".to_string());
/// assert_eq!(apples(3), "apples: 3");
/// assert_eq!(apples(4), "apples: 4");
/// ```
#[macro_export]
macro_rules! curry {
    ($function:expr, 2 $(,)?) => {
        $crate::__curry!(@start $function; first second)
    };
    ($function:expr, 3 $(,)?) => {
        $crate::__curry!(@start $function; first second third)
    };
    ($function:expr, 4 $(,)?) => {
        $crate::__curry!(@start $function; first second third fourth)
    };
    ($function:expr, 5 $(,)?) => {
        $crate::__curry!(@start $function; first second third fourth fifth)
    };
    ($function:expr, 6 $(,)?) => {
        $crate::__curry!(@start $function; first second third fourth fifth sixth)
    };
    ($function:expr, 7 $(,)?) => {
        $crate::__curry!(@start $function; first second third fourth fifth sixth seventh)
    };
    ($function:expr, 8 $(,)?) => {
        $crate::__curry!(@start $function; first second third fourth fifth sixth seventh eighth)
    };
}

/// Closure builder behind [`curry!`].
#[doc(hidden)]
#[macro_export]
macro_rules! __curry {
    (@start $function:expr; $($parameter:ident)+) => {{
        let function = ::std::rc::Rc::new($function);
        $crate::__curry!(@nest function [] [$($parameter)+])
    }};
    (@nest $function:ident [$($bound:ident)*] [$last:ident]) => {
        move |$last| {
            $function(
                $( ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&$bound)), )*
                $last
            )
        }
    };
    (@nest $function:ident [$($bound:ident)*] [$next:ident $($rest:ident)+]) => {
        move |$next| {
            let $function = ::std::rc::Rc::clone(&$function);
            $( let $bound = ::std::rc::Rc::clone(&$bound); )*
            let $next = ::std::rc::Rc::new($next);
            $crate::__curry!(@nest $function [$($bound)* $next] [$($rest)+])
        }
    };
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    fn add(first: i32, second: i32) -> i32 {
        first + second
    }

    fn weave(a: &str, b: &str, c: &str, d: &str, e: &str) -> String {
        format!("{a}{b}{c}{d}{e}")
    }

    #[rstest]
    fn binary() {
        let curried = curry!(add, 2);
        assert_eq!(curried(2)(3), 5);
    }

    #[rstest]
    fn partial_applications_are_reusable() {
        let curried = curry!(add, 2);
        let add_ten = curried(10);
        assert_eq!(add_ten(1), 11);
        assert_eq!(add_ten(2), 12);
        assert_eq!(curried(0)(0), 0);
    }

    #[rstest]
    fn five_arguments_apply_in_order() {
        let curried = curry!(weave, 5);
        assert_eq!(curried("a")("b")("c")("d")("e"), "abcde");
    }

    #[rstest]
    fn non_copy_arguments_are_cloned() {
        let curried = curry!(|items: Vec<i32>, extra: i32| items.len() as i32 + extra, 2);
        let with_items = curried(vec![1, 2, 3]);
        assert_eq!(with_items(1), 4);
        assert_eq!(with_items(2), 5);
    }

    #[rstest]
    fn eight_arguments() {
        let sum = |a: u8, b: u8, c: u8, d: u8, e: u8, f: u8, g: u8, h: u8| {
            [a, b, c, d, e, f, g, h].iter().map(|&n| u32::from(n)).sum::<u32>()
        };
        let curried = curry!(sum, 8);
        assert_eq!(curried(1)(2)(3)(4)(5)(6)(7)(8), 36);
    }
}
