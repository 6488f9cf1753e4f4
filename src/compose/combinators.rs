//! The classic combinators.
//!
//! Every combinator here takes all of its arguments at once; use
//! [`partial!`](crate::partial) or [`curry!`](crate::curry) to apply them
//! one at a time.
//!
//! | Combinator | Name           | Definition               |
//! |------------|----------------|--------------------------|
//! | I          | [`identity`]   | `I(x) = x`               |
//! | K          | [`constant`]   | `K(x, y) = x`            |
//! | A          | [`apply`]      | `A(f, x) = f(x)`         |
//! | T          | [`thrush`]     | `T(x, f) = f(x)`         |
//! | C          | [`cardinal`]   | `C(f, x, y) = f(y)(x)`   |
//! | B          | [`bluebird`]   | `B(f, g, x) = f(g(x))`   |
//! | S          | [`starling`]   | `S(f, g, x) = f(x)(g(x))`|
//!
//! plus [`flip`], and the function builders [`compose`], [`pipe`],
//! [`always`] and [`flipped`].

/// The I combinator: returns its argument unchanged.
///
/// `identity` is the unit of composition: composing it with `f` on either
/// side gives `f` back.
///
/// # Examples
///
/// ```rust
/// use tacit::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// The K combinator: returns its first argument, ignoring the second.
///
/// # Examples
///
/// ```rust
/// use tacit::compose::constant;
///
/// assert_eq!(constant(1, "ignored"), 1);
/// ```
#[inline]
pub fn constant<T, U>(value: T, _ignored: U) -> T {
    value
}

/// Builds a function that always returns (a clone of) `value`.
///
/// This is `constant` with its first argument fixed.
///
/// # Examples
///
/// ```rust
/// use tacit::compose::always;
///
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(always(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn always<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// The A combinator: applies a function to a value.
#[inline]
pub fn apply<A, B, F>(function: F, value: A) -> B
where
    F: FnOnce(A) -> B,
{
    function(value)
}

/// The T combinator (thrush): applies a function to a value, value first.
///
/// # Examples
///
/// ```rust
/// use tacit::compose::thrush;
///
/// assert_eq!(thrush(3, |n: i32| n * n), 9);
/// ```
#[inline]
pub fn thrush<A, B, F>(value: A, function: F) -> B
where
    F: FnOnce(A) -> B,
{
    function(value)
}

/// The C combinator (cardinal): applies a curried binary function with its
/// arguments swapped.
///
/// # Examples
///
/// ```rust
/// use tacit::compose::cardinal;
///
/// let subtract = |a: i32| move |b: i32| a - b;
/// assert_eq!(cardinal(subtract, 1, 10), 9);
/// ```
#[inline]
pub fn cardinal<A, B, C, F, G>(function: F, first: A, second: B) -> C
where
    F: FnOnce(B) -> G,
    G: FnOnce(A) -> C,
{
    function(second)(first)
}

/// The B combinator (bluebird): `bluebird(f, g, x) = f(g(x))`.
#[inline]
pub fn bluebird<A, B, C, F, G>(outer: F, inner: G, value: A) -> C
where
    F: FnOnce(B) -> C,
    G: FnOnce(A) -> B,
{
    outer(inner(value))
}

/// The S combinator (starling): `starling(f, g, x) = f(x)(g(x))`.
///
/// # Examples
///
/// ```rust
/// use tacit::compose::starling;
///
/// let add = |a: i32| move |b: i32| a + b;
/// assert_eq!(starling(add, |n: i32| n * 10, 3), 33);
/// ```
#[inline]
pub fn starling<A: Clone, B, C, F, G, H>(function: F, inner: G, value: A) -> C
where
    F: FnOnce(A) -> H,
    G: FnOnce(A) -> B,
    H: FnOnce(B) -> C,
{
    function(value.clone())(inner(value))
}

/// Applies an uncurried binary function with its arguments swapped.
///
/// # Examples
///
/// ```rust
/// use tacit::compose::flip;
///
/// assert_eq!(flip(|a: i32, b: i32| a - b, 1, 10), 9);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F, first: B, second: A) -> C
where
    F: FnOnce(A, B) -> C,
{
    function(second, first)
}

/// Builds the argument-swapped version of a binary function.
///
/// `flipped(flipped(f))` behaves as `f`.
///
/// # Examples
///
/// ```rust
/// use tacit::compose::flipped;
///
/// let power = |base: i32, exponent: u32| base.pow(exponent);
/// let exponent_first = flipped(power);
/// assert_eq!(exponent_first(3, 2), 8);
/// ```
#[inline]
pub fn flipped<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}

/// Builds `|x| outer(inner(x))`.
///
/// # Examples
///
/// ```rust
/// use tacit::compose::compose;
///
/// let shout = compose(|text: String| text + "!", |text: &str| text.to_uppercase());
/// assert_eq!(shout("hey"), "HEY!");
/// ```
#[inline]
pub fn compose<A, B, C, F, G>(outer: F, inner: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |value| outer(inner(value))
}

/// Threads `value` through `functions`, left to right.
///
/// # Examples
///
/// ```rust
/// use tacit::compose::pipe;
///
/// let steps: Vec<Box<dyn Fn(i32) -> i32>> = vec![Box::new(|n| n + 1), Box::new(|n| n * 2)];
/// assert_eq!(pipe(steps, 3), 8);
/// assert_eq!(pipe(Vec::<fn(i32) -> i32>::new(), 3), 3);
/// ```
#[inline]
pub fn pipe<A, F, I>(functions: I, value: A) -> A
where
    I: IntoIterator<Item = F>,
    F: FnOnce(A) -> A,
{
    functions
        .into_iter()
        .fold(value, |accumulator, function| function(accumulator))
}

/// The hole marker recognised by [`partial!`](crate::partial).
///
/// Writing `__` in an argument position of `partial!` leaves that position
/// open; the resulting function takes the open positions as its parameters,
/// in their original order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placeholder;

/// The hole value. See [`Placeholder`].
#[allow(non_upper_case_globals)]
pub const __: Placeholder = Placeholder;
