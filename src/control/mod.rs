//! The two algebraic types and the functions built on them.
//!
//! - [`Maybe`]: an optional value, `Nothing` or `Just(a)`
//! - [`Either`]: a disjoint union, `Left(a)` or `Right(b)`
//! - the `encase` family, which turns fallible or panicking functions into
//!   `Maybe`/`Either` results
//!
//! Both types are closed enums: values exist only through their variants,
//! so there is no way to build a `Maybe` or `Either` that is neither.
//!
//! # Examples
//!
//! ```rust
//! use tacit::control::{justs, rights, Either::{Left, Right}, Maybe::{Just, Nothing}};
//!
//! assert_eq!(justs(vec![Just(1), Nothing, Just(3)]), vec![1, 3]);
//! assert_eq!(rights(vec![Left("a"), Right(2)]), vec![2]);
//! ```

mod either;
mod encase;
mod maybe;

pub use either::{
    Either, Left, Right, either, either_to_maybe, from_either, is_left, is_right, lefts, rights,
    to_either,
};
pub use encase::{
    encase, encase_either, encase_either_panic, encase_either2, encase_either3, encase_panic,
    encase2, encase3,
};
pub use maybe::{
    Just, Maybe, Nothing, from_maybe, is_just, is_nothing, justs, map_maybe, maybe,
    maybe_to_either, maybe_to_nullable, to_maybe,
};

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync, Clone, Copy);
static_assertions::assert_impl_all!(Either<String, i32>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(Maybe<std::rc::Rc<i32>>: Send, Sync);
