//! # Calmwater
//!
//! Composable containers for values that may be missing and computations that may fail.
//!
//! - [`Maybe<T>`]: `Absent` or `Present(T)`.
//! - [`Either<E, T>`]: `Failure(E)` or `Success(T)`.
//!
//! Both are mappable ([`Functor`](typeclass::Functor)), appliable
//! ([`Applicative`](typeclass::Applicative)), bindable ([`Monad`](typeclass::Monad)) and,
//! when their payload is, combinable ([`Semigroup`], [`Monoid`]). User callbacks never
//! unwind through a chain: a panic is captured and turned into the container's
//! absorbing variant (see [`capture`]).
//!
//! ## Quick Example
//!
//! ```rust
//! use calmwater::curry::curry2;
//! use calmwater::{Either, Maybe};
//!
//! let doubled = Maybe::unit(21i32).bind(|x| x.checked_mul(2));
//! assert_eq!(doubled, Maybe::present(42));
//!
//! let add = Either::<String, _>::pure(curry2(|a: i32, b: i32| a + b));
//! let sum = add.apply(Either::success(3)).apply(Either::success(4));
//! assert_eq!(sum, Either::success(7));
//!
//! let divisor = std::hint::black_box(0);
//! let failed: Either<String, i32> = Either::success(42).transform(|x| x / divisor);
//! assert_eq!(failed, Either::failure("callback panicked: attempt to divide by zero".to_string()));
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events for captured panics, empty markers and attached
//!   context.
//! - `proptest`: `Arbitrary` impls for [`Maybe`] and [`Either`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod capture;
pub mod context;
pub mod curry;
pub mod either;
pub mod laws;
pub mod maybe;
pub mod monoid;
pub mod semigroup;
pub mod testing;
pub mod truthy;
pub mod typeclass;

pub use capture::Fault;
pub use context::ContextError;
pub use either::Either;
pub use maybe::Maybe;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use truthy::Truthy;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::capture::Fault;
    pub use crate::context::ContextError;
    pub use crate::curry::{curry2, curry3, Call};
    pub use crate::either::Either;
    pub use crate::maybe::Maybe;
    pub use crate::monoid::{Max, Min, Monoid, Product, Sum};
    pub use crate::semigroup::Semigroup;
    pub use crate::truthy::Truthy;
    pub use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};
}
