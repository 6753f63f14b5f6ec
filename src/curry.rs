//! Partial application for `apply`
//!
//! A wrapped function is applied to one wrapped argument at a time. Plain
//! single-argument closures are [`Call`]able directly. Functions of two or three
//! arguments are wrapped with [`curry2`] / [`curry3`]; calling them with fewer
//! arguments than they need yields a partially applied function instead of an error,
//! so multi-argument functions can be fed through a chain of `apply` calls.
//!
//! # Example
//!
//! ```rust
//! use calmwater::curry::curry2;
//! use calmwater::capture::Fault;
//! use calmwater::Either;
//!
//! let add = Either::<Fault, _>::pure(curry2(|a: i32, b: i32| a + b));
//! let add_three = add.apply(Either::success(3));
//! assert!(add_three.is_success());
//! assert_eq!(add_three.apply(Either::success(4)), Either::success(7));
//! ```

use std::fmt;
use std::marker::PhantomData;

/// Something that can be called with a single argument of type `A`.
pub trait Call<A> {
    /// What the call produces; either a final value or a partial application.
    type Output;

    /// Call with one argument.
    fn invoke(self, arg: A) -> Self::Output;
}

impl<F, A, B> Call<A> for F
where
    F: FnOnce(A) -> B,
{
    type Output = B;

    #[inline]
    fn invoke(self, arg: A) -> B {
        self(arg)
    }
}

/// A two-argument function awaiting its first argument.
///
/// Created by [`curry2`].
pub struct Curry2<F, A, B> {
    function: F,
    _args: PhantomData<fn(A, B)>,
}

/// A two-argument function that has received its first argument.
pub struct Partial2<F, A, B> {
    function: F,
    first: A,
    _args: PhantomData<fn(B)>,
}

/// Wrap a two-argument function so it can be applied one argument at a time.
///
/// ```rust
/// use calmwater::curry::{curry2, Call};
///
/// let concat = curry2(|a: String, b: &str| a + b);
/// let greeting = concat.invoke("hello, ".to_string());
/// assert_eq!(greeting.invoke("world"), "hello, world");
/// ```
pub fn curry2<F, A, B, C>(function: F) -> Curry2<F, A, B>
where
    F: FnOnce(A, B) -> C,
{
    Curry2 {
        function,
        _args: PhantomData,
    }
}

impl<F, A, B, C> Call<A> for Curry2<F, A, B>
where
    F: FnOnce(A, B) -> C,
{
    type Output = Partial2<F, A, B>;

    fn invoke(self, arg: A) -> Self::Output {
        Partial2 {
            function: self.function,
            first: arg,
            _args: PhantomData,
        }
    }
}

impl<F, A, B, C> Call<B> for Partial2<F, A, B>
where
    F: FnOnce(A, B) -> C,
{
    type Output = C;

    fn invoke(self, arg: B) -> C {
        (self.function)(self.first, arg)
    }
}

/// A three-argument function awaiting its first argument.
///
/// Created by [`curry3`].
pub struct Curry3<F, A, B, C> {
    function: F,
    _args: PhantomData<fn(A, B, C)>,
}

/// A three-argument function that has received its first argument.
pub struct Partial3<F, A, B, C> {
    function: F,
    first: A,
    _args: PhantomData<fn(B, C)>,
}

/// A three-argument function that has received its first two arguments.
pub struct Partial3Last<F, A, B, C> {
    function: F,
    first: A,
    second: B,
    _args: PhantomData<fn(C)>,
}

/// Wrap a three-argument function so it can be applied one argument at a time.
pub fn curry3<F, A, B, C, D>(function: F) -> Curry3<F, A, B, C>
where
    F: FnOnce(A, B, C) -> D,
{
    Curry3 {
        function,
        _args: PhantomData,
    }
}

impl<F, A, B, C, D> Call<A> for Curry3<F, A, B, C>
where
    F: FnOnce(A, B, C) -> D,
{
    type Output = Partial3<F, A, B, C>;

    fn invoke(self, arg: A) -> Self::Output {
        Partial3 {
            function: self.function,
            first: arg,
            _args: PhantomData,
        }
    }
}

impl<F, A, B, C, D> Call<B> for Partial3<F, A, B, C>
where
    F: FnOnce(A, B, C) -> D,
{
    type Output = Partial3Last<F, A, B, C>;

    fn invoke(self, arg: B) -> Self::Output {
        Partial3Last {
            function: self.function,
            first: self.first,
            second: arg,
            _args: PhantomData,
        }
    }
}

impl<F, A, B, C, D> Call<C> for Partial3Last<F, A, B, C>
where
    F: FnOnce(A, B, C) -> D,
{
    type Output = D;

    fn invoke(self, arg: C) -> D {
        (self.function)(self.first, self.second, arg)
    }
}

// Closures have no useful Debug output, so only the shape is printed.
impl<F, A, B> fmt::Debug for Curry2<F, A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curry2").finish_non_exhaustive()
    }
}

impl<F, A: fmt::Debug, B> fmt::Debug for Partial2<F, A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Partial2")
            .field("first", &self.first)
            .finish_non_exhaustive()
    }
}

impl<F, A, B, C> fmt::Debug for Curry3<F, A, B, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curry3").finish_non_exhaustive()
    }
}

impl<F, A: fmt::Debug, B, C> fmt::Debug for Partial3<F, A, B, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Partial3")
            .field("first", &self.first)
            .finish_non_exhaustive()
    }
}

impl<F, A: fmt::Debug, B: fmt::Debug, C> fmt::Debug for Partial3Last<F, A, B, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Partial3Last")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish_non_exhaustive()
    }
}
