//! A computation that either succeeded or failed with a reason.
//!
//! `Either<E, T>` is `Failure(E)` or `Success(T)`. `Failure` is the absorbing variant:
//! like an absent [`Maybe`], it passes through `transform`, `apply` and `bind` without
//! running any callback, but it keeps its payload so the caller learns *why* the chain
//! stopped.
//!
//! Callbacks run through [`crate::capture`]. A panic inside a callback becomes a
//! `Failure` built with `E::from(Fault::Panicked(..))`, so error types opt in to panic
//! capture by implementing `From<Fault>`. [`Fault`] itself and `String` already do.
//!
//! # Examples
//!
//! ```rust
//! use calmwater::Either;
//!
//! let parsed: Either<String, i32> = Either::unit("42")
//!     .bind(|s| s.parse::<i32>().map_err(|e| e.to_string()))
//!     .bind(|n| Some(n * 2));
//! assert_eq!(parsed, Either::success(84));
//!
//! let rejected: Either<String, i32> = Either::unit("forty-two")
//!     .bind(|s| s.parse::<i32>().map_err(|e| e.to_string()))
//!     .bind(|n| Some(n * 2));
//! assert!(rejected.is_failure());
//! ```
//!
//! A failing callback never unwinds past the container:
//!
//! ```rust
//! use calmwater::capture::Fault;
//! use calmwater::Either;
//!
//! fn divide(x: i32, y: i32) -> Option<i32> {
//!     Some(x / y)
//! }
//!
//! let zero = std::hint::black_box(0);
//! let result = Either::<Fault, _>::success(42).bind(|x| divide(x, zero));
//! assert!(result.is_failure());
//! assert!(result.unwrap_failure().is_panic());
//! ```

use std::fmt;
use std::ops::Add;

use crate::capture::{capture, Fault, Lift, Outcome};
use crate::curry::Call;
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};
use crate::{ContextError, Maybe, Monoid, Semigroup};

/// The result of a computation: `Failure(E)` or `Success(T)`.
///
/// # Example
///
/// ```rust
/// use calmwater::Either;
///
/// let ok: Either<&str, i32> = Either::success(42);
/// let failed: Either<&str, i32> = Either::failure("no value");
///
/// match failed {
///     Either::Failure(reason) => assert_eq!(reason, "no value"),
///     Either::Success(_) => unreachable!(),
/// }
/// assert!(ok.is_success());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Either<E, T> {
    /// The computation failed; absorbs every chained operation.
    Failure(E),
    /// The computation produced a value.
    Success(T),
}

impl<E, T> Either<E, T> {
    // ========== Constructors ==========

    /// Create a failed `Either`.
    #[inline]
    pub fn failure(error: E) -> Self {
        Either::Failure(error)
    }

    /// Create a successful `Either`.
    #[inline]
    pub fn success(value: T) -> Self {
        Either::Success(value)
    }

    /// Monadic unit: always `Success`, whatever the value.
    #[inline]
    pub fn unit(value: T) -> Self {
        Either::Success(value)
    }

    /// Applicative `pure`; the same as [`Either::unit`].
    #[inline]
    pub fn pure(value: T) -> Self {
        Either::Success(value)
    }

    /// Convert from a `Result`.
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Either::Success(value),
            Err(error) => Either::Failure(error),
        }
    }

    // ========== Predicates ==========

    /// Returns `true` for `Failure`.
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Either::Failure(_))
    }

    /// Returns `true` for `Success`.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Either::Success(_))
    }

    /// Alias for [`Either::is_failure`].
    #[inline]
    pub fn is_left(&self) -> bool {
        self.is_failure()
    }

    /// Alias for [`Either::is_success`].
    #[inline]
    pub fn is_right(&self) -> bool {
        self.is_success()
    }

    // ========== References ==========

    /// Convert to `Either<&E, &T>`.
    #[inline]
    pub fn as_ref(&self) -> Either<&E, &T> {
        match self {
            Either::Failure(error) => Either::Failure(error),
            Either::Success(value) => Either::Success(value),
        }
    }

    /// Iterate over the success payload, if any.
    ///
    /// ```rust
    /// use calmwater::Either;
    ///
    /// let ok: Either<&str, i32> = Either::success(42);
    /// let failed: Either<&str, i32> = Either::failure("error");
    ///
    /// assert_eq!(ok.iter().collect::<Vec<_>>(), vec![&42]);
    /// assert_eq!(failed.iter().count(), 0);
    /// ```
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.as_ref().into_success().into_iter()
    }

    // ========== Operations ==========

    /// Transform the success payload.
    ///
    /// `Failure` is returned unchanged without calling `f`. A panic inside `f` becomes
    /// `Failure(E::from(Fault::Panicked(..)))`.
    /// The result of `f` is not inspected for the empty marker; that is [`Either::bind`].
    ///
    /// ```rust
    /// use calmwater::capture::Fault;
    /// use calmwater::Either;
    ///
    /// let ok: Either<Fault, &str> = Either::success("test");
    /// assert_eq!(ok.transform(|s| s.len() + 3), Either::success(7));
    ///
    /// let failed: Either<Fault, i32> = Either::failure(Fault::Empty);
    /// assert_eq!(failed.transform(|x| x + 3), Either::failure(Fault::Empty));
    /// ```
    pub fn transform<U, F>(self, f: F) -> Either<E, U>
    where
        E: From<Fault>,
        F: FnOnce(T) -> U,
    {
        match self {
            Either::Success(value) => capture(value, move |v| Some(f(v))).into(),
            Either::Failure(error) => Either::Failure(error),
        }
    }

    /// Alias for [`Either::transform`].
    #[inline]
    pub fn map<U, F>(self, f: F) -> Either<E, U>
    where
        E: From<Fault>,
        F: FnOnce(T) -> U,
    {
        self.transform(f)
    }

    /// Transform the failure payload. `Success` passes through.
    ///
    /// ```rust
    /// use calmwater::Either;
    ///
    /// let failed: Either<&str, i32> = Either::failure("oops");
    /// assert_eq!(failed.map_failure(str::len), Either::failure(4));
    /// ```
    #[inline]
    pub fn map_failure<X, F>(self, f: F) -> Either<X, T>
    where
        F: FnOnce(E) -> X,
    {
        match self {
            Either::Failure(error) => Either::Failure(f(error)),
            Either::Success(value) => Either::Success(value),
        }
    }

    /// Apply a wrapped function to a wrapped argument.
    ///
    /// `self` is checked first: a failed function wins over a failed argument.
    ///
    /// ```rust
    /// use calmwater::curry::curry3;
    /// use calmwater::Either;
    ///
    /// let volume = Either::<String, _>::pure(curry3(|l: u32, w: u32, h: u32| l * w * h));
    /// let result = volume
    ///     .apply(Either::success(2))
    ///     .apply(Either::success(3))
    ///     .apply(Either::success(4));
    /// assert_eq!(result, Either::success(24));
    /// ```
    pub fn apply<A>(self, arg: Either<E, A>) -> Either<E, T::Output>
    where
        E: From<Fault>,
        T: Call<A>,
    {
        match self {
            Either::Success(function) => arg.transform(move |a| function.invoke(a)),
            Either::Failure(error) => Either::Failure(error),
        }
    }

    /// Sequence a dependent computation.
    ///
    /// `f` may return `Option`, `Maybe`, `Result` or `Either`:
    ///
    /// - a value becomes `Success`,
    /// - `None` or `Absent` becomes `Failure(E::from(Fault::Empty))`,
    /// - `Err(e)` or `Failure(e)` becomes `Failure(E::from(e))`,
    /// - a panic becomes `Failure(E::from(Fault::Panicked(..)))`.
    ///
    /// On `Failure`, `f` is never called.
    ///
    /// ```rust
    /// use calmwater::capture::Fault;
    /// use calmwater::Either;
    ///
    /// let missing: Either<Fault, i32> = Either::success(1).bind(|_| None::<i32>);
    /// assert_eq!(missing, Either::failure(Fault::Empty));
    /// ```
    pub fn bind<R, F>(self, f: F) -> Either<E, R::Value>
    where
        F: FnOnce(T) -> R,
        R: Lift,
        E: From<R::Error> + From<Fault>,
    {
        match self {
            Either::Success(value) => capture(value, f).into(),
            Either::Failure(error) => Either::Failure(error),
        }
    }

    /// Wrap the failure payload in a [`ContextError`] carrying `msg`.
    ///
    /// ```rust
    /// use calmwater::Either;
    ///
    /// let failed: Either<&str, i32> = Either::failure("connection refused");
    /// let err = failed.context("loading profile").unwrap_failure();
    /// assert_eq!(err.inner(), &"connection refused");
    /// assert_eq!(err.context_trail(), &["loading profile"]);
    /// ```
    pub fn context(self, msg: impl Into<String>) -> Either<ContextError<E>, T> {
        match self {
            Either::Failure(error) => {
                let msg = msg.into();
                #[cfg(feature = "tracing")]
                tracing::trace!(context = %msg, "attaching context to failure");
                Either::Failure(ContextError::new(error).context(msg))
            }
            Either::Success(value) => Either::Success(value),
        }
    }

    // ========== Extractors ==========

    /// Run exactly one of the branches, with the payload of the variant present.
    ///
    /// ```rust
    /// use calmwater::Either;
    ///
    /// let describe = |e: Either<String, i32>| {
    ///     e.fold(|err| format!("failed: {}", err), |v| format!("got {}", v))
    /// };
    /// assert_eq!(describe(Either::success(3)), "got 3");
    /// assert_eq!(describe(Either::failure("io".to_string())), "failed: io");
    /// ```
    #[inline]
    pub fn fold<R, F, S>(self, on_failure: F, on_success: S) -> R
    where
        F: FnOnce(E) -> R,
        S: FnOnce(T) -> R,
    {
        match self {
            Either::Failure(error) => on_failure(error),
            Either::Success(value) => on_success(value),
        }
    }

    /// Extract the success payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is `Failure`, with the failure payload in the message.
    #[inline]
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Either::Success(value) => value,
            Either::Failure(error) => {
                panic!("called `Either::unwrap()` on a `Failure` value: {:?}", error)
            }
        }
    }

    /// Extract the failure payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is `Success`.
    #[inline]
    pub fn unwrap_failure(self) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Either::Failure(error) => error,
            Either::Success(value) => {
                panic!("called `Either::unwrap_failure()` on a `Success` value: {:?}", value)
            }
        }
    }

    /// Extract the success payload with a custom panic message.
    ///
    /// # Panics
    ///
    /// Panics with `msg` and the failure payload if the value is `Failure`.
    #[inline]
    pub fn expect(self, msg: &str) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Either::Success(value) => value,
            Either::Failure(error) => panic!("{}: {:?}", msg, error),
        }
    }

    /// Return the success payload or a default.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Either::Success(value) => value,
            Either::Failure(_) => default,
        }
    }

    /// Return the success payload or compute one from the failure.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Either::Success(value) => value,
            Either::Failure(error) => f(error),
        }
    }

    /// The success payload, discarding any failure.
    #[inline]
    pub fn into_success(self) -> Option<T> {
        match self {
            Either::Success(value) => Some(value),
            Either::Failure(_) => None,
        }
    }

    /// The failure payload, discarding any success.
    #[inline]
    pub fn into_failure(self) -> Option<E> {
        match self {
            Either::Failure(error) => Some(error),
            Either::Success(_) => None,
        }
    }

    /// Convert to `Result`, so `?` can be used on the outcome.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Either::Success(value) => Ok(value),
            Either::Failure(error) => Err(error),
        }
    }

    /// Convert to [`Maybe`], discarding the failure reason.
    #[inline]
    pub fn into_maybe(self) -> Maybe<T> {
        match self {
            Either::Success(value) => Maybe::Present(value),
            Either::Failure(_) => Maybe::Absent,
        }
    }

    /// Fold a sequence with `combine`, starting from `Success(T::empty())`.
    ///
    /// The first failure in the sequence is the result.
    ///
    /// ```rust
    /// use calmwater::monoid::Sum;
    /// use calmwater::Either;
    ///
    /// let total = Either::<&str, _>::concat(vec![
    ///     Either::success(Sum(1)),
    ///     Either::success(Sum(2)),
    ///     Either::success(Sum(3)),
    /// ]);
    /// assert_eq!(total, Either::success(Sum(6)));
    ///
    /// let empty = Either::<&str, Sum<i32>>::concat(Vec::new());
    /// assert_eq!(empty, Either::success(Sum(0)));
    /// ```
    pub fn concat<I>(items: I) -> Self
    where
        T: Monoid,
        I: IntoIterator<Item = Self>,
    {
        crate::monoid::concat(items)
    }
}

impl<E, T> Either<E, Either<E, T>> {
    /// Remove one level of nesting.
    ///
    /// ```rust
    /// use calmwater::Either;
    ///
    /// let nested: Either<&str, Either<&str, i32>> = Either::success(Either::failure("inner"));
    /// assert_eq!(nested.flatten(), Either::failure("inner"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Either<E, T> {
        match self {
            Either::Failure(error) => Either::Failure(error),
            Either::Success(inner) => inner,
        }
    }
}

// ========== Trait Implementations ==========

impl<E, T> From<Result<T, E>> for Either<E, T> {
    fn from(result: Result<T, E>) -> Self {
        Either::from_result(result)
    }
}

impl<E, T> From<Either<E, T>> for Result<T, E> {
    fn from(either: Either<E, T>) -> Self {
        either.into_result()
    }
}

impl<E, X, T> From<Outcome<T, X>> for Either<E, T>
where
    E: From<X> + From<Fault>,
{
    fn from(outcome: Outcome<T, X>) -> Self {
        match outcome {
            Outcome::Value(value) => Either::Success(value),
            Outcome::Empty => Either::Failure(E::from(Fault::Empty)),
            Outcome::Failed(error) => Either::Failure(E::from(error)),
            Outcome::Panicked(message) => Either::Failure(E::from(Fault::Panicked(message))),
        }
    }
}

impl<E, T> Lift for Either<E, T> {
    type Value = T;
    type Error = E;

    #[inline]
    fn lift(self) -> Outcome<T, E> {
        match self {
            Either::Success(value) => Outcome::Value(value),
            Either::Failure(error) => Outcome::Failed(error),
        }
    }
}

impl<E, T: Default> Default for Either<E, T> {
    /// Returns `Either::Success(T::default())`.
    fn default() -> Self {
        Either::Success(T::default())
    }
}

impl<E, T> IntoIterator for Either<E, T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_success().into_iter()
    }
}

impl<'a, E, T> IntoIterator for &'a Either<E, T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_ref().into_success().into_iter()
    }
}

// ========== Algebra ==========

impl<E, T: Semigroup> Semigroup for Either<E, T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Either::Failure(error), _) => Either::Failure(error),
            (Either::Success(_), Either::Failure(error)) => Either::Failure(error),
            (Either::Success(a), Either::Success(b)) => Either::Success(a.combine(b)),
        }
    }
}

impl<E, T: Monoid> Monoid for Either<E, T> {
    fn empty() -> Self {
        Either::Success(T::empty())
    }
}

impl<E, T: Semigroup> Add for Either<E, T> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        self.combine(other)
    }
}

impl<E, T> TypeConstructor for Either<E, T> {
    type Inner = T;
    type WithType<B> = Either<E, B>;
}

impl<E: From<Fault>, T> Functor for Either<E, T> {
    fn transform<B, F>(self, function: F) -> Either<E, B>
    where
        F: FnOnce(T) -> B,
    {
        Either::transform(self, function)
    }
}

impl<E: From<Fault>, T> Applicative for Either<E, T> {
    fn pure<B>(value: B) -> Either<E, B> {
        Either::Success(value)
    }

    fn apply<A, B>(self, arg: Either<E, A>) -> Either<E, B>
    where
        T: Call<A, Output = B>,
    {
        Either::apply(self, arg)
    }
}

impl<E: From<Fault>, T> Monad for Either<E, T> {
    fn bind<B, F>(self, function: F) -> Either<E, B>
    where
        F: FnOnce(T) -> Either<E, B>,
    {
        match self {
            Either::Success(value) => match capture(value, function) {
                Outcome::Value(value) => Either::Success(value),
                Outcome::Failed(error) => Either::Failure(error),
                Outcome::Empty => Either::Failure(E::from(Fault::Empty)),
                Outcome::Panicked(message) => Either::Failure(E::from(Fault::Panicked(message))),
            },
            Either::Failure(error) => Either::Failure(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curry::curry2;
    use crate::monoid::Sum;
    use std::cell::Cell;

    fn divide(x: i32, y: i32) -> Option<i32> {
        Some(x / y)
    }

    #[test]
    fn test_combine_left_failure_wins() {
        let a: Either<i32, Sum<i32>> = Either::failure(2);
        let b: Either<i32, Sum<i32>> = Either::success(Sum(3));
        let combined = a + b;
        assert!(combined.is_failure());
        assert!(!combined.is_success());
        assert_eq!(combined.unwrap_failure(), 2);

        let a: Either<i32, Sum<i32>> = Either::success(Sum(2));
        let b: Either<i32, Sum<i32>> = Either::failure(3);
        assert_eq!(a + b, Either::failure(3));

        let a: Either<i32, Sum<i32>> = Either::failure(2);
        let b: Either<i32, Sum<i32>> = Either::failure(3);
        assert_eq!(a + b, Either::failure(2));
        assert_eq!(b + a, Either::failure(3));
    }

    #[test]
    fn test_combine_successes() {
        let a: Either<i32, Sum<i32>> = Either::success(Sum(2));
        let b: Either<i32, Sum<i32>> = Either::success(Sum(3));
        let combined = a + b;
        assert!(combined.is_success());
        assert_eq!(combined.unwrap(), Sum(5));
    }

    #[test]
    fn test_monoid_identity_is_success_empty() {
        let id: Either<&str, Vec<i32>> = Either::empty();
        assert_eq!(id, Either::success(Vec::new()));
        assert_eq!(Either::success(vec![1]).combine(id.clone()), Either::success(vec![1]));
        assert_eq!(id.combine(Either::failure("x")), Either::failure("x"));
    }

    #[test]
    fn test_transform() {
        let failed: Either<Fault, i32> = Either::failure(Fault::Empty);
        assert!(failed.is_left());
        let v = failed.map(|x| x + 3);
        assert!(v.is_left());
        assert!(!v.is_right());
        assert_eq!(v, Either::failure(Fault::Empty));

        let v = Either::<Fault, _>::success(2).map(|x| x + 3);
        assert!(v.is_right());
        assert!(!v.is_left());
        assert_eq!(v.unwrap(), 5);

        let v = Either::<Fault, _>::success("test").transform(|s| s.len() + 3);
        assert_eq!(v.unwrap(), 7);
    }

    #[test]
    fn test_transform_does_not_call_on_failure() {
        let calls = Cell::new(0);
        let failed: Either<String, i32> = Either::failure("err".to_string());
        let result = failed.transform(|x| {
            calls.set(calls.get() + 1);
            x
        });
        assert_eq!(result, Either::failure("err".to_string()));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_transform_captures_panic() {
        let zero = std::hint::black_box(0);
        let result = Either::<Fault, _>::success(42).transform(|x| x / zero);
        let fault = result.unwrap_failure();
        assert!(fault.is_panic());
        assert!(fault.panic_message().is_some_and(|m| m.contains("divide by zero")));
    }

    #[test]
    fn test_applicative_matches_transform() {
        let x: Either<Fault, i32> = Either::unit(42);
        let f = |x: i32| x * 1;
        let m = Either::pure(f).apply(x.clone());
        assert_eq!(m, x.transform(f));
        let res = m.fold(|_| panic!("should be a success"), |v| v);
        assert_eq!(res, 42);
    }

    #[test]
    fn test_apply_short_circuits_left_first() {
        let failed_fn: Either<String, fn(i32) -> i32> = Either::failure("fn".to_string());
        let failed_arg: Either<String, i32> = Either::failure("arg".to_string());
        assert_eq!(failed_fn.apply(failed_arg.clone()), Either::failure("fn".to_string()));

        let inc: Either<String, _> = Either::pure(|x: i32| x + 1);
        assert_eq!(inc.apply(failed_arg), Either::failure("arg".to_string()));
    }

    #[test]
    fn test_apply_curried() {
        let add = Either::<Fault, _>::pure(curry2(|a: i32, b: i32| a + b));
        let add_three = add.apply(Either::success(3));
        assert!(add_three.is_success());
        assert_eq!(add_three.apply(Either::success(4)), Either::success(7));
    }

    #[test]
    fn test_bind_chain() {
        let failed: Either<String, String> = Either::failure("error".to_string());
        let v = failed
            .bind(|x| Some(x + " df"))
            .bind(|y| Some(y + "  sc"));
        assert!(v.is_left());
        assert_eq!(v.unwrap_failure(), "error");

        let v = Either::<String, _>::unit("error".to_string())
            .bind(|x| Some(x + " df"))
            .bind(|y| Some(y + "  sc"));
        assert!(v.is_right());
        assert_eq!(v.unwrap(), "error df  sc");
    }

    #[test]
    fn test_bind_captures_panic() {
        let zero = std::hint::black_box(0);
        let v = Either::<String, _>::unit(42)
            .bind(|x| divide(x, zero))
            .bind(|y| Some(y + 2));
        assert!(v.is_left());
        assert_eq!(v.unwrap_failure(), "callback panicked: attempt to divide by zero");
    }

    #[test]
    fn test_bind_classifies_results() {
        let empty: Either<Fault, i32> = Either::success(1).bind(|_| Maybe::<i32>::absent());
        assert_eq!(empty, Either::failure(Fault::Empty));

        let err: Either<String, i32> = Either::success(1).bind(|_| Err::<i32, _>("bad".to_string()));
        assert_eq!(err, Either::failure("bad".to_string()));

        let nested: Either<String, i32> =
            Either::success(1).bind(|x| Either::<String, i32>::success(x + 1));
        assert_eq!(nested, Either::success(2));
    }

    fn halve_even<E: From<Fault>>(start: Either<E, i32>, odd: fn(i32) -> E) -> Either<E, i32> {
        Monad::bind(start, move |x| {
            if x == 0 {
                panic!("nothing to halve");
            }
            if x % 2 == 0 {
                Either::success(x / 2)
            } else {
                Either::failure(odd(x))
            }
        })
    }

    #[test]
    fn test_monad_bind_with_generic_failure() {
        let odd = |x: i32| format!("odd: {}", x);
        assert_eq!(halve_even(Either::success(8), odd), Either::success(4));
        assert_eq!(
            halve_even(Either::success(7), odd),
            Either::failure("odd: 7".to_string())
        );
        assert_eq!(
            halve_even(Either::success(0), odd),
            Either::failure("callback panicked: nothing to halve".to_string())
        );
        assert_eq!(
            halve_even(Either::failure("upstream".to_string()), odd),
            Either::failure("upstream".to_string())
        );

        let faulted = halve_even::<Fault>(Either::success(0), |_| Fault::Empty);
        assert_eq!(faulted, Either::failure(Fault::Panicked("nothing to halve".to_string())));
    }

    #[test]
    fn test_transform_keeps_none_payload() {
        let mapped = Either::<Fault, _>::success(1).transform(|_| None::<i32>);
        assert_eq!(mapped, Either::success(None));

        let collapsed = mapped.bind(|inner| inner);
        assert_eq!(collapsed, Either::failure(Fault::Empty));
    }

    #[test]
    fn test_bind_does_not_call_on_failure() {
        let calls = Cell::new(0);
        let failed: Either<Fault, i32> = Either::failure(Fault::Empty);
        let result = failed.bind(|x| {
            calls.set(calls.get() + 1);
            Some(x)
        });
        assert!(result.is_failure());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_concat() {
        let total = Either::<Fault, _>::concat(vec![
            Either::success(Sum(1)),
            Either::success(Sum(2)),
            Either::success(Sum(3)),
        ]);
        assert_eq!(total, Either::success(Sum(6)));

        let stopped = Either::concat(vec![
            Either::success(Sum(1)),
            Either::failure("first"),
            Either::failure("second"),
        ]);
        assert_eq!(stopped, Either::failure("first"));
    }

    #[test]
    fn test_conversions() {
        let ok: Either<&str, i32> = Ok::<i32, &str>(1).into();
        assert_eq!(ok, Either::success(1));
        let result: Result<i32, &str> = Either::<&str, i32>::failure("no").into();
        assert_eq!(result, Err("no"));

        assert_eq!(Either::<&str, i32>::success(1).into_maybe(), Maybe::present(1));
        assert_eq!(Either::<&str, i32>::failure("x").into_maybe(), Maybe::absent());
        assert_eq!(Either::<&str, i32>::success(1).into_success(), Some(1));
        assert_eq!(Either::<&str, i32>::failure("x").into_failure(), Some("x"));
        assert_eq!(Either::<&str, i32>::success(1).into_failure(), None);
    }

    #[test]
    fn test_extractors() {
        assert_eq!(Either::<&str, i32>::failure("x").unwrap_or(0), 0);
        assert_eq!(Either::<&str, i32>::failure("abc").unwrap_or_else(|e| e.len() as i32), 3);
        assert_eq!(Either::<&str, i32>::success(5).expect("present"), 5);
        assert_eq!(Either::<&str, i32>::success(5).as_ref(), Either::success(&5));
    }

    #[test]
    #[should_panic(expected = "called `Either::unwrap()` on a `Failure` value: \"boom\"")]
    fn test_unwrap_panics_on_failure() {
        Either::<&str, i32>::failure("boom").unwrap();
    }

    #[test]
    #[should_panic(expected = "called `Either::unwrap_failure()` on a `Success` value: 1")]
    fn test_unwrap_failure_panics_on_success() {
        Either::<&str, i32>::success(1).unwrap_failure();
    }

    #[test]
    fn test_context() {
        let failed: Either<&str, i32> = Either::failure("timeout");
        let err = failed.context("fetching user").unwrap_failure();
        assert_eq!(err.inner(), &"timeout");
        assert_eq!(err.context_trail(), &["fetching user"]);

        let ok: Either<&str, i32> = Either::success(1);
        assert_eq!(ok.context("unused"), Either::success(1));
    }

    #[test]
    fn test_flatten_and_iter() {
        let nested: Either<&str, Either<&str, i32>> = Either::success(Either::success(1));
        assert_eq!(nested.flatten(), Either::success(1));
        let outer: Either<&str, Either<&str, i32>> = Either::failure("outer");
        assert_eq!(outer.flatten(), Either::failure("outer"));

        let ok: Either<&str, i32> = Either::success(3);
        let mut seen = Vec::new();
        for v in &ok {
            seen.push(*v);
        }
        assert_eq!(seen, vec![3]);
        assert_eq!(ok.into_iter().count(), 1);
    }

    #[test]
    fn test_default() {
        let d: Either<&str, i32> = Either::default();
        assert_eq!(d, Either::success(0));
    }

    #[cfg(feature = "tracing")]
    mod tracing_tests {
        use super::*;
        use tracing_test::traced_test;

        #[test]
        #[traced_test]
        fn context_is_logged() {
            let failed: Either<&str, i32> = Either::failure("down");
            let _ = failed.context("contacting billing");
            assert!(logs_contain("attaching context to failure"));
            assert!(logs_contain("contacting billing"));
        }
    }

    mod proptests {
        use super::*;
        use crate::laws;
        use proptest::prelude::*;

        fn either_i32() -> impl Strategy<Value = Either<Fault, i32>> {
            prop_oneof![
                any::<i32>().prop_map(Either::success),
                any::<String>().prop_map(|m| Either::failure(Fault::Panicked(m))),
            ]
        }

        fn either_vec() -> impl Strategy<Value = Either<String, Vec<u8>>> {
            prop_oneof![
                any::<Vec<u8>>().prop_map(Either::success),
                any::<String>().prop_map(Either::failure),
            ]
        }

        proptest! {
            #[test]
            fn prop_functor_identity(e in either_i32()) {
                prop_assert!(laws::functor_identity(e));
            }

            #[test]
            fn prop_functor_composition(e in either_i32()) {
                prop_assert!(laws::functor_composition(
                    e,
                    |x: i32| x.wrapping_add(1),
                    |x: i32| x.wrapping_mul(2),
                ));
            }

            #[test]
            fn prop_associativity(a in either_vec(), b in either_vec(), c in either_vec()) {
                prop_assert!(laws::semigroup_associativity(a, b, c));
            }

            #[test]
            fn prop_monoid_identity(e in either_vec()) {
                prop_assert!(laws::monoid_left_identity(e.clone()));
                prop_assert!(laws::monoid_right_identity(e));
            }

            #[test]
            fn prop_monad_left_identity(v: i32) {
                let f = |x: i32| -> Either<Fault, i32> {
                    if x % 2 == 0 { Either::success(x / 2) } else { Either::failure(Fault::Empty) }
                };
                prop_assert!(laws::monad_left_identity::<Either<Fault, ()>, _, _, _>(v, f));
            }

            #[test]
            fn prop_monad_right_identity(e in either_i32()) {
                prop_assert!(laws::monad_right_identity(e));
            }

            #[test]
            fn prop_result_roundtrip(x: i32) {
                let either: Either<(), i32> = Either::success(x);
                let result: Result<i32, ()> = either.into();
                let back: Either<(), i32> = result.into();
                prop_assert_eq!(back, Either::success(x));
            }
        }
    }
}
