//! An optional value that composes without null checks.
//!
//! `Maybe<T>` is either `Absent` or `Present(T)`. `Absent` is the absorbing variant:
//! once a chain reaches it, every later `transform`, `apply` and `bind` passes it
//! along without running any callback.
//!
//! The empty marker is `Option::None`. Lifting with [`Maybe::wrap`] (or `From<Option<T>>`)
//! maps it to `Absent`, and a `bind` callback that returns `None` ends the chain the same
//! way. Callbacks that panic also produce `Absent`; see [`crate::capture`].
//!
//! # Examples
//!
//! ```rust
//! use calmwater::Maybe;
//!
//! let result = Maybe::unit(42)
//!     .bind(|x| Some(x + 2))
//!     .bind(|x| Some(x * 2));
//! assert_eq!(result.unwrap(), 88);
//!
//! let stopped = Maybe::unit(42)
//!     .bind(|x| Some(x + 2))
//!     .bind(|_| None::<i32>);
//! assert!(stopped.is_absent());
//! ```
//!
//! Combining follows the payload's [`Semigroup`]; `Absent` is the identity:
//!
//! ```rust
//! use calmwater::monoid::Sum;
//! use calmwater::Maybe;
//!
//! let total = Maybe::unit(Sum(42)) + Maybe::unit(Sum(28)) + Maybe::wrap(None);
//! assert_eq!(total, Maybe::present(Sum(70)));
//! ```

use std::ops::Add;

use crate::capture::{capture, Lift, Outcome};
use crate::curry::Call;
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};
use crate::{Either, Monoid, Semigroup, Truthy};

/// An optional value: `Absent` or `Present(T)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Maybe<T> {
    /// No value. Absorbs every chained operation.
    Absent,
    /// Exactly one value.
    Present(T),
}

impl<T> Maybe<T> {
    // ========== Constructors ==========

    /// Create an empty `Maybe`.
    #[inline]
    pub fn absent() -> Self {
        Maybe::Absent
    }

    /// Wrap a value.
    #[inline]
    pub fn present(value: T) -> Self {
        Maybe::Present(value)
    }

    /// Lift an `Option`, mapping the empty marker `None` to `Absent`.
    ///
    /// ```rust
    /// use calmwater::Maybe;
    ///
    /// assert_eq!(Maybe::wrap(Some(3)), Maybe::present(3));
    /// assert_eq!(Maybe::wrap(None::<i32>), Maybe::absent());
    /// ```
    #[inline]
    pub fn wrap(value: Option<T>) -> Self {
        match value {
            Some(value) => Maybe::Present(value),
            None => Maybe::Absent,
        }
    }

    /// Monadic unit. A bare `T` can never be the empty marker, so this is always `Present`.
    #[inline]
    pub fn unit(value: T) -> Self {
        Maybe::Present(value)
    }

    /// Applicative `pure`; the same as [`Maybe::unit`].
    ///
    /// Typically used to lift a function for [`Maybe::apply`].
    #[inline]
    pub fn pure(value: T) -> Self {
        Maybe::Present(value)
    }

    // ========== Predicates ==========

    /// Returns `true` for `Present`.
    #[inline]
    pub fn is_present(&self) -> bool {
        matches!(self, Maybe::Present(_))
    }

    /// Returns `true` for `Absent`.
    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Maybe::Absent)
    }

    /// Boolean interpretation: present with a truthy payload.
    ///
    /// ```rust
    /// use calmwater::Maybe;
    ///
    /// assert!(Maybe::present("text").is_truthy());
    /// assert!(!Maybe::present("").is_truthy());
    /// assert!(!Maybe::<&str>::absent().is_truthy());
    /// ```
    #[inline]
    pub fn is_truthy(&self) -> bool
    where
        T: Truthy,
    {
        match self {
            Maybe::Present(value) => value.is_truthy(),
            Maybe::Absent => false,
        }
    }

    // ========== References ==========

    /// Convert to `Maybe<&T>`.
    #[inline]
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Present(value) => Maybe::Present(value),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Iterate over the payload, if any.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.as_ref().into_option().into_iter()
    }

    // ========== Operations ==========

    /// Transform the payload.
    ///
    /// `Absent` is returned without calling `f`. If `f` panics, the panic is captured
    /// and the result is `Absent`.
    ///
    /// The result of `f` is wrapped as is, so `|_| None` gives `Present(None)`. Use
    /// [`Maybe::bind`] when the callback may return the empty marker.
    ///
    /// ```rust
    /// use calmwater::Maybe;
    ///
    /// assert_eq!(Maybe::present("abc").transform(str::len), Maybe::present(3));
    ///
    /// let boom = Maybe::present(1).transform(|_| -> i32 { panic!("boom") });
    /// assert!(boom.is_absent());
    /// ```
    pub fn transform<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Present(value) => capture(value, move |v| Some(f(v))).into(),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Alias for [`Maybe::transform`].
    #[inline]
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        self.transform(f)
    }

    /// Apply a wrapped function to a wrapped argument.
    ///
    /// A [`curry2`](crate::curry::curry2) or [`curry3`](crate::curry::curry3) function
    /// given fewer arguments than it needs yields a `Present` partial application.
    ///
    /// ```rust
    /// use calmwater::curry::curry2;
    /// use calmwater::Maybe;
    ///
    /// let add = Maybe::pure(curry2(|a: i32, b: i32| a + b));
    /// assert_eq!(add.apply(Maybe::present(3)).apply(Maybe::present(4)), Maybe::present(7));
    ///
    /// let inc = Maybe::pure(|x: i32| x + 1);
    /// assert_eq!(inc.apply(Maybe::absent()), Maybe::absent());
    /// ```
    pub fn apply<A>(self, arg: Maybe<A>) -> Maybe<T::Output>
    where
        T: Call<A>,
    {
        match self {
            Maybe::Present(function) => arg.transform(move |a| function.invoke(a)),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Sequence a dependent computation.
    ///
    /// `f` may return `Option`, `Maybe`, `Result` or `Either`. The empty marker, a domain
    /// failure, or a panic inside `f` all yield `Absent`. On `Absent`, `f` is never called.
    ///
    /// ```rust
    /// use calmwater::Maybe;
    ///
    /// let parsed = Maybe::present("17").bind(|s| s.parse::<i32>());
    /// assert_eq!(parsed, Maybe::present(17));
    ///
    /// let invalid = Maybe::present("x").bind(|s| s.parse::<i32>());
    /// assert!(invalid.is_absent());
    /// ```
    pub fn bind<R, F>(self, f: F) -> Maybe<R::Value>
    where
        F: FnOnce(T) -> R,
        R: Lift,
    {
        match self {
            Maybe::Present(value) => capture(value, f).into(),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Keep the payload only if it satisfies `predicate`.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Maybe::Present(value) => {
                if predicate(&value) {
                    Maybe::Present(value)
                } else {
                    Maybe::Absent
                }
            }
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Return `self` if present, otherwise `other`.
    #[inline]
    pub fn or(self, other: Maybe<T>) -> Maybe<T> {
        match self {
            Maybe::Present(value) => Maybe::Present(value),
            Maybe::Absent => other,
        }
    }

    // ========== Extractors ==========

    /// Run exactly one of the branches: `on_absent` or `on_present` with the payload.
    ///
    /// ```rust
    /// use calmwater::Maybe;
    ///
    /// let describe = |m: Maybe<i32>| m.fold(|| "nothing".to_string(), |v| format!("just {}", v));
    /// assert_eq!(describe(Maybe::present(4)), "just 4");
    /// assert_eq!(describe(Maybe::absent()), "nothing");
    /// ```
    #[inline]
    pub fn fold<R, N, J>(self, on_absent: N, on_present: J) -> R
    where
        N: FnOnce() -> R,
        J: FnOnce(T) -> R,
    {
        match self {
            Maybe::Present(value) => on_present(value),
            Maybe::Absent => on_absent(),
        }
    }

    /// Extract the payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is `Absent`.
    #[inline]
    pub fn unwrap(self) -> T {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => panic!("called `Maybe::unwrap()` on an `Absent` value"),
        }
    }

    /// Extract the payload with a custom panic message.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if the value is `Absent`.
    #[inline]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => panic!("{}", msg),
        }
    }

    /// Return the payload or a default.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => default,
        }
    }

    /// Return the payload or compute one.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => f(),
        }
    }

    /// Convert to `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Present(value) => Some(value),
            Maybe::Absent => None,
        }
    }

    /// Convert to `Either`, using `error` for `Absent`.
    ///
    /// ```rust
    /// use calmwater::{Either, Maybe};
    ///
    /// assert_eq!(Maybe::present(1).ok_or("missing"), Either::success(1));
    /// assert_eq!(Maybe::<i32>::absent().ok_or("missing"), Either::failure("missing"));
    /// ```
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Either<E, T> {
        match self {
            Maybe::Present(value) => Either::Success(value),
            Maybe::Absent => Either::Failure(error),
        }
    }

    /// Fold a sequence with `combine`, starting from `Absent`.
    ///
    /// ```rust
    /// use calmwater::Maybe;
    ///
    /// let all = Maybe::concat(vec![Maybe::present(vec![1]), Maybe::absent(), Maybe::present(vec![2])]);
    /// assert_eq!(all, Maybe::present(vec![1, 2]));
    /// assert_eq!(Maybe::<Vec<i32>>::concat(Vec::new()), Maybe::absent());
    /// ```
    pub fn concat<I>(items: I) -> Self
    where
        T: Semigroup,
        I: IntoIterator<Item = Self>,
    {
        crate::monoid::concat(items)
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Remove one level of nesting.
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        match self {
            Maybe::Present(inner) => inner,
            Maybe::Absent => Maybe::Absent,
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::Absent
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Maybe::wrap(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

// Every non-value outcome collapses to `Absent`; the reason is discarded.
impl<T, E> From<Outcome<T, E>> for Maybe<T> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Value(value) => Maybe::Present(value),
            Outcome::Empty | Outcome::Failed(_) | Outcome::Panicked(_) => Maybe::Absent,
        }
    }
}

impl<T> Lift for Maybe<T> {
    type Value = T;
    type Error = crate::capture::Fault;

    #[inline]
    fn lift(self) -> Outcome<T, Self::Error> {
        match self {
            Maybe::Present(value) => Outcome::Value(value),
            Maybe::Absent => Outcome::Empty,
        }
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<T: Truthy> Truthy for Maybe<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        Maybe::is_truthy(self)
    }
}

// ========== Algebra ==========

impl<T: Semigroup> Semigroup for Maybe<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Maybe::Present(a), Maybe::Present(b)) => Maybe::Present(a.combine(b)),
            (Maybe::Present(a), Maybe::Absent) => Maybe::Present(a),
            (Maybe::Absent, other) => other,
        }
    }
}

impl<T: Semigroup> Monoid for Maybe<T> {
    fn empty() -> Self {
        Maybe::Absent
    }
}

impl<T: Semigroup> Add for Maybe<T> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        self.combine(other)
    }
}

impl<T> TypeConstructor for Maybe<T> {
    type Inner = T;
    type WithType<B> = Maybe<B>;
}

impl<T> Functor for Maybe<T> {
    fn transform<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        Maybe::transform(self, function)
    }
}

impl<T> Applicative for Maybe<T> {
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Present(value)
    }

    fn apply<A, B>(self, arg: Maybe<A>) -> Maybe<B>
    where
        T: Call<A, Output = B>,
    {
        Maybe::apply(self, arg)
    }
}

impl<T> Monad for Maybe<T> {
    fn bind<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        Maybe::bind(self, function)
    }
}
