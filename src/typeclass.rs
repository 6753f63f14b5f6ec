//! Functor, Applicative and Monad as explicit traits
//!
//! Rust has no higher-kinded types, so the capabilities are expressed over a
//! [`TypeConstructor`] that knows its payload type (`Inner`) and how to rebuild
//! itself around another payload (`WithType<B>`). Each container implements the
//! whole trait set explicitly; the laws are checked by the tests in [`crate::laws`].
//!
//! # Example
//!
//! ```rust
//! use calmwater::typeclass::{Functor, Monad};
//! use calmwater::Maybe;
//!
//! fn double_all<F>(container: F) -> F::WithType<i32>
//! where
//!     F: Functor<Inner = i32>,
//! {
//!     container.transform(|x| x * 2)
//! }
//!
//! assert_eq!(double_all(Maybe::present(21)), Maybe::present(42));
//! assert_eq!(double_all(Maybe::<i32>::absent()), Maybe::absent());
//!
//! let chained = Monad::bind(Maybe::present(4), |x| Maybe::present(x + 1));
//! assert_eq!(chained, Maybe::present(5));
//! ```

use crate::curry::Call;

/// A type constructor applied to some payload type.
///
/// `Maybe<i32>` has `Inner = i32` and `WithType<String> = Maybe<String>`.
pub trait TypeConstructor {
    /// The payload type this constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

/// Containers whose payload can be transformed.
///
/// # Laws
///
/// ```text
/// fa.transform(|x| x) == fa                              (identity)
/// fa.transform(f).transform(g) == fa.transform(|x| g(f(x)))  (composition)
/// ```
pub trait Functor: TypeConstructor {
    /// Apply `function` to the payload, if there is one.
    fn transform<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;
}

/// Containers that can apply a wrapped function to a wrapped argument.
///
/// The wrapped value only needs to be [`Call`]able with the argument, which lets
/// curried functions (see [`crate::curry`]) be applied one argument at a time.
pub trait Applicative: Functor {
    /// Lift a value into the non-absorbing variant.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Apply the wrapped function to the wrapped argument.
    ///
    /// Short-circuits if either side is in its absorbing variant, checking `self` first.
    fn apply<A, B>(self, arg: Self::WithType<A>) -> Self::WithType<B>
    where
        Self::Inner: Call<A, Output = B>;
}

/// Containers that can sequence dependent computations.
///
/// # Laws
///
/// ```text
/// M::pure(a).bind(f) == f(a)                          (left identity)
/// m.bind(M::pure) == m                                (right identity)
/// m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))       (associativity)
/// ```
pub trait Monad: Applicative {
    /// Run `function` on the payload and flatten the result.
    ///
    /// The absorbing variant short-circuits without calling `function`.
    fn bind<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::Fault;
    use crate::curry::curry2;
    use crate::{Either, Maybe};

    fn lift_generic<M>(value: i32) -> M::WithType<i32>
    where
        M: Applicative,
    {
        M::pure(value)
    }

    #[test]
    fn maybe_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Maybe<i32>>();
    }

    #[test]
    fn either_with_type_keeps_error() {
        fn assert_with<T: TypeConstructor<WithType<String> = Either<Fault, String>>>() {}
        assert_with::<Either<Fault, i32>>();
    }

    #[test]
    fn pure_through_trait() {
        assert_eq!(lift_generic::<Maybe<()>>(7), Maybe::present(7));
        assert_eq!(lift_generic::<Either<Fault, ()>>(7), Either::success(7));
    }

    #[test]
    fn apply_through_trait() {
        let add = Maybe::present(curry2(|a: i32, b: i32| a + b));
        let partial = Applicative::apply(add, Maybe::present(3));
        assert_eq!(Applicative::apply(partial, Maybe::present(4)), Maybe::present(7));
    }

    #[test]
    fn bind_through_trait_short_circuits() {
        let absent: Maybe<i32> = Maybe::absent();
        let result = Monad::bind(absent, |x| Maybe::present(x + 1));
        assert_eq!(result, Maybe::absent());

        let failed: Either<Fault, i32> = Either::failure(Fault::Empty);
        let result = Monad::bind(failed, |x| Either::success(x + 1));
        assert_eq!(result, Either::failure(Fault::Empty));
    }
}
