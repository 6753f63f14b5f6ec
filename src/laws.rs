//! Reusable law checks for the algebraic traits
//!
//! Each function evaluates one law for the given inputs and returns whether it held.
//! They are meant to be driven by `proptest`:
//!
//! ```rust
//! use calmwater::{laws, Maybe};
//!
//! assert!(laws::functor_identity(Maybe::present(3)));
//! assert!(laws::semigroup_associativity(
//!     Maybe::present(vec![1]),
//!     Maybe::absent(),
//!     Maybe::present(vec![2]),
//! ));
//! ```

use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};
use crate::{Monoid, Semigroup};

/// `a.combine(b).combine(c) == a.combine(b.combine(c))`
pub fn semigroup_associativity<S>(a: S, b: S, c: S) -> bool
where
    S: Semigroup + Clone + PartialEq,
{
    let left = a.clone().combine(b.clone()).combine(c.clone());
    let right = a.combine(b.combine(c));
    left == right
}

/// `M::empty().combine(a) == a`
pub fn monoid_left_identity<M>(a: M) -> bool
where
    M: Monoid + Clone + PartialEq,
{
    M::empty().combine(a.clone()) == a
}

/// `a.combine(M::empty()) == a`
pub fn monoid_right_identity<M>(a: M) -> bool
where
    M: Monoid + Clone + PartialEq,
{
    a.clone().combine(M::empty()) == a
}

/// `fa.transform(|x| x) == fa`
pub fn functor_identity<F>(fa: F) -> bool
where
    F: Functor + Clone,
    F::WithType<F::Inner>: PartialEq<F>,
{
    fa.clone().transform(|x| x) == fa
}

/// `fa.transform(f).transform(g) == fa.transform(|x| g(f(x)))`
pub fn functor_composition<F, B, C, G, H>(fa: F, f: G, g: H) -> bool
where
    F: Functor + Clone,
    F::WithType<B>: Functor<Inner = B>,
    <F::WithType<B> as TypeConstructor>::WithType<C>: PartialEq<F::WithType<C>>,
    G: Fn(F::Inner) -> B,
    H: Fn(B) -> C,
{
    let stepwise = fa.clone().transform(&f).transform(&g);
    let composed = fa.transform(|x| g(f(x)));
    stepwise == composed
}

/// `M::pure(a).bind(f) == f(a)`
///
/// `M` picks the container; its own payload type is irrelevant, so `Maybe<()>` or
/// `Either<Fault, ()>` work as selectors.
pub fn monad_left_identity<M, A, B, F>(value: A, f: F) -> bool
where
    M: Applicative,
    M::WithType<A>: Monad<Inner = A, WithType<B> = M::WithType<B>>,
    M::WithType<B>: PartialEq,
    A: Clone,
    F: Fn(A) -> M::WithType<B>,
{
    let lifted = M::pure(value.clone()).bind::<B, _>(&f);
    lifted == f(value)
}

/// `m.bind(M::pure) == m`
pub fn monad_right_identity<M>(m: M) -> bool
where
    M: Monad + Clone,
    M::WithType<M::Inner>: PartialEq<M>,
{
    m.clone().bind::<M::Inner, _>(|x| M::pure(x)) == m
}
