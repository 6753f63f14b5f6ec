//! Monoid trait for types with identity elements
//!
//! A `Monoid` extends `Semigroup` by adding an identity element. This is what makes
//! [`concat`] total: folding an empty sequence yields the identity instead of failing.
//!
//! # Mathematical Properties
//!
//! For a type to be a valid Monoid, it must satisfy:
//! 1. **Associativity** (from Semigroup):
//!    ```text
//!    a.combine(b).combine(c) == a.combine(b.combine(c))
//!    ```
//! 2. **Right Identity**:
//!    ```text
//!    a.combine(M::empty()) == a
//!    ```
//! 3. **Left Identity**:
//!    ```text
//!    M::empty().combine(a) == a
//!    ```
//!
//! # Numeric Monoids
//!
//! Numbers have more than one lawful monoid (addition and multiplication), so they are
//! combined through wrapper types:
//!
//! ```
//! use calmwater::monoid::{concat, Sum};
//! use calmwater::Either;
//! use calmwater::capture::Fault;
//!
//! let total = concat(vec![
//!     Either::<Fault, _>::success(Sum(1)),
//!     Either::success(Sum(2)),
//!     Either::success(Sum(3)),
//! ]);
//! assert_eq!(total, Either::success(Sum(6)));
//! ```

use crate::Semigroup;
use std::ops::{Add, Mul};

/// A `Monoid` is a `Semigroup` with an identity element.
///
/// # Laws
///
/// ```text
/// a.combine(M::empty()) == a           (right identity)
/// M::empty().combine(a) == a           (left identity)
/// ```
///
/// # Example
///
/// ```rust
/// use calmwater::{Maybe, Monoid, Semigroup};
///
/// let v = Maybe::present(vec![1, 2, 3]);
/// let empty: Maybe<Vec<i32>> = Monoid::empty();
///
/// assert_eq!(v.clone().combine(empty.clone()), v);
/// assert_eq!(empty.combine(v.clone()), v);
/// ```
pub trait Monoid: Semigroup {
    /// The identity element for this monoid.
    fn empty() -> Self;
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Vec::new()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        String::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

macro_rules! impl_monoid_tuple {
    ($($idx:tt $T:ident),+) => {
        impl<$($T: Monoid),+> Monoid for ($($T,)+) {
            fn empty() -> Self {
                ($($T::empty(),)+)
            }
        }
    };
}

impl_monoid_tuple!(0 T1, 1 T2);
impl_monoid_tuple!(0 T1, 1 T2, 2 T3);
impl_monoid_tuple!(0 T1, 1 T2, 2 T3, 3 T4);
impl_monoid_tuple!(0 T1, 1 T2, 2 T3, 3 T4, 4 T5);
impl_monoid_tuple!(0 T1, 1 T2, 2 T3, 3 T4, 4 T5, 5 T6);

/// Monoid for numeric types under addition.
///
/// Identity: 0
///
/// ```
/// use calmwater::monoid::Sum;
/// use calmwater::{Maybe, Semigroup};
///
/// let total = Maybe::present(Sum(42)).combine(Maybe::present(Sum(28)));
/// assert_eq!(total, Maybe::present(Sum(70)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<T>(pub T);

impl<T: Add<Output = T>> Semigroup for Sum<T> {
    fn combine(self, other: Self) -> Self {
        Sum(self.0 + other.0)
    }
}

impl<T: Add<Output = T> + Default> Monoid for Sum<T> {
    fn empty() -> Self {
        Sum(T::default())
    }
}

/// Monoid for numeric types under multiplication.
///
/// Identity: 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Product<T>(pub T);

/// Helper trait for types with a multiplicative identity (1)
pub trait One {
    /// Returns the multiplicative identity element for this type
    fn one() -> Self;
}

macro_rules! impl_one {
    ($one:expr => $($t:ty),+) => {
        $(
            impl One for $t {
                fn one() -> Self {
                    $one
                }
            }
        )+
    };
}

impl_one!(1 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_one!(1.0 => f32, f64);

impl<T: Mul<Output = T>> Semigroup for Product<T> {
    fn combine(self, other: Self) -> Self {
        Product(self.0 * other.0)
    }
}

impl<T: Mul<Output = T> + One> Monoid for Product<T> {
    fn empty() -> Self {
        Product(T::one())
    }
}

/// Semigroup for ordered types under maximum.
///
/// There is no identity without a lower bound; wrap in `Maybe<Max<T>>` for a monoid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Max<T>(pub T);

impl<T: Ord> Semigroup for Max<T> {
    fn combine(self, other: Self) -> Self {
        Max(self.0.max(other.0))
    }
}

/// Semigroup for ordered types under minimum.
///
/// There is no identity without an upper bound; wrap in `Maybe<Min<T>>` for a monoid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Min<T>(pub T);

impl<T: Ord> Semigroup for Min<T> {
    fn combine(self, other: Self) -> Self {
        Min(self.0.min(other.0))
    }
}

/// Fold a sequence left-to-right with `combine`, starting from `M::empty()`.
///
/// An empty sequence yields the identity element.
///
/// # Example
///
/// ```
/// use calmwater::monoid::concat;
/// use calmwater::Maybe;
///
/// let joined = concat(vec![
///     Maybe::present("ab".to_string()),
///     Maybe::absent(),
///     Maybe::present("cd".to_string()),
/// ]);
/// assert_eq!(joined, Maybe::present("abcd".to_string()));
///
/// let nothing: Maybe<String> = concat(Vec::new());
/// assert!(nothing.is_absent());
/// ```
pub fn concat<M, I>(iter: I) -> M
where
    M: Monoid,
    I: IntoIterator<Item = M>,
{
    iter.into_iter().fold(M::empty(), |acc, x| acc.combine(x))
}
