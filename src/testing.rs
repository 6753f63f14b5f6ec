//! Testing utilities for code built on `Maybe` and `Either`
//!
//! Assertion macros that report the unexpected payload on failure, and (with the
//! `proptest` feature) `Arbitrary` impls so both containers can be generated directly.
//!
//! # Examples
//!
//! ```rust
//! use calmwater::{assert_absent, assert_failure, assert_present, assert_success};
//! use calmwater::{Either, Maybe};
//!
//! assert_present!(Maybe::present(42));
//! assert_absent!(Maybe::<i32>::absent());
//!
//! assert_success!(Either::<String, _>::success(42));
//! assert_failure!(Either::<_, i32>::failure("error"));
//! ```

/// Assert that a `Maybe` is present.
///
/// Evaluates to the payload, so it can be used inline.
///
/// # Example
///
/// ```rust
/// use calmwater::{assert_present, Maybe};
///
/// let value = assert_present!(Maybe::present(42));
/// assert_eq!(value, 42);
/// ```
#[macro_export]
macro_rules! assert_present {
    ($maybe:expr) => {
        match $maybe {
            $crate::Maybe::Present(value) => value,
            $crate::Maybe::Absent => {
                panic!("Expected Present, got Absent");
            }
        }
    };
}

/// Assert that a `Maybe` is absent.
///
/// # Example
///
/// ```rust
/// use calmwater::{assert_absent, Maybe};
///
/// assert_absent!(Maybe::<i32>::wrap(None));
/// ```
#[macro_export]
macro_rules! assert_absent {
    ($maybe:expr) => {
        match $maybe {
            $crate::Maybe::Absent => {}
            $crate::Maybe::Present(v) => {
                panic!("Expected Absent, got Present: {:?}", v);
            }
        }
    };
}

/// Assert that an `Either` succeeded.
///
/// Evaluates to the success payload.
///
/// # Example
///
/// ```rust
/// use calmwater::{assert_success, Either};
///
/// let value = assert_success!(Either::<String, _>::success(42));
/// assert_eq!(value, 42);
/// ```
#[macro_export]
macro_rules! assert_success {
    ($either:expr) => {
        match $either {
            $crate::Either::Success(value) => value,
            $crate::Either::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that an `Either` failed.
///
/// Evaluates to the failure payload.
///
/// # Example
///
/// ```rust
/// use calmwater::{assert_failure, Either};
///
/// let error = assert_failure!(Either::<_, i32>::failure("error"));
/// assert_eq!(error, "error");
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($either:expr) => {
        match $either {
            $crate::Either::Failure(error) => error,
            $crate::Either::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that an `Either` failed with a specific payload.
///
/// # Example
///
/// ```rust
/// use calmwater::capture::Fault;
/// use calmwater::{assert_failure_eq, Either};
///
/// let missing: Either<Fault, i32> = Either::success(1).bind(|_| None::<i32>);
/// assert_failure_eq!(missing, Fault::Empty);
/// ```
#[macro_export]
macro_rules! assert_failure_eq {
    ($either:expr, $expected:expr) => {
        match $either {
            $crate::Either::Failure(error) => {
                assert_eq!(error, $expected);
            }
            $crate::Either::Success(v) => {
                panic!(
                    "Expected Failure with {:?}, got Success: {:?}",
                    $expected, v
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use crate::{Either, Maybe};
#[cfg(feature = "proptest")]
use proptest::prelude::*;
#[cfg(feature = "proptest")]
use proptest::strategy::LazyJust;

#[cfg(feature = "proptest")]
impl<T> Arbitrary for Maybe<T>
where
    T: Arbitrary + 'static,
    T::Strategy: 'static,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            1 => LazyJust::new(|| Maybe::Absent),
            3 => any_with::<T>(args).prop_map(Maybe::Present),
        ]
        .boxed()
    }
}

#[cfg(feature = "proptest")]
impl<E, T> Arbitrary for Either<E, T>
where
    E: Arbitrary + 'static,
    T: Arbitrary + 'static,
    E::Strategy: 'static,
    T::Strategy: 'static,
{
    type Parameters = (E::Parameters, T::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (e_params, t_params) = args;
        prop_oneof![
            any_with::<E>(e_params).prop_map(Either::Failure),
            any_with::<T>(t_params).prop_map(Either::Success),
        ]
        .boxed()
    }
}
