//! Running user callbacks without letting them escape the container
//!
//! Every `transform` and `bind` on [`Maybe`](crate::Maybe) and [`Either`](crate::Either)
//! runs its callback through [`capture`]. The helper decides, in one place for both
//! containers, what the callback's result means:
//!
//! - a panic is caught and reified as [`Outcome::Panicked`]; it never unwinds past the
//!   container,
//! - the empty marker (`None`, or an absent `Maybe`) becomes [`Outcome::Empty`],
//! - a domain failure (`Err`, or a failed `Either`) becomes [`Outcome::Failed`],
//! - anything else is [`Outcome::Value`].
//!
//! The containers then fold the outcome into their own variants. `Maybe` collapses every
//! non-value outcome to `Absent`; `Either` keeps the reason as its failure payload,
//! converting captured panics and empty markers through [`From<Fault>`](Fault).
//!
//! # Example
//!
//! ```rust
//! use calmwater::capture::{capture, Fault, Outcome};
//!
//! let ok: Outcome<i32, Fault> = capture(20, |x| Some(x + 1));
//! assert_eq!(ok, Outcome::Value(21));
//!
//! let empty: Outcome<i32, Fault> = capture(20, |_| None);
//! assert_eq!(empty, Outcome::Empty);
//!
//! let failed = capture(20, |_| Err::<i32, _>("bad input".to_string()));
//! assert_eq!(failed, Outcome::Failed("bad input".to_string()));
//! ```

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

/// Why a callback produced no value, in terms the caller's error type can absorb.
///
/// `Either<E, T>` requires `E: From<Fault>` for `transform`, `apply` and `bind`, so a
/// domain error type opts in to panic capture by providing that conversion.
///
/// # Example
///
/// ```rust
/// use calmwater::capture::Fault;
/// use calmwater::Either;
///
/// #[derive(Debug, PartialEq)]
/// enum AppError {
///     Callback(Fault),
///     NotFound,
/// }
///
/// impl From<Fault> for AppError {
///     fn from(fault: Fault) -> Self {
///         AppError::Callback(fault)
///     }
/// }
///
/// let looked_up: Either<AppError, i32> = Either::success(1).bind(|_| None::<i32>);
/// assert_eq!(looked_up, Either::failure(AppError::Callback(Fault::Empty)));
///
/// let missing: Either<AppError, i32> = Either::failure(AppError::NotFound);
/// assert_eq!(missing.map(|x| x + 1), Either::failure(AppError::NotFound));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Fault {
    /// The callback panicked; carries the panic message.
    Panicked(String),
    /// The callback returned the empty marker.
    Empty,
}

impl Fault {
    /// Returns `true` if this fault is a captured panic.
    pub fn is_panic(&self) -> bool {
        matches!(self, Fault::Panicked(_))
    }

    /// The captured panic message, if any.
    pub fn panic_message(&self) -> Option<&str> {
        match self {
            Fault::Panicked(message) => Some(message),
            Fault::Empty => None,
        }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::Panicked(message) => write!(f, "callback panicked: {}", message),
            Fault::Empty => write!(f, "callback produced no value"),
        }
    }
}

impl StdError for Fault {}

// Lets plain message strings serve as an `Either` failure payload.
impl From<Fault> for String {
    fn from(fault: Fault) -> Self {
        fault.to_string()
    }
}

/// What running a callback under [`capture`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T, E> {
    /// A value to wrap in the non-absorbing variant.
    Value(T),
    /// The empty marker.
    Empty,
    /// A domain failure returned by the callback.
    Failed(E),
    /// The callback panicked; carries the panic message.
    Panicked(String),
}

impl<T, E> Outcome<T, E> {
    /// Returns `true` for [`Outcome::Value`].
    pub fn is_value(&self) -> bool {
        matches!(self, Outcome::Value(_))
    }

    /// Collapse into `Result`, routing the empty marker and panics through [`Fault`].
    ///
    /// ```rust
    /// use calmwater::capture::{Fault, Outcome};
    ///
    /// let empty: Outcome<i32, Fault> = Outcome::Empty;
    /// assert_eq!(empty.into_result::<Fault>(), Err(Fault::Empty));
    /// ```
    pub fn into_result<X>(self) -> Result<T, X>
    where
        X: From<E> + From<Fault>,
    {
        match self {
            Outcome::Value(value) => Ok(value),
            Outcome::Empty => Err(X::from(Fault::Empty)),
            Outcome::Failed(error) => Err(X::from(error)),
            Outcome::Panicked(message) => Err(X::from(Fault::Panicked(message))),
        }
    }
}

/// Callback results that [`capture`] knows how to interpret.
///
/// Implemented for `Option`, `Result`, [`Maybe`](crate::Maybe) and
/// [`Either`](crate::Either). The empty marker is `None` (or `Maybe::Absent`).
pub trait Lift {
    /// The payload on success.
    type Value;
    /// The domain failure this result can carry.
    type Error;

    /// Classify this result.
    fn lift(self) -> Outcome<Self::Value, Self::Error>;
}

impl<T> Lift for Option<T> {
    type Value = T;
    type Error = Fault;

    #[inline]
    fn lift(self) -> Outcome<T, Fault> {
        match self {
            Some(value) => Outcome::Value(value),
            None => Outcome::Empty,
        }
    }
}

impl<T, E> Lift for Result<T, E> {
    type Value = T;
    type Error = E;

    #[inline]
    fn lift(self) -> Outcome<T, E> {
        match self {
            Ok(value) => Outcome::Value(value),
            Err(error) => Outcome::Failed(error),
        }
    }
}

/// Run `callback` on `value`, catching panics and classifying the result.
///
/// This is the single place where container operations execute user code. A panic is
/// never re-thrown: its message becomes [`Outcome::Panicked`]. The default panic hook
/// still reports the panic on stderr.
///
/// ```rust
/// use calmwater::capture::{capture, Fault, Outcome};
///
/// let outcome: Outcome<i32, Fault> = capture(1, |_| -> Option<i32> { panic!("boom") });
/// assert_eq!(outcome, Outcome::Panicked("boom".to_string()));
/// ```
pub fn capture<T, R, F>(value: T, callback: F) -> Outcome<R::Value, R::Error>
where
    F: FnOnce(T) -> R,
    R: Lift,
{
    match panic::catch_unwind(AssertUnwindSafe(move || callback(value))) {
        Ok(result) => {
            let outcome = result.lift();
            #[cfg(feature = "tracing")]
            {
                if matches!(outcome, Outcome::Empty) {
                    tracing::debug!("callback returned the empty marker");
                }
            }
            outcome
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            #[cfg(feature = "tracing")]
            tracing::debug!(panic = %message, "captured panic in container callback");
            Outcome::Panicked(message)
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "callback panicked with a non-string payload".to_string()
    }
}
