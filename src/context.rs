//! Failure payloads with a trail of context
//!
//! `ContextError` wraps a failure payload and accumulates messages describing what was
//! being attempted when it happened. [`Either::context`](crate::Either::context) is the
//! usual way in.
//!
//! # Examples
//!
//! ```
//! use calmwater::capture::Fault;
//! use calmwater::Either;
//!
//! let profile: Either<Fault, i32> = Either::success(7).bind(|_| None::<i32>);
//! let err = profile
//!     .context("querying user table")
//!     .map_failure(|e| e.context("loading user profile"))
//!     .unwrap_failure();
//!
//! assert_eq!(err.inner(), &Fault::Empty);
//! assert_eq!(err.context_trail(), &["querying user table", "loading user profile"]);
//! ```

use std::error::Error as StdError;
use std::fmt;

use crate::capture::Fault;

/// A failure payload plus the operations that were in progress, innermost first.
///
/// Displays as the payload followed by one indented line per context entry:
///
/// ```
/// use calmwater::ContextError;
///
/// let err = ContextError::new("connection refused")
///     .context("connecting to database")
///     .context("initializing user service");
///
/// assert_eq!(
///     err.to_string(),
///     "Error: connection refused\n  -> connecting to database\n  -> initializing user service"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextError<E> {
    error: E,
    context: Vec<String>,
}

impl<E> ContextError<E> {
    /// Wrap `error` with an empty trail.
    pub fn new(error: E) -> Self {
        ContextError {
            error,
            context: Vec::new(),
        }
    }

    /// Append a context entry.
    pub fn context(mut self, msg: impl Into<String>) -> Self {
        self.context.push(msg.into());
        self
    }

    /// The wrapped payload.
    pub fn inner(&self) -> &E {
        &self.error
    }

    /// Discard the trail and return the payload.
    pub fn into_inner(self) -> E {
        self.error
    }

    /// Context entries in the order they were added.
    pub fn context_trail(&self) -> &[String] {
        &self.context
    }

    /// Convert the payload, keeping the trail.
    ///
    /// ```
    /// use calmwater::ContextError;
    ///
    /// let err = ContextError::new(404).context("fetching page");
    /// let err = err.map_inner(|code| format!("status {}", code));
    /// assert_eq!(err.inner(), "status 404");
    /// assert_eq!(err.context_trail(), &["fetching page"]);
    /// ```
    pub fn map_inner<X, F>(self, f: F) -> ContextError<X>
    where
        F: FnOnce(E) -> X,
    {
        ContextError {
            error: f(self.error),
            context: self.context,
        }
    }
}

impl<E: fmt::Display> fmt::Display for ContextError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.error)?;
        for ctx in &self.context {
            write!(f, "\n  -> {}", ctx)?;
        }
        Ok(())
    }
}

impl<E: StdError + 'static> StdError for ContextError<E> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.error)
    }
}

// Keeps `Either<ContextError<E>, T>` chainable: callback faults land in the payload.
impl<E: From<Fault>> From<Fault> for ContextError<E> {
    fn from(fault: Fault) -> Self {
        ContextError::new(E::from(fault))
    }
}
