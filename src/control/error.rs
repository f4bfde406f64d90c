//! Error types raised by the containers and the sequence queries.
//!
//! Most outcomes are communicated through the container tag (`Empty`,
//! `Right`, `Failure`). The types here cover the few places where an
//! operation fails instead:
//!
//! - [`InvalidArgument`]: a required `Option`-typed argument was absent.
//! - [`MultipleMatches`]: `single_matching` found a second match.
//! - [`EmptyValue`]: a value was demanded from an `Empty` [`Maybe`](super::Maybe).
//! - [`Cancelled`]: a cancellation signal fired while a computation was pending.
//!
//! [`Error`] gathers them (plus a captured [`Failure`]) for operations that
//! can fail in more than one way.

use super::failure::Failure;

/// A required argument was absent.
///
/// Closures cannot be null in Rust, so this is only raised by entry points
/// that take `Option`-typed arguments, for instance when both callbacks of a
/// `do_optional` call are `None`.
///
/// # Examples
///
/// ```rust
/// use mettle::control::{InvalidArgument, Maybe};
///
/// let maybe = Maybe::from_value(1);
/// let result = maybe.do_optional(None::<fn(&i32)>, None::<fn()>);
/// assert_eq!(
///     result.unwrap_err(),
///     InvalidArgument::new("on_value", "at least one callback must be supplied"),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid argument `{name}`: {reason}")]
pub struct InvalidArgument {
    /// The name of the offending parameter.
    pub name: &'static str,
    /// Why it was rejected.
    pub reason: &'static str,
}

impl InvalidArgument {
    /// Creates a new `InvalidArgument` error.
    #[must_use]
    pub const fn new(name: &'static str, reason: &'static str) -> Self {
        Self { name, reason }
    }
}

/// More than one element satisfied the predicate of a `single_matching` query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, thiserror::Error)]
#[error("sequence contains more than one matching element")]
pub struct MultipleMatches;

/// A value was requested from an empty [`Maybe`](super::Maybe).
///
/// This is also the error stored in the `Failure` produced by
/// [`Maybe::as_try`](super::Maybe::as_try).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, thiserror::Error)]
#[error("maybe has no value")]
pub struct EmptyValue;

/// The operation was cancelled before its pending computation completed.
///
/// Cancellation is never folded into an `Empty` or `Failure` container unless
/// the caller explicitly asks for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, thiserror::Error)]
#[error("the operation was cancelled")]
pub struct Cancelled;

/// Every way a container operation can fail.
///
/// # Examples
///
/// ```rust
/// use mettle::control::{Cancelled, Error, MultipleMatches};
///
/// let error: Error = MultipleMatches.into();
/// assert!(matches!(error, Error::MultipleMatches(_)));
/// assert!(Error::from(Cancelled).is_cancelled());
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// See [`InvalidArgument`].
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),
    /// See [`MultipleMatches`].
    #[error(transparent)]
    MultipleMatches(#[from] MultipleMatches),
    /// See [`EmptyValue`].
    #[error(transparent)]
    EmptyValue(#[from] EmptyValue),
    /// See [`Cancelled`].
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
    /// A captured failure that was rethrown.
    #[error(transparent)]
    Failed(#[from] Failure),
}

impl Error {
    /// Returns `true` if this error is a cancellation, either directly or
    /// through a rethrown failure that wraps one.
    pub fn is_cancelled(&self) -> bool {
        match self {
            Self::Cancelled(_) => true,
            Self::Failed(failure) => failure.is_cancellation(),
            _ => false,
        }
    }
}
