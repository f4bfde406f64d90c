//! Captured failures.
//!
//! A [`Failure`] is what a [`Try`](super::Try) stores instead of propagating an
//! error: the original error object, its cause chain, and a backtrace taken at
//! the point of capture. Panics are captured too and surface as
//! [`PanicError`].

use std::any::Any;
use std::backtrace::Backtrace;
use std::error::Error as StdError;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use super::error::Cancelled;

/// The error produced when a captured computation panicked.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("panicked: {message}")]
pub struct PanicError {
    /// The panic message, or `"unknown panic"` for non-string payloads.
    pub message: String,
}

impl PanicError {
    pub(crate) fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        Self { message }
    }
}

struct Captured {
    error: Box<dyn StdError + Send + Sync + 'static>,
    backtrace: Backtrace,
}

/// An error reified as data.
///
/// `Failure` is cheap to clone; clones share the same underlying error.
/// Two failures compare equal only when they are clones of the same capture,
/// mirroring identity comparison of exception objects.
///
/// # Examples
///
/// ```rust
/// use mettle::control::{Cancelled, Failure};
///
/// let failure = Failure::new(std::fmt::Error);
/// assert_eq!(failure.message(), "an error occurred when formatting an argument");
/// assert!(failure.is::<std::fmt::Error>());
/// assert!(!failure.is_cancellation());
///
/// assert!(Failure::new(Cancelled).is_cancellation());
/// ```
#[derive(Clone)]
pub struct Failure {
    inner: Arc<Captured>,
}

impl Failure {
    /// Captures `error`.
    ///
    /// Passing a `Failure` returns a clone of it rather than nesting.
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        if let Some(failure) = (&error as &dyn Any).downcast_ref::<Self>() {
            return failure.clone();
        }
        Self::from_boxed(Box::new(error))
    }

    /// Captures an already boxed error.
    pub fn from_boxed(error: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        Self {
            inner: Arc::new(Captured {
                error,
                backtrace: Backtrace::capture(),
            }),
        }
    }

    /// Captures a panic payload as a [`PanicError`].
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        Self::new(PanicError::from_payload(payload))
    }

    /// The display message of the captured error.
    pub fn message(&self) -> String {
        self.inner.error.to_string()
    }

    /// The captured error itself.
    pub fn error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.inner.error.as_ref()
    }

    /// The backtrace recorded when the failure was captured.
    ///
    /// Only populated when backtraces are enabled (`RUST_BACKTRACE`).
    pub fn backtrace(&self) -> &Backtrace {
        &self.inner.backtrace
    }

    /// Iterates the captured error followed by its chain of causes.
    pub fn chain(&self) -> Chain<'_> {
        Chain {
            next: Some(self.inner.error.as_ref()),
        }
    }

    /// Finds the first error of type `E` in the cause chain.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        self.chain().find_map(|error| error.downcast_ref::<E>())
    }

    /// Returns `true` if the captured error is, or wraps, an `E`.
    pub fn is<E>(&self) -> bool
    where
        E: StdError + 'static,
    {
        self.downcast_ref::<E>().is_some()
    }

    /// Returns `true` if the captured error is, or wraps, a [`Cancelled`].
    pub fn is_cancellation(&self) -> bool {
        self.is::<Cancelled>()
    }

    /// Returns `true` if the failure was produced by a panic.
    pub fn is_panic(&self) -> bool {
        self.is::<PanicError>()
    }
}

/// Iterator over a failure's cause chain, returned by [`Failure::chain`].
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl fmt::Debug for Failure {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("Failure")
            .field(&self.inner.error)
            .finish()
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner.error, formatter)
    }
}

impl StdError for Failure {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.error.source()
    }
}

impl PartialEq for Failure {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl From<Cancelled> for Failure {
    fn from(error: Cancelled) -> Self {
        Self::new(error)
    }
}

impl From<super::error::EmptyValue> for Failure {
    fn from(error: super::error::EmptyValue) -> Self {
        Self::new(error)
    }
}

/// Runs `function`, turning a panic into a [`Failure`].
pub(crate) fn catch<R>(function: impl FnOnce() -> R) -> Result<R, Failure> {
    panic::catch_unwind(AssertUnwindSafe(function)).map_err(|payload| {
        let failure = Failure::from_panic(payload.as_ref());
        tracing::trace!(error = %failure, "captured panic");
        failure
    })
}

static_assertions::assert_impl_all!(Failure: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, thiserror::Error)]
    #[error("outer")]
    struct Outer(#[source] Cancelled);

    #[rstest]
    fn new_does_not_nest_failures() {
        let failure = Failure::new(Cancelled);
        let again = Failure::new(failure.clone());
        assert_eq!(failure, again);
    }

    #[rstest]
    fn equality_is_identity() {
        let first = Failure::new(Cancelled);
        let second = Failure::new(Cancelled);
        assert_ne!(first, second);
        assert_eq!(first, first.clone());
    }

    #[rstest]
    fn chain_walks_sources() {
        let failure = Failure::new(Outer(Cancelled));
        let messages: Vec<String> = failure.chain().map(|error| error.to_string()).collect();
        assert_eq!(messages, vec!["outer", "the operation was cancelled"]);
        assert!(failure.is_cancellation());
    }

    #[rstest]
    #[case(Box::new("static message") as Box<dyn Any + Send>, "static message")]
    #[case(Box::new(String::from("owned message")) as Box<dyn Any + Send>, "owned message")]
    #[case(Box::new(42_u8) as Box<dyn Any + Send>, "unknown panic")]
    fn panic_payload_message(#[case] payload: Box<dyn Any + Send>, #[case] expected: &str) {
        let failure = Failure::from_panic(payload.as_ref());
        assert!(failure.is_panic());
        assert_eq!(
            failure.downcast_ref::<PanicError>().map(|error| error.message.as_str()),
            Some(expected)
        );
    }

    #[rstest]
    fn catch_returns_value_without_panic() {
        assert_eq!(catch(|| 7).ok(), Some(7));
    }

    #[rstest]
    fn catch_captures_panic() {
        let result = catch(|| -> i32 { panic!("boom") });
        let failure = result.unwrap_err();
        assert_eq!(failure.message(), "panicked: boom");
    }
}
