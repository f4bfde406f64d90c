//! Try type - a captured result or failure.
//!
//! `Try<T>` holds either the value a computation produced (`Success`) or the
//! [`Failure`] it raised. Constructors run the computation and capture both
//! `Err` results and panics, so the error travels as data instead of
//! unwinding. [`Try::throw`] turns it back into ordinary control flow.
//!
//! # Examples
//!
//! ```rust
//! use mettle::control::Try;
//!
//! let parsed = Try::of(|| "21".parse::<i32>()).map(|n| n * 2);
//! assert_eq!(parsed.value_or_default(0), 42);
//!
//! let failed = Try::of(|| "x".parse::<i32>()).map(|n| n * 2);
//! assert!(failed.is_failure());
//! assert_eq!(failed.value_or_default(0), 0);
//! ```

use std::error::Error as StdError;
use std::fmt;

use super::either::Either;
use super::error::{Cancelled, InvalidArgument};
use super::failure::{self, Failure};
use super::maybe::Maybe;

/// What to do when a captured error turns out to be a cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CancellationPolicy {
    /// Store the cancellation as an ordinary `Failure`.
    #[default]
    Capture,
    /// Re-raise it as [`Cancelled`] instead of storing it.
    Propagate,
}

/// The captured outcome of a fallible computation.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
#[derive(Clone, PartialEq)]
pub enum Try<T> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed.
    Failure(Failure),
}

impl<T> Try<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a known value.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps a known error.
    pub fn failure<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Failure(Failure::new(error))
    }

    /// Wraps an error that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] if `error` is `None`; a failure always
    /// carries an error object.
    pub fn failure_from<E>(error: Option<E>) -> Result<Self, InvalidArgument>
    where
        E: StdError + Send + Sync + 'static,
    {
        error
            .map(Self::failure)
            .ok_or(InvalidArgument::new("error", "a failure requires an error"))
    }

    /// Runs `computation`, capturing its error or panic.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mettle::control::Try;
    ///
    /// let attempt = Try::of(|| std::fs::read_to_string("/definitely/not/here"));
    /// assert!(attempt.is_failure());
    /// assert!(attempt.error().is_some_and(|failure| failure.is::<std::io::Error>()));
    /// ```
    pub fn of<E, F>(computation: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        E: StdError + Send + Sync + 'static,
    {
        match failure::catch(computation) {
            Ok(Ok(value)) => Self::Success(value),
            Ok(Err(error)) => Self::captured(Failure::new(error)),
            Err(failure) => Self::Failure(failure),
        }
    }

    /// Runs an infallible `computation`, capturing a panic.
    pub fn capture<F>(computation: F) -> Self
    where
        F: FnOnce() -> T,
    {
        failure::catch(computation).into()
    }

    /// Like [`of`](Self::of), applying `policy` to a captured cancellation.
    ///
    /// # Errors
    ///
    /// Returns [`Cancelled`] when the computation raised (or wrapped) a
    /// cancellation and `policy` is [`CancellationPolicy::Propagate`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mettle::control::{CancellationPolicy, Cancelled, Try};
    ///
    /// let captured = Try::<i32>::of_with_policy(|| Err(Cancelled), CancellationPolicy::Capture);
    /// assert!(captured.is_ok_and(|attempt| attempt.is_failure()));
    ///
    /// let raised = Try::<i32>::of_with_policy(|| Err(Cancelled), CancellationPolicy::Propagate);
    /// assert_eq!(raised, Err(Cancelled));
    /// ```
    pub fn of_with_policy<E, F>(computation: F, policy: CancellationPolicy) -> Result<Self, Cancelled>
    where
        F: FnOnce() -> Result<T, E>,
        E: StdError + Send + Sync + 'static,
    {
        Self::of(computation).apply_policy(policy)
    }

    pub(crate) fn apply_policy(self, policy: CancellationPolicy) -> Result<Self, Cancelled> {
        match self {
            Self::Failure(failure)
                if policy == CancellationPolicy::Propagate && failure.is_cancellation() =>
            {
                tracing::debug!("propagating captured cancellation");
                Err(Cancelled)
            }
            other => Ok(other),
        }
    }

    fn captured(failure: Failure) -> Self {
        tracing::trace!(error = %failure, "captured failure");
        Self::Failure(failure)
    }

    // =========================================================================
    // Type Checking and Access
    // =========================================================================

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns a reference to the success value, if any.
    #[inline]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns a reference to the captured failure, if any.
    #[inline]
    pub const fn error(&self) -> Option<&Failure> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure),
        }
    }

    /// Returns the success value or `default`.
    #[inline]
    pub fn value_or_default(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success value or computes one from the failure.
    #[inline]
    pub fn value_or_else<F>(self, default: F) -> T
    where
        F: FnOnce(Failure) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(failure) => default(failure),
        }
    }

    /// Converts into a `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, Failure> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(failure) => Err(failure),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to the success value, capturing a panic as a new
    /// failure. An existing failure passes through untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mettle::control::Try;
    ///
    /// let attempt = Try::success(0).map(|x: i32| 10 / x);
    /// assert!(attempt.error().is_some_and(|failure| failure.is_panic()));
    /// ```
    pub fn map<R, F>(self, function: F) -> Try<R>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Success(value) => failure::catch(|| function(value)).into(),
            Self::Failure(failure) => Try::Failure(failure),
        }
    }

    /// Applies a fallible `function` to the success value, capturing its
    /// error or panic.
    pub fn try_map<R, E, F>(self, function: F) -> Try<R>
    where
        F: FnOnce(T) -> Result<R, E>,
        E: StdError + Send + Sync + 'static,
    {
        match self {
            Self::Success(value) => Try::of(|| function(value)),
            Self::Failure(failure) => Try::Failure(failure),
        }
    }

    /// Applies a `Try`-returning `function` to the success value without
    /// nesting the result. A panic inside `function` is captured.
    pub fn flat_map<R, F>(self, function: F) -> Try<R>
    where
        F: FnOnce(T) -> Try<R>,
    {
        match self {
            Self::Success(value) => match failure::catch(|| function(value)) {
                Ok(result) => result,
                Err(failure) => Try::Failure(failure),
            },
            Self::Failure(failure) => Try::Failure(failure),
        }
    }

    /// Turns a failure into a value.
    #[must_use]
    pub fn recover<F>(self, function: F) -> Self
    where
        F: FnOnce(Failure) -> T,
    {
        match self {
            Self::Success(_) => self,
            Self::Failure(failure) => Self::capture(|| function(failure)),
        }
    }

    /// Returns `self` if successful, otherwise the `Try` produced from the failure.
    #[must_use]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce(Failure) -> Self,
    {
        match self {
            Self::Success(_) => self,
            Self::Failure(failure) => function(failure),
        }
    }

    // =========================================================================
    // Rethrowing
    // =========================================================================

    /// Re-raises a captured failure; a success is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns the captured [`Failure`] if this is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mettle::control::{Failure, Try};
    ///
    /// fn parse_twice(text: &str) -> Result<i32, Failure> {
    ///     let value = Try::of(|| text.parse::<i32>()).throw()?;
    ///     Ok(value.value_or_default(0) * 2)
    /// }
    ///
    /// assert_eq!(parse_twice("4"), Ok(8));
    /// assert!(parse_twice("four").is_err());
    /// ```
    pub fn throw(self) -> Result<Self, Failure> {
        match self {
            Self::Failure(failure) => Err(failure),
            success => Ok(success),
        }
    }

    /// Re-raises a captured failure only if it is, or wraps, an `E`.
    ///
    /// Any other failure is kept as a `Failure` of the original error.
    ///
    /// # Errors
    ///
    /// Returns the captured [`Failure`] if its cause chain contains an `E`.
    pub fn throw_if<E>(self) -> Result<Self, Failure>
    where
        E: StdError + 'static,
    {
        match self {
            Self::Failure(failure) if failure.is::<E>() => Err(failure),
            other => Ok(other),
        }
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Invokes exactly one of the callbacks depending on the tag.
    pub fn do_with<F, G>(self, on_value: F, on_error: G) -> Self
    where
        F: FnOnce(&T),
        G: FnOnce(&Failure),
    {
        match &self {
            Self::Success(value) => on_value(value),
            Self::Failure(failure) => on_error(failure),
        }
        self
    }

    /// Invokes `on_value` if this is a `Success`.
    #[must_use]
    pub fn do_if_success<F>(self, on_value: F) -> Self
    where
        F: FnOnce(&T),
    {
        self.do_with(on_value, |_| {})
    }

    /// Invokes `on_error` if this is a `Failure`.
    #[must_use]
    pub fn do_if_error<G>(self, on_error: G) -> Self
    where
        G: FnOnce(&Failure),
    {
        self.do_with(|_| {}, on_error)
    }

    /// Like [`do_with`](Self::do_with), with either callback omitted.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] when both callbacks are `None`.
    pub fn do_optional<F, G>(
        &self,
        on_value: Option<F>,
        on_error: Option<G>,
    ) -> Result<(), InvalidArgument>
    where
        F: FnOnce(&T),
        G: FnOnce(&Failure),
    {
        if on_value.is_none() && on_error.is_none() {
            return Err(InvalidArgument::new(
                "on_value",
                "at least one callback must be supplied",
            ));
        }
        match self {
            Self::Success(value) => on_value.map_or((), |callback| callback(value)),
            Self::Failure(failure) => on_error.map_or((), |callback| callback(failure)),
        }
        Ok(())
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into a `Maybe`; a failure becomes `Empty`.
    ///
    /// # Errors
    ///
    /// When `suppress_cancellation_as_empty` is `false` and the failure is a
    /// cancellation, returns [`Cancelled`] instead of swallowing it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mettle::control::{Cancelled, Maybe, Try};
    ///
    /// let cancelled: Try<i32> = Try::failure(Cancelled);
    /// assert_eq!(cancelled.clone().to_maybe(true), Ok(Maybe::Empty));
    /// assert_eq!(cancelled.to_maybe(false), Err(Cancelled));
    /// ```
    pub fn to_maybe(self, suppress_cancellation_as_empty: bool) -> Result<Maybe<T>, Cancelled> {
        match self {
            Self::Success(value) => Ok(Maybe::Present(value)),
            Self::Failure(failure) if failure.is_cancellation() && !suppress_cancellation_as_empty => {
                tracing::debug!("cancellation surfaced while converting to maybe");
                Err(Cancelled)
            }
            Self::Failure(_) => Ok(Maybe::Empty),
        }
    }

    /// Success becomes `Left`; a failure becomes `Right` via `project`.
    #[inline]
    pub fn as_either<R, F>(self, project: F) -> Either<T, R>
    where
        F: FnOnce(Failure) -> R,
    {
        match self {
            Self::Success(value) => Either::Left(value),
            Self::Failure(failure) => Either::Right(project(failure)),
        }
    }

    /// Success becomes `Left`; the failure itself becomes `Right`.
    #[inline]
    pub fn to_either(self) -> Either<T, Failure> {
        self.as_either(|failure| failure)
    }
}

impl<T: Default> Try<T> {
    /// Returns the success value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        self.value_or_else(|_| T::default())
    }
}

impl<T> Try<Try<T>> {
    /// Removes one level of nesting.
    ///
    /// An outer failure wins; otherwise the inner `Try` is returned as-is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mettle::control::Try;
    ///
    /// let nested = Try::success(Try::success(1));
    /// assert_eq!(nested.flatten(), Try::success(1));
    /// ```
    pub fn flatten(self) -> Try<T> {
        match self {
            Self::Success(inner) => inner,
            Self::Failure(failure) => Try::Failure(failure),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Try<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(failure) => formatter.debug_tuple("Failure").field(failure).finish(),
        }
    }
}

impl<T> From<Result<T, Failure>> for Try<T> {
    fn from(result: Result<T, Failure>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(failure) => Self::Failure(failure),
        }
    }
}

impl<T> From<Try<T>> for Result<T, Failure> {
    fn from(attempt: Try<T>) -> Self {
        attempt.into_result()
    }
}

impl<T> IntoIterator for Try<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_result().ok().into_iter()
    }
}
