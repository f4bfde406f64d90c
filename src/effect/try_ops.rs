//! Asynchronous combinators for `Try`.
//!
//! Futures wrapped into a `Try` have both their `Err` results and their
//! panics captured, whether the panic happens while creating the future or
//! while polling it.

use std::error::Error as StdError;
use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;

use super::pending::Pending;
use crate::control::{
    CancellationPolicy, Cancelled, Either, Error, Failure, Maybe, Try, catch,
};

/// A pending `Try`.
pub type AsyncTry<T> = Pending<Try<T>>;

/// Creates a future with `make` and awaits it, capturing panics from both steps.
async fn capture_async<R, F, Fut>(make: F) -> Try<R>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Try<R>>,
{
    let future = match catch(make) {
        Ok(future) => future,
        Err(failure) => return Try::Failure(failure),
    };
    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(attempt) => attempt,
        Err(payload) => {
            let failure = Failure::from_panic(payload.as_ref());
            tracing::trace!(error = %failure, "captured panic in asynchronous computation");
            Try::Failure(failure)
        }
    }
}

fn from_result<R, E>(result: Result<R, E>) -> Try<R>
where
    E: StdError + Send + Sync + 'static,
{
    match result {
        Ok(value) => Try::Success(value),
        Err(error) => Try::failure(error),
    }
}

impl<T: Send + 'static> Pending<Try<T>> {
    /// Runs `future`, capturing its error or panic.
    ///
    /// A captured cancellation is not stored as a failure; the returned
    /// `Pending` is cancelled instead. Use
    /// [`attempt_with_policy`](Self::attempt_with_policy) to capture it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use futures::executor::block_on;
    /// use mettle::effect::{AsyncTry, Pending};
    ///
    /// let attempt: AsyncTry<i32> = Pending::attempt(async { "7".parse::<i32>() });
    /// assert_eq!(block_on(attempt.value_or_default(0)), Ok(7));
    /// ```
    pub fn attempt<E, Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        E: StdError + Send + Sync + 'static,
    {
        Self::attempt_with_policy(future, CancellationPolicy::Propagate)
    }

    /// Like [`attempt`](Self::attempt), applying `policy` to a captured cancellation.
    pub fn attempt_with_policy<E, Fut>(future: Fut, policy: CancellationPolicy) -> Self
    where
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        E: StdError + Send + Sync + 'static,
    {
        Self::from_outcome_future(async move {
            capture_async(move || future.map(from_result))
                .await
                .apply_policy(policy)
        })
    }

    /// Turns a cancellation of this computation into a `Failure` holding
    /// [`Cancelled`]. The result no longer races the token.
    pub fn capture_cancellation(self) -> Self {
        self.on_cancelled(|| Try::failure(Cancelled))
    }

    /// See [`Try::map`].
    pub fn map<R, F>(self, function: F) -> AsyncTry<R>
    where
        F: FnOnce(T) -> R + Send + 'static,
        R: Send + 'static,
    {
        self.fmap(move |attempt| attempt.map(function))
    }

    /// See [`Try::try_map`].
    pub fn try_map<R, E, F>(self, function: F) -> AsyncTry<R>
    where
        F: FnOnce(T) -> Result<R, E> + Send + 'static,
        E: StdError + Send + Sync + 'static,
        R: Send + 'static,
    {
        self.fmap(move |attempt| attempt.try_map(function))
    }

    /// See [`Try::flat_map`].
    pub fn flat_map<R, F>(self, function: F) -> AsyncTry<R>
    where
        F: FnOnce(T) -> Try<R> + Send + 'static,
        R: Send + 'static,
    {
        self.fmap(move |attempt| attempt.flat_map(function))
    }

    /// Binds the success value to an asynchronous `Try`-producing function.
    ///
    /// An existing failure passes through; a panic in `function` or its
    /// future is captured.
    pub fn flat_map_async<R, F, Fut>(self, function: F) -> AsyncTry<R>
    where
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = Try<R>> + Send + 'static,
        R: Send + 'static,
    {
        self.then(move |attempt| async move {
            match attempt {
                Try::Success(value) => capture_async(move || function(value)).await,
                Try::Failure(failure) => Try::Failure(failure),
            }
        })
    }

    /// Maps the success value with an asynchronous function.
    pub fn map_async<R, F, Fut>(self, function: F) -> AsyncTry<R>
    where
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: Send + 'static,
    {
        self.flat_map_async(move |value| function(value).map(Try::Success))
    }

    /// Maps the success value with an asynchronous fallible function.
    pub fn try_map_async<R, E, F, Fut>(self, function: F) -> AsyncTry<R>
    where
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = Result<R, E>> + Send + 'static,
        E: StdError + Send + Sync + 'static,
        R: Send + 'static,
    {
        self.flat_map_async(move |value| function(value).map(from_result))
    }

    /// See [`Try::recover`].
    pub fn recover<F>(self, function: F) -> Self
    where
        F: FnOnce(Failure) -> T + Send + 'static,
    {
        self.fmap(move |attempt| attempt.recover(function))
    }

    /// See [`Try::do_with`].
    pub fn do_with<F, G>(self, on_value: F, on_error: G) -> Self
    where
        F: FnOnce(&T) + Send + 'static,
        G: FnOnce(&Failure) + Send + 'static,
    {
        self.fmap(move |attempt| attempt.do_with(on_value, on_error))
    }

    /// See [`Try::do_if_error`].
    pub fn do_if_error<G>(self, on_error: G) -> Self
    where
        G: FnOnce(&Failure) + Send + 'static,
    {
        self.fmap(move |attempt| attempt.do_if_error(on_error))
    }

    /// See [`Try::value_or_default`].
    pub fn value_or_default(self, default: T) -> Pending<T> {
        self.fmap(move |attempt| attempt.value_or_default(default))
    }

    /// See [`Try::to_maybe`].
    ///
    /// With `suppress_cancellation_as_empty`, a cancellation of this
    /// computation also becomes `Empty`; otherwise it stays a cancellation.
    pub fn to_maybe(self, suppress_cancellation_as_empty: bool) -> Pending<Maybe<T>> {
        let source = if suppress_cancellation_as_empty {
            self.capture_cancellation()
        } else {
            self
        };
        source.try_fmap(move |attempt| attempt.to_maybe(suppress_cancellation_as_empty))
    }

    /// See [`Try::as_either`].
    pub fn as_either<R, F>(self, project: F) -> Pending<Either<T, R>>
    where
        F: FnOnce(Failure) -> R + Send + 'static,
        R: Send + 'static,
    {
        self.fmap(move |attempt| attempt.as_either(project))
    }

    /// Awaits the `Try` and re-raises a captured failure.
    ///
    /// # Errors
    ///
    /// [`Error::Cancelled`] if the computation was cancelled, [`Error::Failed`]
    /// with the captured failure otherwise.
    pub async fn throw(self) -> Result<Try<T>, Error> {
        Ok(self.await?.throw()?)
    }

    /// Awaits the `Try` and re-raises a captured failure only if it is, or
    /// wraps, an `E`.
    ///
    /// # Errors
    ///
    /// As [`throw`](Self::throw), restricted to failures of kind `E`.
    pub async fn throw_if<E>(self) -> Result<Try<T>, Error>
    where
        E: StdError + 'static,
    {
        Ok(self.await?.throw_if::<E>()?)
    }

    /// Awaits the `Try` and converts it into a `Result`.
    ///
    /// # Errors
    ///
    /// As [`throw`](Self::throw).
    pub async fn into_result(self) -> Result<T, Error> {
        Ok(self.await?.into_result()?)
    }
}

impl<T: Send + 'static> Pending<Try<Try<T>>> {
    /// See [`Try::flatten`].
    pub fn flatten(self) -> AsyncTry<T> {
        self.fmap(Try::flatten)
    }
}
