//! `Pending` - a pending-or-completed computation.
//!
//! `Pending<A>` is the asynchronous form of every container: a value of type
//! `A` that is either already available or still being computed. Awaiting it
//! yields `Result<A, Cancelled>`.
//!
//! # Fast Path
//!
//! A `Pending` built with [`Pending::ready`] is already complete. Combinators
//! applied to a complete `Pending` run their function immediately, at
//! composition time, and return another complete `Pending`. No future is
//! boxed and nothing suspends:
//!
//! ```rust
//! use mettle::effect::Pending;
//!
//! let doubled = Pending::ready(21).fmap(|x| x * 2);
//! assert!(doubled.is_complete());
//! assert_eq!(doubled.into_outcome().ok(), Some(Ok(42)));
//! ```
//!
//! Otherwise the function is deferred until the input completes, and the
//! result is the same as it would have been on the fast path.
//!
//! # Cancellation
//!
//! Each `Pending` carries a [`CancellationToken`] (by default one that never
//! fires), and combinators hand it on to the `Pending` they return. If the
//! token has already fired, a combinator returns a cancelled `Pending`
//! without invoking its function. While a computation is suspended, awaiting
//! it races the token, and cancellation wins ties.
//!
//! ```rust
//! use futures::executor::block_on;
//! use mettle::control::Cancelled;
//! use mettle::effect::{CancellationToken, Pending};
//!
//! let token = CancellationToken::new();
//! token.cancel();
//! let pending = Pending::ready(1)
//!     .with_cancellation(token)
//!     .fmap(|_| -> i32 { unreachable!() });
//! assert_eq!(block_on(pending), Err(Cancelled));
//! ```

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::{BoxFuture, FutureExt, Shared};
use pin_project_lite::pin_project;

use super::cancellation::CancellationToken;
use crate::control::Cancelled;

pin_project! {
    /// A computation that is either complete or still running.
    ///
    /// # Type Parameters
    ///
    /// - `A`: The type of the value eventually produced.
    ///
    /// # Monad Laws
    ///
    /// 1. **Left Identity**: `Pending::ready(a).and_then(f) == f(a)`
    /// 2. **Right Identity**: `m.and_then(Pending::ready) == m`
    /// 3. **Associativity**: `m.and_then(f).and_then(g) == m.and_then(|x| f(x).and_then(g))`
    #[must_use = "a pending computation does nothing unless awaited"]
    pub struct Pending<A> {
        #[pin]
        state: PendingState<A>,
        token: CancellationToken,
    }
}

pin_project! {
    /// Internal state machine for `Pending`.
    ///
    /// - `Ready` -> `Completed` (value handed out on first poll)
    /// - `Cancelled` -> `Completed`
    /// - `Running` -> `Completed` (when the boxed future finishes)
    #[project = PendingStateProj]
    enum PendingState<A> {
        Ready {
            value: Option<A>,
        },
        Cancelled,
        Running {
            #[pin]
            future: BoxFuture<'static, Result<A, Cancelled>>,
        },
        Completed,
    }
}

impl<A> Future for Pending<A> {
    type Output = Result<A, Cancelled>;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        match this.state.as_mut().project() {
            PendingStateProj::Ready { value } => {
                let value = value.take();
                this.state.set(PendingState::Completed);
                if this.token.is_cancelled() {
                    tracing::debug!("pending computation observed after cancellation");
                    return Poll::Ready(Err(Cancelled));
                }
                let Some(value) = value else {
                    panic!(
                        "Pending internal error: ready value was already consumed. \
                         This indicates the Pending was polled after completion."
                    );
                };
                Poll::Ready(Ok(value))
            }
            PendingStateProj::Cancelled => {
                this.state.set(PendingState::Completed);
                Poll::Ready(Err(Cancelled))
            }
            PendingStateProj::Running { future } => match future.poll(context) {
                Poll::Ready(outcome) => {
                    this.state.set(PendingState::Completed);
                    Poll::Ready(outcome)
                }
                Poll::Pending => Poll::Pending,
            },
            PendingStateProj::Completed => {
                panic!(
                    "Pending internal error: Pending was polled after completion. \
                     Futures should not be polled after returning Poll::Ready."
                );
            }
        }
    }
}

// =============================================================================
// Constructors
// =============================================================================

impl<A: Send + 'static> Pending<A> {
    /// An already completed computation.
    pub const fn ready(value: A) -> Self {
        Self {
            state: PendingState::Ready { value: Some(value) },
            token: CancellationToken::none(),
        }
    }

    /// An already cancelled computation.
    pub const fn cancelled() -> Self {
        Self {
            state: PendingState::Cancelled,
            token: CancellationToken::none(),
        }
    }

    /// A deferred computation: `action` is not invoked until first polled.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use futures::executor::block_on;
    /// use mettle::effect::Pending;
    ///
    /// let pending = Pending::new(|| async { 40 + 2 });
    /// assert!(!pending.is_complete());
    /// assert_eq!(block_on(pending), Ok(42));
    /// ```
    pub fn new<F, Fut>(action: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = A> + Send + 'static,
    {
        Self::from_future(async move { action().await })
    }

    /// Wraps a not-yet-polled future.
    pub fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = A> + Send + 'static,
    {
        Self::from_outcome_future(future.map(Ok))
    }

    /// Wraps a future that may itself report cancellation.
    pub fn from_outcome_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Result<A, Cancelled>> + Send + 'static,
    {
        Self {
            state: PendingState::Running {
                future: future.boxed(),
            },
            token: CancellationToken::none(),
        }
    }

    /// Builds a `Pending` from a synchronous outcome.
    pub fn from_outcome(outcome: Result<A, Cancelled>) -> Self {
        match outcome {
            Ok(value) => Self::ready(value),
            Err(Cancelled) => Self::cancelled(),
        }
    }

    /// Attaches `token`; it is raced against the computation and inherited
    /// by every combinator applied afterwards.
    ///
    /// A token attached earlier keeps applying. When a complete `Pending`
    /// already carries a token that can fire, both are raced and the result
    /// leaves the fast path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use futures::executor::block_on;
    /// use mettle::control::Cancelled;
    /// use mettle::effect::{CancellationToken, Pending};
    ///
    /// let (first, second) = (CancellationToken::new(), CancellationToken::new());
    /// let pending = Pending::ready(1)
    ///     .with_cancellation(first.clone())
    ///     .with_cancellation(second);
    /// first.cancel();
    /// assert_eq!(block_on(pending), Err(Cancelled));
    /// ```
    pub fn with_cancellation(self, token: CancellationToken) -> Self {
        if !token.can_be_cancelled() {
            return self;
        }
        if token.is_cancelled()
            || self.token.is_cancelled()
            || matches!(self.state, PendingState::Cancelled)
        {
            return Self::cancelled_with(token);
        }
        if self.token.can_be_cancelled() && self.is_complete() {
            return Self::guarded(self, token);
        }
        let Self { state, token: _ } = self;
        match state {
            PendingState::Running { future } => Self::guarded(future, token),
            state => Self { state, token },
        }
    }

    fn cancelled_with(token: CancellationToken) -> Self {
        tracing::debug!("combinator skipped: cancellation already requested");
        Self {
            state: PendingState::Cancelled,
            token,
        }
    }

    fn guarded<Fut>(future: Fut, token: CancellationToken) -> Self
    where
        Fut: Future<Output = Result<A, Cancelled>> + Send + 'static,
    {
        if !token.can_be_cancelled() {
            return Self {
                state: PendingState::Running {
                    future: future.boxed(),
                },
                token,
            };
        }
        let signal = token.clone();
        let future = async move {
            tokio::select! {
                biased;
                () = signal.cancelled() => {
                    tracing::debug!("pending computation cancelled while suspended");
                    Err(Cancelled)
                }
                outcome = future => outcome,
            }
        };
        Self {
            state: PendingState::Running {
                future: future.boxed(),
            },
            token,
        }
    }

    /// Splits `self` into its state (as a token-free `Pending`) and token.
    fn detach(self) -> (Self, CancellationToken) {
        let Self { state, token } = self;
        (
            Self {
                state,
                token: CancellationToken::none(),
            },
            token,
        )
    }
}

// =============================================================================
// Inspection
// =============================================================================

impl<A> Pending<A> {
    /// Returns `true` if the outcome is already known, so combinators take the fast path.
    pub const fn is_complete(&self) -> bool {
        matches!(
            self.state,
            PendingState::Ready { .. } | PendingState::Cancelled
        )
    }

    /// The token this computation races against.
    pub const fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Takes the outcome without awaiting, if it is already known.
    ///
    /// # Errors
    ///
    /// Gives `self` back unchanged when the computation is still running.
    pub fn into_outcome(self) -> Result<Result<A, Cancelled>, Self> {
        if self.token.is_cancelled() && self.is_complete() {
            return Ok(Err(Cancelled));
        }
        match self.state {
            PendingState::Ready { value: Some(value) } => Ok(Ok(value)),
            PendingState::Cancelled => Ok(Err(Cancelled)),
            state => Err(Self {
                state,
                token: self.token,
            }),
        }
    }
}

// =============================================================================
// Combinator Core
// =============================================================================

impl<A: Send + 'static> Pending<A> {
    /// Transforms the eventual value.
    ///
    /// On the fast path `function` runs now; otherwise it runs once the input
    /// completes. It never runs if cancellation is observed first.
    pub fn fmap<B, F>(self, function: F) -> Pending<B>
    where
        F: FnOnce(A) -> B + Send + 'static,
        B: Send + 'static,
    {
        self.try_fmap(move |value| Ok(function(value)))
    }

    /// Like [`fmap`](Self::fmap), with a function that may itself report
    /// cancellation.
    pub fn try_fmap<B, F>(self, function: F) -> Pending<B>
    where
        F: FnOnce(A) -> Result<B, Cancelled> + Send + 'static,
        B: Send + 'static,
    {
        let (source, token) = self.detach();
        if token.is_cancelled() {
            return Pending::cancelled_with(token);
        }
        match source.into_outcome() {
            Ok(outcome) => {
                let mut result = Pending::from_outcome(outcome.and_then(function));
                result.token = token;
                result
            }
            Err(source) => Pending::guarded(
                async move {
                    let value = source.await?;
                    function(value)
                },
                token,
            ),
        }
    }

    /// Continues with an asynchronous function.
    ///
    /// On the fast path `function` is invoked now and only its future is
    /// awaited later.
    pub fn then<B, F, Fut>(self, function: F) -> Pending<B>
    where
        F: FnOnce(A) -> Fut + Send + 'static,
        Fut: Future<Output = B> + Send + 'static,
        B: Send + 'static,
    {
        self.try_then(move |value| function(value).map(Ok))
    }

    /// Like [`then`](Self::then), with a future that may report cancellation.
    pub fn try_then<B, F, Fut>(self, function: F) -> Pending<B>
    where
        F: FnOnce(A) -> Fut + Send + 'static,
        Fut: Future<Output = Result<B, Cancelled>> + Send + 'static,
        B: Send + 'static,
    {
        let (source, token) = self.detach();
        if token.is_cancelled() {
            return Pending::cancelled_with(token);
        }
        match source.into_outcome() {
            Ok(Ok(value)) => Pending::guarded(function(value), token),
            Ok(Err(Cancelled)) => Pending::cancelled_with(token),
            Err(source) => Pending::guarded(
                async move {
                    let value = source.await?;
                    function(value).await
                },
                token,
            ),
        }
    }

    /// Continues with a `Pending`-returning function (monadic bind).
    ///
    /// The returned computation races this one's token as well as any token
    /// the continuation's `Pending` carries.
    pub fn and_then<B, F>(self, function: F) -> Pending<B>
    where
        F: FnOnce(A) -> Pending<B> + Send + 'static,
        B: Send + 'static,
    {
        let token = self.token.clone();
        match self.try_fmap(move |value| Ok(function(value))).into_outcome() {
            Ok(Ok(next)) => next.with_cancellation(token),
            Ok(Err(Cancelled)) => Pending::cancelled_with(token),
            Err(deferred) => {
                let (deferred, token) = deferred.detach();
                Pending::guarded(
                    async move {
                        let next = deferred.await?;
                        next.await
                    },
                    token,
                )
            }
        }
    }

    /// Replaces a cancelled outcome with `fallback()`.
    ///
    /// The returned `Pending` carries no token, so later combinators are not
    /// cancelled by it.
    pub fn on_cancelled<F>(self, fallback: F) -> Self
    where
        F: FnOnce() -> A + Send + 'static,
    {
        match self.into_outcome() {
            Ok(outcome) => Self::ready(outcome.unwrap_or_else(|Cancelled| fallback())),
            Err(source) => Self::from_future(async move {
                source.await.unwrap_or_else(|Cancelled| fallback())
            }),
        }
    }

    /// Memoizes the outcome so it can be observed more than once.
    ///
    /// The underlying computation runs at most once; every clone of the
    /// returned future yields the same outcome.
    pub fn shared(self) -> Shared<Self>
    where
        A: Clone,
    {
        FutureExt::shared(self)
    }
}

impl<A: Send + 'static> From<A> for Pending<A> {
    fn from(value: A) -> Self {
        Self::ready(value)
    }
}

impl<A> std::fmt::Debug for Pending<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match self.state {
            PendingState::Ready { .. } => "Ready",
            PendingState::Cancelled => "Cancelled",
            PendingState::Running { .. } => "Running",
            PendingState::Completed => "Completed",
        };
        formatter
            .debug_struct("Pending")
            .field("state", &state)
            .field("cancellable", &self.token.can_be_cancelled())
            .finish()
    }
}

static_assertions::assert_impl_all!(Pending<i32>: Send, Unpin);
static_assertions::assert_impl_all!(Pending<String>: Send, Unpin);
