//! Asynchronous combinators for `Maybe`.
//!
//! Each method here is the synchronous [`Maybe`] combinator lifted through
//! [`Pending::fmap`] or [`Pending::then`], so it keeps the fast path and the
//! cancellation rules of the core.

use std::future::Future;

use futures::FutureExt;

use super::pending::Pending;
use crate::control::{Either, Maybe, Try};

/// A pending `Maybe`.
pub type AsyncMaybe<T> = Pending<Maybe<T>>;

impl<T: Send + 'static> Pending<Maybe<T>> {
    /// Wraps a future whose `None` result means `Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use futures::executor::block_on;
    /// use mettle::control::Maybe;
    /// use mettle::effect::{AsyncMaybe, Pending};
    ///
    /// let found: AsyncMaybe<i32> = Pending::from_option_future(async { Some(3) });
    /// assert_eq!(block_on(found), Ok(Maybe::Present(3)));
    /// ```
    pub fn from_option_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Option<T>> + Send + 'static,
    {
        Self::from_future(future.map(Maybe::from))
    }

    /// See [`Maybe::map`].
    pub fn map<R, F>(self, function: F) -> AsyncMaybe<R>
    where
        F: FnOnce(T) -> R + Send + 'static,
        R: Send + 'static,
    {
        self.fmap(move |maybe| maybe.map(function))
    }

    /// See [`Maybe::flat_map`].
    pub fn flat_map<R, F>(self, function: F) -> AsyncMaybe<R>
    where
        F: FnOnce(T) -> Maybe<R> + Send + 'static,
        R: Send + 'static,
    {
        self.fmap(move |maybe| maybe.flat_map(function))
    }

    /// Maps the value with an asynchronous function.
    pub fn map_async<R, F, Fut>(self, function: F) -> AsyncMaybe<R>
    where
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: Send + 'static,
    {
        self.flat_map_async(move |value| function(value).map(Maybe::Present))
    }

    /// Binds the value to an asynchronous `Maybe`-producing function.
    ///
    /// `Empty` short-circuits: `function` is never called.
    pub fn flat_map_async<R, F, Fut>(self, function: F) -> AsyncMaybe<R>
    where
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = Maybe<R>> + Send + 'static,
        R: Send + 'static,
    {
        self.and_then(move |maybe| match maybe {
            Maybe::Present(value) => Pending::from_future(function(value)),
            Maybe::Empty => Pending::ready(Maybe::Empty),
        })
    }

    /// See [`Maybe::filter`].
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool + Send + 'static,
    {
        self.fmap(move |maybe| maybe.filter(predicate))
    }

    /// Filters with an asynchronous predicate.
    pub fn filter_async<P, Fut>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> Fut + Send + 'static,
        Fut: Future<Output = bool> + Send + 'static,
    {
        self.flat_map_async(move |value| {
            let keep = predicate(&value);
            async move {
                if keep.await {
                    Maybe::Present(value)
                } else {
                    Maybe::Empty
                }
            }
        })
    }

    /// See [`Maybe::select_or_default`].
    pub fn select_or_default<R, F>(self, function: F, default: R) -> Pending<R>
    where
        F: FnOnce(T) -> R + Send + 'static,
        R: Send + 'static,
    {
        self.fmap(move |maybe| maybe.select_or_default(function, default))
    }

    /// See [`Maybe::select_or_else`].
    pub fn select_or_else<R, F, D>(self, function: F, default: D) -> Pending<R>
    where
        F: FnOnce(T) -> R + Send + 'static,
        D: FnOnce() -> R + Send + 'static,
        R: Send + 'static,
    {
        self.fmap(move |maybe| maybe.select_or_else(function, default))
    }

    /// See [`Maybe::or`].
    pub fn or(self, alternative: Maybe<T>) -> Self {
        self.fmap(move |maybe| maybe.or(alternative))
    }

    /// Falls back to an asynchronously produced `Maybe` when `Empty`.
    pub fn or_else_async<F, Fut>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Maybe<T>> + Send + 'static,
    {
        self.and_then(move |maybe| match maybe {
            Maybe::Present(_) => Pending::ready(maybe),
            Maybe::Empty => Pending::from_future(alternative()),
        })
    }

    /// See [`Maybe::value_or_default`].
    pub fn value_or_default(self, default: T) -> Pending<T> {
        self.fmap(move |maybe| maybe.value_or_default(default))
    }

    /// See [`Maybe::do_with`].
    pub fn do_with<F, G>(self, on_value: F, on_empty: G) -> Self
    where
        F: FnOnce(&T) + Send + 'static,
        G: FnOnce() + Send + 'static,
    {
        self.fmap(move |maybe| maybe.do_with(on_value, on_empty))
    }

    /// Runs one of two asynchronous side effects, then yields the `Maybe` unchanged.
    pub fn do_async<F, FutV, G, FutE>(self, on_value: F, on_empty: G) -> Self
    where
        F: FnOnce(&T) -> FutV + Send + 'static,
        FutV: Future<Output = ()> + Send + 'static,
        G: FnOnce() -> FutE + Send + 'static,
        FutE: Future<Output = ()> + Send + 'static,
    {
        self.then(move |maybe| {
            let effect = match &maybe {
                Maybe::Present(value) => on_value(value).left_future(),
                Maybe::Empty => on_empty().right_future(),
            };
            async move {
                effect.await;
                maybe
            }
        })
    }

    /// See [`Maybe::as_either`].
    pub fn as_either<R>(self, other: R) -> Pending<Either<T, R>>
    where
        R: Send + 'static,
    {
        self.fmap(move |maybe| maybe.as_either(other))
    }

    /// See [`Maybe::as_try`].
    pub fn as_try(self) -> Pending<Try<T>> {
        self.fmap(Maybe::as_try)
    }
}
