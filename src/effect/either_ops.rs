//! Asynchronous combinators for `Either`.

use std::future::Future;

use futures::FutureExt;

use super::pending::Pending;
use crate::control::{Either, Maybe};

/// A pending `Either`.
pub type AsyncEither<L, R> = Pending<Either<L, R>>;

impl<L, R> Pending<Either<L, R>>
where
    L: Send + 'static,
    R: Send + 'static,
{
    /// See [`Either::map_left`].
    pub fn map_left<T, F>(self, function: F) -> AsyncEither<T, R>
    where
        F: FnOnce(L) -> T + Send + 'static,
        T: Send + 'static,
    {
        self.fmap(move |either| either.map_left(function))
    }

    /// See [`Either::map_right`].
    pub fn map_right<T, F>(self, function: F) -> AsyncEither<L, T>
    where
        F: FnOnce(R) -> T + Send + 'static,
        T: Send + 'static,
    {
        self.fmap(move |either| either.map_right(function))
    }

    /// Maps the left side with an asynchronous function.
    pub fn map_left_async<T, F, Fut>(self, function: F) -> AsyncEither<T, R>
    where
        F: FnOnce(L) -> Fut + Send + 'static,
        Fut: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        self.then(move |either| match either {
            Either::Left(value) => function(value).map(Either::Left).left_future(),
            Either::Right(value) => futures::future::ready(Either::Right(value)).right_future(),
        })
    }

    /// Maps the right side with an asynchronous function.
    pub fn map_right_async<T, F, Fut>(self, function: F) -> AsyncEither<L, T>
    where
        F: FnOnce(R) -> Fut + Send + 'static,
        Fut: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        self.then(move |either| match either {
            Either::Left(value) => futures::future::ready(Either::Left(value)).left_future(),
            Either::Right(value) => function(value).map(Either::Right).right_future(),
        })
    }

    /// See [`Either::left_or`].
    pub fn left_or(self, default: L) -> Pending<L> {
        self.fmap(move |either| either.left_or(default))
    }

    /// See [`Either::right_or`].
    pub fn right_or(self, default: R) -> Pending<R> {
        self.fmap(move |either| either.right_or(default))
    }

    /// See [`Either::do_with`].
    pub fn do_with<F, G>(self, on_left: F, on_right: G) -> Self
    where
        F: FnOnce(&L) + Send + 'static,
        G: FnOnce(&R) + Send + 'static,
    {
        self.fmap(move |either| either.do_with(on_left, on_right))
    }

    /// See [`Either::do_left`].
    pub fn do_left<F>(self, on_left: F) -> Self
    where
        F: FnOnce(&L) + Send + 'static,
    {
        self.fmap(move |either| either.do_left(on_left))
    }

    /// See [`Either::do_right`].
    pub fn do_right<G>(self, on_right: G) -> Self
    where
        G: FnOnce(&R) + Send + 'static,
    {
        self.fmap(move |either| either.do_right(on_right))
    }

    /// See [`Either::swap`].
    pub fn swap(self) -> AsyncEither<R, L> {
        self.fmap(Either::swap)
    }

    /// See [`Either::to_maybe_left`].
    pub fn to_maybe_left(self) -> Pending<Maybe<L>> {
        self.fmap(Either::to_maybe_left)
    }

    /// See [`Either::to_maybe_right`].
    pub fn to_maybe_right(self) -> Pending<Maybe<R>> {
        self.fmap(Either::to_maybe_right)
    }
}

impl<L, R> Pending<Either<L, R>>
where
    L: Default + Send + 'static,
    R: Send + 'static,
{
    /// See [`Either::left_or_default`].
    pub fn left_or_default(self) -> Pending<L> {
        self.fmap(Either::left_or_default)
    }
}

impl<L, R> Pending<Either<L, R>>
where
    L: Send + 'static,
    R: Default + Send + 'static,
{
    /// See [`Either::right_or_default`].
    pub fn right_or_default(self) -> Pending<R> {
        self.fmap(Either::right_or_default)
    }
}
