//! Monad type class - sequencing container-producing computations.
//!
//! # Laws
//!
//! 1. **Left Identity**: `pure(a).flat_map(f) == f(a)`
//! 2. **Right Identity**: `m.flat_map(pure) == m`
//! 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`

use super::functor::Functor;
use crate::control::{Either, Maybe, Try};

/// Containers that support lifting a value and monadic bind.
pub trait Monad: Functor {
    /// Lifts a value into the container.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Applies a container-returning function, without nesting.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`flat_map`](Self::flat_map).
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Present(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        Self::flat_map(self, function)
    }
}

impl<A> Monad for Try<A> {
    #[inline]
    fn pure<B>(value: B) -> Try<B> {
        Try::Success(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Try<B>
    where
        F: FnOnce(A) -> Try<B>,
    {
        Self::flat_map(self, function)
    }
}

impl<L, R: Clone> Monad for Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Either<B, R> {
        Either::Left(value)
    }

    fn flat_map<B, F>(self, function: F) -> Either<B, R>
    where
        F: FnOnce(L) -> Either<B, R>,
    {
        match self {
            Self::Left(value) => function(value),
            Self::Right(value) => Either::Right(value),
        }
    }
}
