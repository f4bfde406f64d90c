//! Functor type class - mapping over container values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! Both laws hold for [`Maybe`], [`Try`] and the left side of [`Either`];
//! `Empty`, `Failure` and `Right` short-circuit at the first step.
//!
//! # Examples
//!
//! ```rust
//! use mettle::control::{Maybe, Try};
//! use mettle::typeclass::Functor;
//!
//! fn describe<F: Functor<Inner = i32>>(container: F) -> F::WithType<String> {
//!     container.fmap(|n| format!("#{n}"))
//! }
//!
//! assert_eq!(describe(Maybe::from_value(1)), Maybe::Present("#1".to_string()));
//! assert_eq!(describe(Try::success(2)), Try::success("#2".to_string()));
//! ```

use super::higher::TypeConstructor;
use crate::control::{Either, Maybe, Try, catch};

/// Types whose contents can be transformed while keeping their shape.
pub trait Functor: TypeConstructor {
    /// Applies `function` to the contained value.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies `function` to a reference to the contained value.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the contained value with `value`.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the contained value.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

/// Panics raised by the mapped function are captured, as in [`Try::map`].
impl<A> Functor for Try<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Try<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    fn fmap_ref<B, F>(&self, function: F) -> Try<B>
    where
        F: FnOnce(&A) -> B,
    {
        match self {
            Self::Success(value) => catch(|| function(value)).into(),
            Self::Failure(failure) => Try::Failure(failure.clone()),
        }
    }
}

/// Maps the left side; the right side is cloned through by `fmap_ref`.
impl<L, R: Clone> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<B, R>
    where
        F: FnOnce(L) -> B,
    {
        self.map_left(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Either<B, R>
    where
        F: FnOnce(&L) -> B,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value.clone()),
        }
    }
}
