//! Uniform access to "the value" of a container.
//!
//! Each container has one state that carries its primary value: `Present`,
//! `Left` and `Success`. [`Extract`] exposes that state generically so the
//! sequence helpers can pull values out of a mixed stream of containers.

use crate::control::{Either, Maybe, Try};

/// Containers with a distinguished value-carrying state.
///
/// # Examples
///
/// ```rust
/// use mettle::control::{Either, Maybe};
/// use mettle::typeclass::Extract;
///
/// assert_eq!(Maybe::from_value(1).into_value(), Some(1));
/// assert!(!Either::<i32, &str>::Right("no").has_value());
/// ```
pub trait Extract {
    /// The type of the carried value.
    type Value;

    /// Returns `true` if the container is in its value-carrying state.
    fn has_value(&self) -> bool {
        self.value_ref().is_some()
    }

    /// Borrows the carried value.
    fn value_ref(&self) -> Option<&Self::Value>;

    /// Takes the carried value, discarding any other state.
    fn into_value(self) -> Option<Self::Value>;
}

impl<T> Extract for Maybe<T> {
    type Value = T;

    fn value_ref(&self) -> Option<&T> {
        self.as_ref().into_option()
    }

    fn into_value(self) -> Option<T> {
        self.into_option()
    }
}

impl<L, R> Extract for Either<L, R> {
    type Value = L;

    fn value_ref(&self) -> Option<&L> {
        self.left_ref()
    }

    fn into_value(self) -> Option<L> {
        self.left()
    }
}

impl<T> Extract for Try<T> {
    type Value = T;

    fn value_ref(&self) -> Option<&T> {
        self.value()
    }

    fn into_value(self) -> Option<T> {
        self.into_result().ok()
    }
}

impl<T> Extract for Option<T> {
    type Value = T;

    fn value_ref(&self) -> Option<&T> {
        self.as_ref()
    }

    fn into_value(self) -> Option<T> {
        self
    }
}
