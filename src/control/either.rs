//! Either type - a value that is one of two types.
//!
//! `Either<L, R>` holds exactly one of a `Left(L)` or a `Right(R)`. In this
//! crate the left side carries the primary value: a present [`Maybe`]
//! converts to `Left`, an empty one to `Right`, and a successful [`Try`](super::Try)
//! converts to `Left`.
//!
//! # Examples
//!
//! ```rust
//! use mettle::control::Either;
//!
//! let parsed: Either<i32, String> = "42"
//!     .parse::<i32>()
//!     .map_err(|error| error.to_string())
//!     .into();
//! assert_eq!(parsed, Either::Left(42));
//!
//! let description = parsed.fold(
//!     |n| format!("number {n}"),
//!     |message| format!("error: {message}"),
//! );
//! assert_eq!(description, "number 42");
//! ```

use std::fmt;

use super::error::InvalidArgument;
use super::maybe::Maybe;

/// A value that is one of two types.
///
/// # Type Parameters
///
/// * `L` - The type of the left (primary) value
/// * `R` - The type of the right (alternative) value
///
/// # Examples
///
/// ```rust
/// use mettle::control::Either;
///
/// let value: Either<i32, String> = Either::Left(21);
/// assert_eq!(value.map_left(|x| x * 2), Either::Left(42));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The left variant, carrying the primary value.
    Left(L),
    /// The right variant, carrying the alternative.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts the `Either` into an `Option<L>`.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts the `Either` into an `Option<R>`.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns the left value, or `default` if this is a `Right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mettle::control::Either;
    ///
    /// let right: Either<i32, &str> = Either::Right("nope");
    /// assert_eq!(right.left_or(-1), -1);
    /// ```
    #[inline]
    pub fn left_or(self, default: L) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => default,
        }
    }

    /// Returns the left value, or computes one from the right value.
    #[inline]
    pub fn left_or_else<F>(self, default: F) -> L
    where
        F: FnOnce(R) -> L,
    {
        match self {
            Self::Left(value) => value,
            Self::Right(value) => default(value),
        }
    }

    /// Returns the right value, or `default` if this is a `Left`.
    #[inline]
    pub fn right_or(self, default: R) -> R {
        match self {
            Self::Left(_) => default,
            Self::Right(value) => value,
        }
    }

    /// Returns the right value, or computes one from the left value.
    #[inline]
    pub fn right_or_else<F>(self, default: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Self::Left(value) => default(value),
            Self::Right(value) => value,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the left value, passing a `Right` through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mettle::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// let result = right.map_left(|x: i32| x * 2);
    /// assert_eq!(result, Either::Right("hello".to_string()));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies a function to the right value, passing a `Left` through unchanged.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies one of two functions depending on the side.
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Eliminates the `Either` by applying one of two functions.
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Swaps the sides: `Left(a)` becomes `Right(a)` and vice versa.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Invokes exactly one of the callbacks depending on the side.
    #[inline]
    pub fn do_with<F, G>(self, on_left: F, on_right: G) -> Self
    where
        F: FnOnce(&L),
        G: FnOnce(&R),
    {
        match &self {
            Self::Left(value) => on_left(value),
            Self::Right(value) => on_right(value),
        }
        self
    }

    /// Invokes `on_left` if this is a `Left`.
    #[inline]
    #[must_use]
    pub fn do_left<F>(self, on_left: F) -> Self
    where
        F: FnOnce(&L),
    {
        self.do_with(on_left, |_| {})
    }

    /// Invokes `on_right` if this is a `Right`.
    #[inline]
    #[must_use]
    pub fn do_right<G>(self, on_right: G) -> Self
    where
        G: FnOnce(&R),
    {
        self.do_with(|_| {}, on_right)
    }

    /// Like [`do_with`](Self::do_with), with either callback omitted.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] when both callbacks are `None`.
    pub fn do_optional<F, G>(
        &self,
        on_left: Option<F>,
        on_right: Option<G>,
    ) -> Result<(), InvalidArgument>
    where
        F: FnOnce(&L),
        G: FnOnce(&R),
    {
        if on_left.is_none() && on_right.is_none() {
            return Err(InvalidArgument::new(
                "on_left",
                "at least one callback must be supplied",
            ));
        }
        match self {
            Self::Left(value) => on_left.map_or((), |callback| callback(value)),
            Self::Right(value) => on_right.map_or((), |callback| callback(value)),
        }
        Ok(())
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the left value.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Right` value.
    #[inline]
    pub fn unwrap_left(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => panic!("called `Either::unwrap_left()` on a `Right` value"),
        }
    }

    /// Returns the right value.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Left` value.
    #[inline]
    pub fn unwrap_right(self) -> R {
        match self {
            Self::Left(_) => panic!("called `Either::unwrap_right()` on a `Left` value"),
            Self::Right(value) => value,
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// The left value becomes `Present`; a `Right` becomes `Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mettle::control::{Either, Maybe};
    ///
    /// let left: Either<i32, &str> = Either::Left(1);
    /// assert_eq!(left.to_maybe_left(), Maybe::Present(1));
    /// assert_eq!(left.to_maybe_right(), Maybe::Empty);
    /// ```
    #[inline]
    pub fn to_maybe_left(self) -> Maybe<L> {
        self.left().into()
    }

    /// The right value becomes `Present`; a `Left` becomes `Empty`.
    #[inline]
    pub fn to_maybe_right(self) -> Maybe<R> {
        self.right().into()
    }
}

impl<L: Default, R> Either<L, R> {
    /// Returns the left value, or `L::default()` if this is a `Right`.
    #[inline]
    pub fn left_or_default(self) -> L {
        self.left_or_else(|_| L::default())
    }
}

impl<L, R: Default> Either<L, R> {
    /// Returns the right value, or `R::default()` if this is a `Left`.
    #[inline]
    pub fn right_or_default(self) -> R {
        self.right_or_else(|_| R::default())
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L, R> From<Result<L, R>> for Either<L, R> {
    /// `Ok(l)` becomes `Left(l)` and `Err(r)` becomes `Right(r)`.
    #[inline]
    fn from(result: Result<L, R>) -> Self {
        match result {
            Ok(value) => Self::Left(value),
            Err(error) => Self::Right(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<L, R> {
    /// `Left(l)` becomes `Ok(l)` and `Right(r)` becomes `Err(r)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Ok(value),
            Either::Right(value) => Err(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn result_conversion_roundtrip() {
        let ok: Result<i32, String> = Ok(42);
        let either: Either<i32, String> = ok.into();
        assert_eq!(either, Either::Left(42));
        let result: Result<i32, String> = either.into();
        assert_eq!(result, Ok(42));
    }

    #[rstest]
    #[case(Either::Left(1), 1)]
    #[case(Either::Right("x"), 0)]
    fn left_or_default_substitutes(#[case] input: Either<i32, &str>, #[case] expected: i32) {
        assert_eq!(input.left_or_default(), expected);
    }

    #[rstest]
    fn do_with_dispatches_on_side() {
        let mut lefts = 0;
        let mut rights = 0;
        let _ = Either::<i32, i32>::Right(1).do_with(|_| lefts += 1, |_| rights += 1);
        assert_eq!((lefts, rights), (0, 1));
    }

    #[rstest]
    fn do_optional_rejects_both_absent() {
        let either: Either<i32, i32> = Either::Left(1);
        assert!(either.do_optional(None::<fn(&i32)>, None::<fn(&i32)>).is_err());
    }

    #[rstest]
    fn swap_twice_is_identity() {
        let either: Either<i32, String> = Either::Right("r".to_string());
        assert_eq!(either.clone().swap().swap(), either);
    }
}
