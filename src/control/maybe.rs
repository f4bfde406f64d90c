//! Maybe type - an optional value.
//!
//! This module provides the `Maybe<T>` type, which holds either nothing
//! (`Empty`) or exactly one value (`Present(T)`). Absence is only ever
//! represented by the `Empty` tag; a `Present` always carries a value.
//!
//! # Examples
//!
//! ```rust
//! use mettle::control::Maybe;
//!
//! let port = Maybe::from_value("8080")
//!     .map(|text| text.parse::<u16>().ok())
//!     .flat_map(Maybe::from)
//!     .filter(|port| *port > 1024);
//! assert_eq!(port.value_or_default(80), 8080);
//!
//! let missing: Maybe<u16> = Maybe::none();
//! assert_eq!(missing.value_or_default(80), 80);
//! ```

use std::fmt;

use super::attempt::Try;
use super::either::Either;
use super::error::{EmptyValue, InvalidArgument};
use super::failure::Failure;

/// A container holding zero or one value.
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
///
/// # Examples
///
/// ```rust
/// use mettle::control::Maybe;
///
/// let present = Maybe::from_value(21);
/// assert_eq!(present.map(|x| x * 2), Maybe::Present(42));
///
/// let empty: Maybe<i32> = Maybe::none();
/// assert_eq!(empty.map(|x| x * 2), Maybe::Empty);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Maybe<T> {
    /// No value.
    #[default]
    Empty,
    /// A value.
    Present(T),
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates an empty `Maybe`.
    #[inline]
    pub const fn none() -> Self {
        Self::Empty
    }

    /// Creates a `Maybe` holding `value`.
    #[inline]
    pub const fn from_value(value: T) -> Self {
        Self::Present(value)
    }

    /// Runs `computation` and wraps its result, treating `None` as `Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mettle::control::Maybe;
    ///
    /// let values = vec![1, 2, 3];
    /// assert_eq!(Maybe::of(|| values.first().copied()), Maybe::Present(1));
    /// assert_eq!(Maybe::of(|| values.get(10).copied()), Maybe::Empty);
    /// ```
    #[inline]
    pub fn of<F>(computation: F) -> Self
    where
        F: FnOnce() -> Option<T>,
    {
        computation().into()
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Present` value.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if this is `Empty`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    // =========================================================================
    // Reference Access
    // =========================================================================

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Empty => Maybe::Empty,
        }
    }

    /// Converts from `&mut Maybe<T>` to `Maybe<&mut T>`.
    #[inline]
    pub fn as_mut(&mut self) -> Maybe<&mut T> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Empty => Maybe::Empty,
        }
    }

    /// Returns an iterator over the contained value, if any.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_option().into_iter()
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the contained value.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyValue`] if this is `Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mettle::control::{EmptyValue, Maybe};
    ///
    /// assert_eq!(Maybe::from_value(1).value(), Ok(1));
    /// assert_eq!(Maybe::<i32>::none().value(), Err(EmptyValue));
    /// ```
    #[inline]
    pub fn value(self) -> Result<T, EmptyValue> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Empty => Err(EmptyValue),
        }
    }

    /// Converts into an `Option<T>`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Empty => None,
        }
    }

    /// Returns the contained value or `default`.
    #[inline]
    pub fn value_or_default(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Empty => default,
        }
    }

    /// Returns the contained value or computes one from `default`.
    ///
    /// `default` is only invoked when this is `Empty`.
    #[inline]
    pub fn value_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Empty => default(),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the contained value.
    ///
    /// `Empty` stays `Empty`; `Present(v)` becomes `Present(function(v))`.
    #[inline]
    pub fn map<R, F>(self, function: F) -> Maybe<R>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Present(value) => Maybe::Present(function(value)),
            Self::Empty => Maybe::Empty,
        }
    }

    /// Applies a `Maybe`-returning function to the contained value.
    ///
    /// This is monadic bind: the result is whatever `function` returns, never
    /// a nested `Maybe<Maybe<R>>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mettle::control::Maybe;
    ///
    /// let half = |x: i32| if x % 2 == 0 { Maybe::Present(x / 2) } else { Maybe::Empty };
    /// assert_eq!(Maybe::from_value(8).flat_map(half), Maybe::Present(4));
    /// assert_eq!(Maybe::from_value(3).flat_map(half), Maybe::Empty);
    /// ```
    #[inline]
    pub fn flat_map<R, F>(self, function: F) -> Maybe<R>
    where
        F: FnOnce(T) -> Maybe<R>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Empty => Maybe::Empty,
        }
    }

    /// Keeps the value only if it satisfies `predicate`.
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) if predicate(&value) => Self::Present(value),
            _ => Self::Empty,
        }
    }

    /// Applies `function` to the value if present, else returns `default`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mettle::control::Maybe;
    ///
    /// assert_eq!(Maybe::from_value("abc").select_or_default(str::len, 0), 3);
    /// assert_eq!(Maybe::<&str>::none().select_or_default(str::len, 0), 0);
    /// ```
    #[inline]
    pub fn select_or_default<R, F>(self, function: F, default: R) -> R
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Empty => default,
        }
    }

    /// Applies `function` to the value if present, else invokes `default`.
    #[inline]
    pub fn select_or_else<R, F, D>(self, function: F, default: D) -> R
    where
        F: FnOnce(T) -> R,
        D: FnOnce() -> R,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Empty => default(),
        }
    }

    /// Pairs this value with another, if both are present.
    #[inline]
    pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
        match (self, other) {
            (Self::Present(left), Maybe::Present(right)) => Maybe::Present((left, right)),
            _ => Maybe::Empty,
        }
    }

    // =========================================================================
    // Alternatives
    // =========================================================================

    /// Returns `self` if present, otherwise `alternative`.
    #[inline]
    #[must_use]
    pub fn or(self, alternative: Self) -> Self {
        match self {
            Self::Present(_) => self,
            Self::Empty => alternative,
        }
    }

    /// Returns `self` if present, otherwise the `Maybe` produced by `alternative`.
    #[inline]
    #[must_use]
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(_) => self,
            Self::Empty => alternative(),
        }
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Invokes exactly one of the callbacks depending on the tag.
    ///
    /// Returns `self` so calls can be chained.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mettle::control::Maybe;
    ///
    /// let mut seen = Vec::new();
    /// let mut empties = 0;
    /// Maybe::from_value(1).do_with(|value| seen.push(*value), || empties += 1);
    /// Maybe::<i32>::none().do_with(|value| seen.push(*value), || empties += 1);
    /// assert_eq!(seen, vec![1]);
    /// assert_eq!(empties, 1);
    /// ```
    #[inline]
    pub fn do_with<F, G>(self, on_value: F, on_empty: G) -> Self
    where
        F: FnOnce(&T),
        G: FnOnce(),
    {
        match &self {
            Self::Present(value) => on_value(value),
            Self::Empty => on_empty(),
        }
        self
    }

    /// Invokes `on_value` if a value is present.
    #[inline]
    #[must_use]
    pub fn do_if_present<F>(self, on_value: F) -> Self
    where
        F: FnOnce(&T),
    {
        self.do_with(on_value, || {})
    }

    /// Invokes `on_empty` if this is `Empty`.
    #[inline]
    #[must_use]
    pub fn do_if_empty<G>(self, on_empty: G) -> Self
    where
        G: FnOnce(),
    {
        self.do_with(|_| {}, on_empty)
    }

    /// Like [`do_with`](Self::do_with), with either callback omitted.
    ///
    /// An omitted callback is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] when both callbacks are `None`, before
    /// looking at the container.
    pub fn do_optional<F, G>(
        &self,
        on_value: Option<F>,
        on_empty: Option<G>,
    ) -> Result<(), InvalidArgument>
    where
        F: FnOnce(&T),
        G: FnOnce(),
    {
        if on_value.is_none() && on_empty.is_none() {
            return Err(InvalidArgument::new(
                "on_value",
                "at least one callback must be supplied",
            ));
        }
        match self {
            Self::Present(value) => on_value.map_or((), |callback| callback(value)),
            Self::Empty => on_empty.map_or((), |callback| callback()),
        }
        Ok(())
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into an `Either`: `Present(v)` becomes `Left(v)`, `Empty`
    /// becomes `Right(other)`.
    #[inline]
    pub fn as_either<R>(self, other: R) -> Either<T, R> {
        match self {
            Self::Present(value) => Either::Left(value),
            Self::Empty => Either::Right(other),
        }
    }

    /// Like [`as_either`](Self::as_either), but only computes the right value
    /// when this is `Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mettle::control::{Either, Maybe};
    ///
    /// let either = Maybe::from_value(1).as_either_with(|| unreachable!());
    /// assert_eq!(either, Either::<i32, String>::Left(1));
    /// ```
    #[inline]
    pub fn as_either_with<R, F>(self, other: F) -> Either<T, R>
    where
        F: FnOnce() -> R,
    {
        match self {
            Self::Present(value) => Either::Left(value),
            Self::Empty => Either::Right(other()),
        }
    }

    /// Converts into a `Try`: `Empty` becomes a failure carrying [`EmptyValue`].
    #[inline]
    pub fn as_try(self) -> Try<T> {
        match self {
            Self::Present(value) => Try::Success(value),
            Self::Empty => Try::Failure(Failure::from(EmptyValue)),
        }
    }
}

impl<T: Default> Maybe<T> {
    /// Returns the contained value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        self.value_or_else(T::default)
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        self.flat_map(|inner| inner)
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => formatter.debug_tuple("Present").field(value).finish(),
            Self::Empty => formatter.write_str("Empty"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => write!(formatter, "Present({value})"),
            Self::Empty => formatter.write_str("Empty"),
        }
    }
}

// =============================================================================
// Conversions and Iteration
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Empty,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, V> FromIterator<Maybe<T>> for Maybe<V>
where
    V: FromIterator<T>,
{
    /// Collects all values, or `Empty` if any element is `Empty`.
    fn from_iter<I: IntoIterator<Item = Maybe<T>>>(iterable: I) -> Self {
        iterable
            .into_iter()
            .map(Maybe::into_option)
            .collect::<Option<V>>()
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_is_empty() {
        assert_eq!(Maybe::<i32>::default(), Maybe::Empty);
    }

    #[rstest]
    #[case(Maybe::Present(4), Maybe::Present(4))]
    #[case(Maybe::Present(3), Maybe::Empty)]
    #[case(Maybe::Empty, Maybe::Empty)]
    fn filter_keeps_even(#[case] input: Maybe<i32>, #[case] expected: Maybe<i32>) {
        assert_eq!(input.filter(|x| x % 2 == 0), expected);
    }

    #[rstest]
    fn select_or_else_is_lazy() {
        let result = Maybe::from_value(2).select_or_else(|x| x + 1, || unreachable!());
        assert_eq!(result, 3);
    }

    #[rstest]
    fn or_else_is_lazy_when_present() {
        let result = Maybe::from_value(1).or_else(|| unreachable!());
        assert_eq!(result, Maybe::Present(1));
    }

    #[rstest]
    fn do_optional_runs_supplied_callback_only() {
        let mut count = 0;
        Maybe::<i32>::none()
            .do_optional(None::<fn(&i32)>, Some(|| count += 1))
            .unwrap();
        Maybe::from_value(5)
            .do_optional(None::<fn(&i32)>, Some(|| count += 10))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[rstest]
    fn do_optional_rejects_both_absent() {
        let result = Maybe::from_value(1).do_optional(None::<fn(&i32)>, None::<fn()>);
        assert!(result.is_err());
    }

    #[rstest]
    fn as_try_on_empty_fails_with_empty_value() {
        let attempt = Maybe::<i32>::none().as_try();
        assert!(attempt.is_failure());
        assert!(attempt.error().is_some_and(|failure| failure.is::<EmptyValue>()));
    }

    #[rstest]
    fn collect_all_present() {
        let all: Maybe<Vec<i32>> = vec![Maybe::Present(1), Maybe::Present(2)]
            .into_iter()
            .collect();
        assert_eq!(all, Maybe::Present(vec![1, 2]));

        let some_missing: Maybe<Vec<i32>> = vec![Maybe::Present(1), Maybe::Empty]
            .into_iter()
            .collect();
        assert_eq!(some_missing, Maybe::Empty);
    }

    #[rstest]
    fn display_formats_tag() {
        assert_eq!(Maybe::from_value(3).to_string(), "Present(3)");
        assert_eq!(Maybe::<i32>::none().to_string(), "Empty");
    }
}
