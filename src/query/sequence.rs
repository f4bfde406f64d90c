//! First, last and single element queries over iterators.
//!
//! Every query answers with a [`Maybe`]: no match is `Empty`, never an error.
//! The one exception is the `single` family, which fails with
//! [`MultipleMatches`] as soon as a second match shows up.
//!
//! # Consumption
//!
//! | Query    | Stops after               |
//! |----------|---------------------------|
//! | `first`  | the first match           |
//! | `last`   | the end of the sequence   |
//! | `single` | the second match, or end  |

use crate::control::{Maybe, MultipleMatches};

// =============================================================================
// SequenceExt
// =============================================================================

/// Queries over any iterator.
///
/// # Examples
///
/// ```rust
/// use mettle::control::Maybe;
/// use mettle::query::SequenceExt;
///
/// let numbers = [3, 8, 5, 10];
/// assert_eq!(numbers.iter().copied().first_matching(|x| x % 2 == 0), Maybe::Present(8));
/// assert_eq!(numbers.iter().copied().last_matching(|x| x % 2 == 0), Maybe::Present(10));
/// assert!(numbers.iter().copied().single_matching(|x| x % 2 == 0).is_err());
/// ```
pub trait SequenceExt: Iterator {
    /// The first element satisfying `predicate`. Stops at the match.
    fn first_matching<P>(mut self, predicate: P) -> Maybe<Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        self.find(predicate).into()
    }

    /// The first element, if any.
    fn first_value(mut self) -> Maybe<Self::Item>
    where
        Self: Sized,
    {
        self.next().into()
    }

    /// The last element satisfying `predicate`. Consumes the whole sequence.
    fn last_matching<P>(self, mut predicate: P) -> Maybe<Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        self.fold(Maybe::Empty, |found, item| {
            if predicate(&item) {
                Maybe::Present(item)
            } else {
                found
            }
        })
    }

    /// The last element, if any.
    fn last_value(self) -> Maybe<Self::Item>
    where
        Self: Sized,
    {
        self.last().into()
    }

    /// The only element satisfying `predicate`.
    ///
    /// # Errors
    ///
    /// Returns [`MultipleMatches`] when a second element matches. The
    /// sequence is not pulled past that second match.
    fn single_matching<P>(mut self, mut predicate: P) -> Result<Maybe<Self::Item>, MultipleMatches>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        let Some(found) = self.find(&mut predicate) else {
            return Ok(Maybe::Empty);
        };
        if self.any(|item| predicate(&item)) {
            tracing::debug!("single_matching found a second match");
            return Err(MultipleMatches);
        }
        Ok(Maybe::Present(found))
    }

    /// The only element.
    ///
    /// # Errors
    ///
    /// Returns [`MultipleMatches`] when the sequence has two or more elements.
    fn single_value(self) -> Result<Maybe<Self::Item>, MultipleMatches>
    where
        Self: Sized,
    {
        self.single_matching(|_| true)
    }
}

impl<I: Iterator> SequenceExt for I {}

// =============================================================================
// NullableSequenceExt
// =============================================================================

/// Queries over iterators of `Option<T>` that skip `None` elements.
///
/// A `None` element never matches and is never passed to the predicate.
///
/// ```rust
/// use mettle::control::Maybe;
/// use mettle::query::NullableSequenceExt;
///
/// let names = vec![None, Some("ada"), None, Some("grace")];
/// assert_eq!(names.clone().into_iter().first_not_null(|_| true), Maybe::Present("ada"));
/// assert_eq!(names.into_iter().single_not_null(|name| name.len() > 3), Ok(Maybe::Present("grace")));
/// ```
pub trait NullableSequenceExt<T>: Iterator<Item = Option<T>> {
    /// See [`SequenceExt::first_matching`].
    fn first_not_null<P>(self, predicate: P) -> Maybe<T>
    where
        Self: Sized,
        P: FnMut(&T) -> bool,
    {
        self.flatten().first_matching(predicate)
    }

    /// See [`SequenceExt::last_matching`].
    fn last_not_null<P>(self, predicate: P) -> Maybe<T>
    where
        Self: Sized,
        P: FnMut(&T) -> bool,
    {
        self.flatten().last_matching(predicate)
    }

    /// See [`SequenceExt::single_matching`].
    ///
    /// # Errors
    ///
    /// Returns [`MultipleMatches`] when two non-`None` elements match.
    fn single_not_null<P>(self, predicate: P) -> Result<Maybe<T>, MultipleMatches>
    where
        Self: Sized,
        P: FnMut(&T) -> bool,
    {
        self.flatten().single_matching(predicate)
    }
}

impl<T, I: Iterator<Item = Option<T>>> NullableSequenceExt<T> for I {}
