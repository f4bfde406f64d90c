//! Queries over streams with asynchronous predicates.
//!
//! Predicates are awaited one at a time, in stream order; no two predicate
//! futures are ever alive at once. Pulling the next element and awaiting a
//! predicate both race the supplied [`CancellationToken`], cancellation
//! first, so an already cancelled token stops a query before it pulls.

use std::future::Future;
use std::pin::pin;

use futures::stream::{self, Stream, StreamExt};

use crate::control::{Cancelled, Error, Maybe, MultipleMatches};
use crate::effect::CancellationToken;
use crate::typeclass::Extract;

/// Awaits `future` unless `token` fires first.
async fn race<F: Future>(token: &CancellationToken, future: F) -> Result<F::Output, Cancelled> {
    tokio::select! {
        biased;
        () = token.cancelled() => {
            tracing::debug!("stream query cancelled");
            Err(Cancelled)
        }
        output = future => Ok(output),
    }
}

/// Pulls elements until one satisfies `predicate`.
async fn next_match<S, P, Fut>(
    elements: &mut S,
    predicate: &mut P,
    token: &CancellationToken,
) -> Result<Option<S::Item>, Cancelled>
where
    S: Stream + Unpin,
    P: FnMut(&S::Item) -> Fut,
    Fut: Future<Output = bool>,
{
    while let Some(element) = race(token, elements.next()).await? {
        if race(token, predicate(&element)).await? {
            return Ok(Some(element));
        }
    }
    Ok(None)
}

// =============================================================================
// StreamQueryExt
// =============================================================================

/// Asynchronous counterparts of [`SequenceExt`](super::SequenceExt).
///
/// # Examples
///
/// ```rust
/// use futures::executor::block_on;
/// use futures::stream;
/// use mettle::control::Maybe;
/// use mettle::effect::CancellationToken;
/// use mettle::query::StreamQueryExt;
///
/// let token = CancellationToken::none();
/// let found = block_on(
///     stream::iter([1, 4, 6]).first_matching_async(|x| std::future::ready(x % 2 == 0), &token),
/// );
/// assert_eq!(found, Ok(Maybe::Present(4)));
/// ```
pub trait StreamQueryExt: Stream {
    /// The first element satisfying `predicate`. Stops at the match.
    fn first_matching_async<P, Fut>(
        self,
        mut predicate: P,
        token: &CancellationToken,
    ) -> impl Future<Output = Result<Maybe<Self::Item>, Cancelled>>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> Fut,
        Fut: Future<Output = bool>,
    {
        async move {
            let mut elements = pin!(self);
            Ok(next_match(&mut elements, &mut predicate, token).await?.into())
        }
    }

    /// The first element, if any. Pulls at most one element.
    fn first_value_async(
        self,
        token: &CancellationToken,
    ) -> impl Future<Output = Result<Maybe<Self::Item>, Cancelled>>
    where
        Self: Sized,
    {
        self.first_matching_async(|_| futures::future::ready(true), token)
    }

    /// The last element satisfying `predicate`. Consumes the whole stream.
    fn last_matching_async<P, Fut>(
        self,
        mut predicate: P,
        token: &CancellationToken,
    ) -> impl Future<Output = Result<Maybe<Self::Item>, Cancelled>>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> Fut,
        Fut: Future<Output = bool>,
    {
        async move {
            let mut elements = pin!(self);
            let mut last = Maybe::Empty;
            while let Some(found) = next_match(&mut elements, &mut predicate, token).await? {
                last = Maybe::Present(found);
            }
            Ok(last)
        }
    }

    /// The last element, if any.
    fn last_value_async(
        self,
        token: &CancellationToken,
    ) -> impl Future<Output = Result<Maybe<Self::Item>, Cancelled>>
    where
        Self: Sized,
    {
        self.last_matching_async(|_| futures::future::ready(true), token)
    }

    /// The only element satisfying `predicate`.
    ///
    /// No predicate is evaluated after the second match.
    ///
    /// # Errors
    ///
    /// [`Error::MultipleMatches`] when a second element matches,
    /// [`Error::Cancelled`] when `token` fires first.
    fn single_matching_async<P, Fut>(
        self,
        mut predicate: P,
        token: &CancellationToken,
    ) -> impl Future<Output = Result<Maybe<Self::Item>, Error>>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> Fut,
        Fut: Future<Output = bool>,
    {
        async move {
            let mut elements = pin!(self);
            let Some(found) = next_match(&mut elements, &mut predicate, token).await? else {
                return Ok(Maybe::Empty);
            };
            if next_match(&mut elements, &mut predicate, token).await?.is_some() {
                tracing::debug!("single_matching_async found a second match");
                return Err(MultipleMatches.into());
            }
            Ok(Maybe::Present(found))
        }
    }

    /// The only element. Stops pulling after the second one.
    ///
    /// # Errors
    ///
    /// [`Error::MultipleMatches`] when the stream has two or more elements,
    /// [`Error::Cancelled`] when `token` fires first.
    fn single_value_async(
        self,
        token: &CancellationToken,
    ) -> impl Future<Output = Result<Maybe<Self::Item>, Error>>
    where
        Self: Sized,
    {
        self.single_matching_async(|_| futures::future::ready(true), token)
    }

    /// Lazily yields every carried value that satisfies `predicate`.
    ///
    /// When `token` fires the stream yields one `Err(Cancelled)` and ends.
    fn values_where_async<P, Fut>(
        self,
        predicate: P,
        token: &CancellationToken,
    ) -> impl Stream<Item = Result<<Self::Item as Extract>::Value, Cancelled>>
    where
        Self: Sized,
        Self::Item: Extract,
        P: FnMut(&<Self::Item as Extract>::Value) -> Fut,
        Fut: Future<Output = bool>,
    {
        let values = Box::pin(
            self.filter_map(|container| futures::future::ready(container.into_value())),
        );
        stream::unfold(
            Some((values, predicate, token.clone())),
            |state| async move {
                let Some((mut values, mut predicate, token)) = state else {
                    return None;
                };
                match next_match(&mut values, &mut predicate, &token).await {
                    Ok(Some(value)) => Some((Ok(value), Some((values, predicate, token)))),
                    Ok(None) => None,
                    Err(Cancelled) => Some((Err(Cancelled), None)),
                }
            },
        )
    }
}

impl<S: Stream> StreamQueryExt for S {}

// =============================================================================
// NullableStreamQueryExt
// =============================================================================

/// Asynchronous counterparts of
/// [`NullableSequenceExt`](super::NullableSequenceExt): `None` elements are
/// skipped and never reach the predicate.
pub trait NullableStreamQueryExt<T>: Stream<Item = Option<T>> {
    /// See [`StreamQueryExt::first_matching_async`].
    fn first_not_null_async<P, Fut>(
        self,
        predicate: P,
        token: &CancellationToken,
    ) -> impl Future<Output = Result<Maybe<T>, Cancelled>>
    where
        Self: Sized,
        P: FnMut(&T) -> Fut,
        Fut: Future<Output = bool>,
    {
        self.filter_map(futures::future::ready)
            .first_matching_async(predicate, token)
    }

    /// See [`StreamQueryExt::last_matching_async`].
    fn last_not_null_async<P, Fut>(
        self,
        predicate: P,
        token: &CancellationToken,
    ) -> impl Future<Output = Result<Maybe<T>, Cancelled>>
    where
        Self: Sized,
        P: FnMut(&T) -> Fut,
        Fut: Future<Output = bool>,
    {
        self.filter_map(futures::future::ready)
            .last_matching_async(predicate, token)
    }

    /// See [`StreamQueryExt::single_matching_async`].
    ///
    /// # Errors
    ///
    /// As [`StreamQueryExt::single_matching_async`].
    fn single_not_null_async<P, Fut>(
        self,
        predicate: P,
        token: &CancellationToken,
    ) -> impl Future<Output = Result<Maybe<T>, Error>>
    where
        Self: Sized,
        P: FnMut(&T) -> Fut,
        Fut: Future<Output = bool>,
    {
        self.filter_map(futures::future::ready)
            .single_matching_async(predicate, token)
    }
}

impl<T, S: Stream<Item = Option<T>>> NullableStreamQueryExt<T> for S {}
