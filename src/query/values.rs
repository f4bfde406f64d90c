//! Extraction of values from a sequence of containers.

use std::iter::FusedIterator;

use crate::typeclass::Extract;

/// Lazy iterator over the carried values of a sequence of containers.
///
/// Created by [`ValuesExt::values`], [`ValuesExt::values_where`] and
/// [`values_of`]. Containers without a value are skipped.
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<I, P> {
    containers: I,
    predicate: P,
}

impl<I, P> Iterator for Values<I, P>
where
    I: Iterator,
    I::Item: Extract,
    P: FnMut(&<I::Item as Extract>::Value) -> bool,
{
    type Item = <I::Item as Extract>::Value;

    fn next(&mut self) -> Option<Self::Item> {
        let predicate = &mut self.predicate;
        self.containers
            .by_ref()
            .filter_map(Extract::into_value)
            .find(|value| predicate(value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.containers.size_hint().1)
    }
}

impl<I, P> FusedIterator for Values<I, P>
where
    I: FusedIterator,
    I::Item: Extract,
    P: FnMut(&<I::Item as Extract>::Value) -> bool,
{
}

type Always<V> = fn(&V) -> bool;

const fn always<V>(_: &V) -> bool {
    true
}

/// Value extraction for iterators of [`Extract`] containers.
///
/// # Examples
///
/// ```rust
/// use mettle::control::Maybe;
/// use mettle::query::ValuesExt;
///
/// let found = vec![Maybe::Present(1), Maybe::Empty, Maybe::Present(2)];
/// assert_eq!(found.into_iter().values().collect::<Vec<_>>(), vec![1, 2]);
/// ```
pub trait ValuesExt: Iterator + Sized {
    /// Every carried value, in order.
    fn values(self) -> Values<Self, Always<<Self::Item as Extract>::Value>>
    where
        Self::Item: Extract,
    {
        let predicate: Always<<Self::Item as Extract>::Value> = always;
        self.values_where(predicate)
    }

    /// Every carried value that satisfies `predicate`, in order.
    fn values_where<P>(self, predicate: P) -> Values<Self, P>
    where
        Self::Item: Extract,
        P: FnMut(&<Self::Item as Extract>::Value) -> bool,
    {
        Values {
            containers: self,
            predicate,
        }
    }
}

impl<I: Iterator> ValuesExt for I {}

/// Every carried value of `containers` that satisfies `predicate`.
///
/// ```rust
/// use mettle::control::{Either, Try};
/// use mettle::query::values_of;
///
/// let outcomes = vec![Try::success(1), Try::failure(std::fmt::Error), Try::success(4)];
/// assert_eq!(values_of(outcomes, |x| *x > 1).collect::<Vec<_>>(), vec![4]);
///
/// let sides: Vec<Either<&str, i32>> = vec![Either::Right(0), Either::Left("kept")];
/// assert_eq!(values_of(sides, |_| true).collect::<Vec<_>>(), vec!["kept"]);
/// ```
pub fn values_of<I, P>(containers: I, predicate: P) -> Values<I::IntoIter, P>
where
    I: IntoIterator,
    I::Item: Extract,
    P: FnMut(&<I::Item as Extract>::Value) -> bool,
{
    containers.into_iter().values_where(predicate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{Either, Maybe, Try};
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn values_skips_empty() {
        let containers = vec![Maybe::Present(1), Maybe::Empty, Maybe::Present(2)];
        assert_eq!(containers.into_iter().values().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[rstest]
    fn values_where_filters_after_extraction() {
        let containers: Vec<Either<i32, &str>> = vec![
            Either::Left(1),
            Either::Right("skip"),
            Either::Left(10),
            Either::Left(3),
        ];
        let large: Vec<i32> = containers.into_iter().values_where(|x| *x > 2).collect();
        assert_eq!(large, vec![10, 3]);
    }

    #[rstest]
    fn values_skips_failures() {
        let containers = vec![
            Try::success("a"),
            Try::failure(std::fmt::Error),
            Try::success("b"),
        ];
        assert_eq!(containers.into_iter().values().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[rstest]
    fn values_is_lazy() {
        let pulled = Cell::new(0);
        let mut values = (0..)
            .map(|x| if x % 2 == 0 { Maybe::Present(x) } else { Maybe::Empty })
            .inspect(|_| pulled.set(pulled.get() + 1))
            .values();
        assert_eq!(values.next(), Some(0));
        assert_eq!(values.next(), Some(2));
        assert_eq!(pulled.get(), 3);
    }
}
