//! Sequence queries.
//!
//! - [`SequenceExt`]: first, last and single element of an iterator
//! - [`NullableSequenceExt`]: the same, skipping `None` elements
//! - [`ValuesExt`] and [`values_of`]: the carried values of a sequence of
//!   containers
//! - [`StreamQueryExt`] and [`NullableStreamQueryExt`] (feature `async`):
//!   the same queries over a `Stream` with asynchronous predicates

mod sequence;
#[cfg(feature = "async")]
mod stream;
mod values;

pub use sequence::{NullableSequenceExt, SequenceExt};
#[cfg(feature = "async")]
pub use stream::{NullableStreamQueryExt, StreamQueryExt};
pub use values::{Values, ValuesExt, values_of};
