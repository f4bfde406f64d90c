//! The three containers and their synchronous combinators.
//!
//! - [`Maybe`]: zero or one value
//! - [`Either`]: exactly one of two values
//! - [`Try`]: a value or a captured [`Failure`]
//!
//! Conversions between them are lossless where possible:
//!
//! ```rust
//! use mettle::control::{Either, Maybe, Try};
//!
//! let maybe = Maybe::from_value(3);
//! let either: Either<i32, &str> = maybe.as_either("missing");
//! assert_eq!(either.to_maybe_left(), maybe);
//!
//! let attempt: Try<i32> = maybe.as_try();
//! assert_eq!(attempt.to_maybe(false), Ok(maybe));
//! ```

mod attempt;
mod either;
mod error;
mod failure;
mod maybe;

pub use attempt::{CancellationPolicy, Try};
pub use either::Either;
pub use error::{Cancelled, EmptyValue, Error, InvalidArgument, MultipleMatches};
pub use failure::{Chain, Failure, PanicError};
pub use maybe::Maybe;

pub(crate) use failure::catch;
