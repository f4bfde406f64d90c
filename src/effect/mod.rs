//! Asynchronous counterparts of the containers.
//!
//! [`Pending`] is a computation that is either complete or still running.
//! Every container gets its asynchronous combinators as inherent methods on
//! `Pending<Container>`:
//!
//! - [`AsyncMaybe`]: `Pending<Maybe<T>>`
//! - [`AsyncEither`]: `Pending<Either<L, R>>`
//! - [`AsyncTry`]: `Pending<Try<T>>`
//!
//! Combinators applied to an already complete `Pending` run synchronously.
//! Every combinator honors the [`CancellationToken`] attached to its input.
//!
//! # Examples
//!
//! ```rust
//! use futures::executor::block_on;
//! use mettle::control::Maybe;
//! use mettle::effect::Pending;
//!
//! let length = Pending::ready(Maybe::from_value("mettle"))
//!     .map(str::len)
//!     .value_or_default(0);
//! assert_eq!(block_on(length), Ok(6));
//! ```

mod cancellation;
mod either_ops;
mod maybe_ops;
mod pending;
mod try_ops;

pub use cancellation::CancellationToken;
pub use either_ops::AsyncEither;
pub use maybe_ops::AsyncMaybe;
pub use pending::Pending;
pub use try_ops::AsyncTry;
