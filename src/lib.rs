//! # mettle
//!
//! Optional, two-sided and captured-failure containers with a shared
//! combinator algebra, in synchronous and asynchronous forms.
//!
//! ## Overview
//!
//! - **Containers**: [`Maybe`](control::Maybe) (zero or one value),
//!   [`Either`](control::Either) (left or right) and
//!   [`Try`](control::Try) (a value or a captured failure)
//! - **Type Classes**: `Functor`, `Monad` and `Extract` over the containers
//! - **Sequence Queries**: first, last and exactly-one element queries, and
//!   value extraction from a sequence of containers
//! - **Async**: `Pending`, a pending-or-completed computation with a
//!   synchronous fast path and cooperative cancellation
//!
//! ## Feature Flags
//!
//! - `control`: the containers and the error types
//! - `typeclass`: type class traits (Functor, Monad, Extract)
//! - `query`: sequence queries
//! - `async`: `Pending`, `CancellationToken` and stream queries
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use mettle::prelude::*;
//!
//! let port = Maybe::from_value("8080")
//!     .as_try()
//!     .try_map(|text| text.parse::<u16>())
//!     .value_or_default(80);
//! assert_eq!(port, 8080);
//!
//! let first_even = [1, 3, 4, 6].into_iter().first_matching(|x| x % 2 == 0);
//! assert_eq!(first_even, Maybe::Present(4));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use mettle::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "query")]
    pub use crate::query::*;

    #[cfg(feature = "async")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "query")]
pub mod query;

#[cfg(feature = "async")]
pub mod effect;
