//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Maybe<_>` or `Try<_>` as type constructors
//! directly. [`TypeConstructor`] uses a GAT to name "the same container
//! holding a different type", which is what [`Functor`](super::Functor) and
//! [`Monad`](super::Monad) need.
//!
//! ```rust
//! use mettle::control::Maybe;
//! use mettle::typeclass::TypeConstructor;
//!
//! fn empty_like<T: TypeConstructor>(_: &T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let empty: Maybe<String> = empty_like(&Maybe::from_value(1));
//! assert!(empty.is_empty());
//! ```

use crate::control::{Either, Maybe, Try};

/// A type constructor applied to some inner type.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The type this constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<A> TypeConstructor for Try<A> {
    type Inner = A;
    type WithType<B> = Try<B>;
}

/// `Either` is a constructor over its left (primary) side.
impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = L;
    type WithType<B> = Either<B, R>;
}
