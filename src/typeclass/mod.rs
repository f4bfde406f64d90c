//! Type classes expressing the shared combinator algebra.
//!
//! - [`TypeConstructor`]: HKT emulation via GATs
//! - [`Functor`]: `fmap`
//! - [`Monad`]: `pure` and `flat_map`
//! - [`Extract`]: the value-carrying state of a container

mod extract;
mod functor;
mod higher;
mod monad;

pub use extract::Extract;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
