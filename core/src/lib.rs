//! An optional value wrapper, [`Maybe`], with combinators for chaining work on a value that may be
//! absent, and a bridge to the nullable convention (`Option<T>`).

pub mod error;
pub mod ext;
mod maybe;

#[cfg(feature = "serde")]
mod serde_impl;

pub use error::AbsentValueError;
pub use ext::IntoMaybe;
pub use maybe::{absent, present, Maybe};
