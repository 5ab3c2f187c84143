//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod error_kind;

pub use error_kind::*;
