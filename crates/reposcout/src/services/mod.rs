//! Services
//!
//! The session controller and the production transport implementation.

pub mod controller;
pub mod github;

pub use controller::*;
pub use github::*;
