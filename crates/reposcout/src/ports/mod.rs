//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the controller reaches external
//! systems. Implementations live in the services layer.

pub mod transport;

// Re-exports
pub use transport::*;
