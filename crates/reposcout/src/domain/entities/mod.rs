//! Domain Entities
//!
//! - RepoSummary: one repository search hit, passed through to the renderer
//! - SessionState: everything the presentation surface sees about a session

mod repo;
mod session;

pub use repo::*;
pub use session::*;
