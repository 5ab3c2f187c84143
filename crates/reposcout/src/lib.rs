//! Reposcout
//!
//! Request-lifecycle coordination for a repository-search UI: debounced
//! query input, cooperative cancellation of superseded requests,
//! link-header pagination with "load more", and rate-limit-aware retry.
//! Rendering is somebody else's job; this crate exposes an observable
//! session state any presentation surface can consume.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure session-state types
//!   - `entities/`: Core models (RepoSummary, SessionState)
//!   - `value_objects/`: Immutable value types (ErrorKind)
//!   - `errors/`: Transport-seam error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `transport`: How result pages are fetched
//!
//! - **Services** (`services/`): The controller and the reqwest transport
//!
//! - **`pagination`**: Pure `Link` header parsing
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use reposcout::{GithubSearchTransport, SearchController};
//!
//! let controller = SearchController::new(Arc::new(GithubSearchTransport::new()));
//! let mut state = controller.subscribe();
//!
//! // Wire these to the text field and the list widget:
//! controller.on_query_change("react");
//! controller.load_more();
//! controller.retry();
//! ```

pub mod domain;
pub mod pagination;
pub mod ports;
pub mod services;

// Re-export commonly used types
pub use domain::{ErrorKind, RepoSummary, SearchError, SessionState};
pub use pagination::{next_relation, parse_link_header};
pub use ports::{SearchPage, SearchTransport};
pub use services::{
    ControllerConfig, GithubSearchTransport, SearchController, DEFAULT_DEBOUNCE, DEFAULT_ENDPOINT,
};
