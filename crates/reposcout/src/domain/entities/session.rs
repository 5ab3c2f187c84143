//! SessionState - observable state of one search session

use crate::domain::entities::RepoSummary;
use crate::domain::value_objects::ErrorKind;

/// Snapshot of a search session as the presentation surface sees it.
///
/// Owned exclusively by the controller. Every query edit replaces the whole
/// value; a successful "load more" appends to `results`. Fields never drift
/// independently of a transition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    /// Current query text, exactly as typed.
    pub query: String,
    /// True from the moment a request is scheduled until it settles.
    pub loading: bool,
    /// Accumulated result pages, earliest first.
    pub results: Vec<RepoSummary>,
    /// URL of the next result page, when the last response advertised one.
    pub next_page_url: Option<String>,
    /// Classification of the last failure, if one is being surfaced.
    pub error: Option<ErrorKind>,
}

impl SessionState {
    /// Fresh state for a newly entered query.
    pub fn for_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// True when a rate-limit retry is currently offered to the user.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self.error, Some(ErrorKind::RateLimited { .. }))
    }
}
