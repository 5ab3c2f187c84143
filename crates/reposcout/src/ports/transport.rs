//! Search Transport Port
//!
//! Abstract interface for fetching result pages.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::domain::entities::RepoSummary;
use crate::domain::errors::SearchError;

/// One page of search results as returned by the transport.
#[derive(Debug, Clone, Default)]
pub struct SearchPage {
    /// Result items in response order.
    pub items: Vec<RepoSummary>,
    /// Raw `Link` header value, when the response carried one.
    pub link_header: Option<String>,
}

/// Service interface for fetching search result pages.
#[async_trait]
pub trait SearchTransport: Send + Sync {
    /// Issue a GET for `url`.
    ///
    /// Cancellation is cooperative: implementations must watch `cancel` and
    /// resolve to [`SearchError::Cancelled`] once it fires, distinguishable
    /// from every other failure. The underlying network call need not stop.
    async fn fetch(
        &self,
        url: &str,
        cancel: CancellationToken,
    ) -> Result<SearchPage, SearchError>;
}
