//! GitHub repository search transport.
//!
//! `reqwest`-backed implementation of the search transport port against the
//! GitHub search API. Cancellation races the HTTP future; the header values
//! the controller classifies on are lifted out before the body is consumed.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::domain::entities::RepoSummary;
use crate::domain::errors::SearchError;
use crate::ports::{SearchPage, SearchTransport};

/// Response header carrying the remaining request quota.
pub const RATE_LIMIT_REMAINING_HEADER: &str = "x-ratelimit-remaining";

#[derive(Debug, Deserialize)]
struct SearchResponseBody {
    items: Vec<RepoSummary>,
}

/// Transport backed by a pooled reqwest client.
#[derive(Clone, Default)]
pub struct GithubSearchTransport {
    client: Client,
}

impl GithubSearchTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Reuse an existing client (connection pool) instead of creating one.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SearchTransport for GithubSearchTransport {
    async fn fetch(
        &self,
        url: &str,
        cancel: CancellationToken,
    ) -> Result<SearchPage, SearchError> {
        debug!("🔍 GET {url}");

        let response = tokio::select! {
            _ = cancel.cancelled() => return Err(SearchError::Cancelled),
            sent = self.client.get(url).send() => {
                sent.map_err(|err| SearchError::Network(err.to_string()))?
            }
        };

        let rate_limit_remaining = response
            .headers()
            .get(RATE_LIMIT_REMAINING_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        if !response.status().is_success() {
            return Err(SearchError::Http {
                status: response.status().as_u16(),
                rate_limit_remaining,
            });
        }

        let link_header = response
            .headers()
            .get(reqwest::header::LINK)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let body: SearchResponseBody = tokio::select! {
            _ = cancel.cancelled() => return Err(SearchError::Cancelled),
            decoded = response.json() => {
                decoded.map_err(|err| SearchError::Decode(err.to_string()))?
            }
        };

        Ok(SearchPage {
            items: body.items,
            link_header,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_response_body_shape() {
        let json = r#"{
            "total_count": 2,
            "incomplete_results": false,
            "items": [
                {"id": 1, "full_name": "a/a", "html_url": "https://github.com/a/a"},
                {"id": 2, "full_name": "b/b", "html_url": "https://github.com/b/b"}
            ]
        }"#;

        let body: SearchResponseBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.items.len(), 2);
        assert_eq!(body.items[0].full_name, "a/a");
    }
}
