//! Domain Errors
//!
//! Error types crossing the transport seam.

use thiserror::Error;

/// Failure of a single transport call.
#[derive(Debug, Clone, Error)]
pub enum SearchError {
    /// The call was superseded by newer input. Expected control flow; the
    /// controller swallows it without touching session state.
    #[error("request cancelled")]
    Cancelled,

    /// Non-success HTTP status, with the remaining-quota header if present.
    #[error("http status {status}")]
    Http {
        status: u16,
        rate_limit_remaining: Option<String>,
    },

    #[error("network error: {0}")]
    Network(String),

    #[error("decode error: {0}")]
    Decode(String),
}

impl SearchError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// True when the failed response reported an exhausted request quota.
    pub fn is_rate_limited(&self) -> bool {
        matches!(
            self,
            Self::Http { rate_limit_remaining: Some(remaining), .. } if remaining == "0"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limited_only_when_remaining_is_exactly_zero() {
        let exhausted = SearchError::Http {
            status: 403,
            rate_limit_remaining: Some("0".to_string()),
        };
        assert!(exhausted.is_rate_limited());

        let quota_left = SearchError::Http {
            status: 403,
            rate_limit_remaining: Some("12".to_string()),
        };
        assert!(!quota_left.is_rate_limited());

        let no_header = SearchError::Http {
            status: 500,
            rate_limit_remaining: None,
        };
        assert!(!no_header.is_rate_limited());
    }

    #[test]
    fn test_cancellation_is_not_rate_limited() {
        assert!(SearchError::Cancelled.is_cancelled());
        assert!(!SearchError::Cancelled.is_rate_limited());
    }
}
