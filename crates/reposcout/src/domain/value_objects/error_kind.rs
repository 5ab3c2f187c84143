//! ErrorKind - user-surfaced classification of a failed request

/// How a failed request is surfaced to the user.
///
/// Cancellations are never classified; they are expected control flow and
/// leave no trace in session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The server reported an exhausted request quota. Carries the URL that
    /// was attempted so a retry can reissue it exactly.
    RateLimited { retry_url: String },
    /// Any other failure; surfaced generically, not retried automatically.
    Other,
}
