//! Search session controller.
//!
//! Owns all mutable session state and mediates every network call made in
//! response to user input: debounced query edits, cancellation of superseded
//! requests, link-header pagination, and rate-limit-aware retry. At most one
//! logical search is in flight at any instant.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::domain::entities::SessionState;
use crate::domain::errors::SearchError;
use crate::domain::value_objects::ErrorKind;
use crate::pagination::next_relation;
use crate::ports::{SearchPage, SearchTransport};

/// Endpoint queried as `{endpoint}?q={query}` unless overridden.
pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/search/repositories";

/// Quiet interval required after the last keystroke before a request fires.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Controller configuration
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Search endpoint for the first page of each query.
    pub endpoint: String,
    /// Debounce interval for query edits.
    pub debounce: Duration,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

/// The one outstanding debounce timer / in-flight request.
///
/// Starting a new search replaces this slot; cancelling the token is what
/// invalidates both the timer and the request it guards.
struct PendingSearch {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

/// How a settled response folds into the result list.
enum Apply {
    Replace,
    Append,
}

struct ControllerInner {
    transport: Arc<dyn SearchTransport>,
    config: ControllerConfig,
    state: watch::Sender<SessionState>,
    pending: Mutex<Option<PendingSearch>>,
    /// Session generation; bumped on every query edit. A response is applied
    /// only while its generation is still current, so a stale response can
    /// never overwrite fresher state even if it loses the cancellation race.
    generation: AtomicU64,
}

/// Coordinates the request lifecycle of a repository-search session.
///
/// Cheaply cloneable; clones share one session. All state transitions are
/// published through a [`watch`] channel so a presentation surface can
/// subscribe, render `results`/`loading`, and call [`load_more`] when the
/// user scrolls near the end.
///
/// Methods must be called from within a tokio runtime.
///
/// [`load_more`]: SearchController::load_more
#[derive(Clone)]
pub struct SearchController {
    inner: Arc<ControllerInner>,
}

impl SearchController {
    pub fn new(transport: Arc<dyn SearchTransport>) -> Self {
        Self::with_config(transport, ControllerConfig::default())
    }

    pub fn with_config(transport: Arc<dyn SearchTransport>, config: ControllerConfig) -> Self {
        let (state, _) = watch::channel(SessionState::default());
        Self {
            inner: Arc::new(ControllerInner {
                transport,
                config,
                state,
                pending: Mutex::new(None),
                generation: AtomicU64::new(0),
            }),
        }
    }

    /// Current session state.
    pub fn snapshot(&self) -> SessionState {
        self.inner.state.borrow().clone()
    }

    /// Receiver notified on every state transition.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.inner.state.subscribe()
    }

    /// React to an edit of the query text field.
    ///
    /// Cancels any pending debounce timer and in-flight request, resets the
    /// session wholesale, and (for a non-empty query) schedules a debounced
    /// search. An empty query issues no request.
    pub fn on_query_change(&self, new_text: &str) {
        self.cancel_pending();
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;

        self.inner
            .state
            .send_modify(|state| *state = SessionState::for_query(new_text));

        if new_text.is_empty() {
            debug!("query cleared; no request issued");
            return;
        }

        self.inner.state.send_modify(|state| state.loading = true);

        let url = format!(
            "{}?q={}",
            self.inner.config.endpoint,
            urlencoding::encode(new_text)
        );
        debug!("⏳ debouncing search for '{new_text}'");
        self.spawn_fetch(url, generation, Some(self.inner.config.debounce), Apply::Replace);
    }

    /// Fetch the next result page, appending to the current results.
    ///
    /// No-op while a request is outstanding, when no next page is known, or
    /// while an error is being surfaced.
    pub fn load_more(&self) {
        let mut url = None;
        self.inner.state.send_if_modified(|state| {
            if state.loading || state.error.is_some() {
                return false;
            }
            let Some(next) = state.next_page_url.clone() else {
                return false;
            };
            state.loading = true;
            url = Some(next);
            true
        });
        let Some(url) = url else {
            return;
        };

        let generation = self.inner.generation.load(Ordering::SeqCst);
        debug!("📄 loading next page {url}");
        self.spawn_fetch(url, generation, None, Apply::Append);
    }

    /// Reissue the request that was rate limited.
    ///
    /// Only meaningful while a rate-limit error is surfaced; clears it and
    /// resumes through the ordinary load-more path against the stored URL
    /// (uniformly, even when that URL was the first page).
    pub fn retry(&self) {
        let cleared = self.inner.state.send_if_modified(|state| {
            if state.is_rate_limited() {
                state.error = None;
                true
            } else {
                false
            }
        });
        if cleared {
            debug!("🔄 retrying after rate limit");
            self.load_more();
        }
    }

    /// Cancel any pending debounce timer or in-flight request.
    ///
    /// Also runs when the last controller handle is dropped, so a disposed
    /// session cannot be mutated by a late response.
    pub fn shutdown(&self) {
        self.cancel_pending();
    }

    fn cancel_pending(&self) {
        let mut slot = self.inner.pending.lock().expect("pending slot poisoned");
        if let Some(pending) = slot.take() {
            pending.cancel.cancel();
        }
    }

    fn spawn_fetch(&self, url: String, generation: u64, debounce: Option<Duration>, mode: Apply) {
        let cancel = CancellationToken::new();
        let handle = tokio::spawn(run_fetch(
            Arc::downgrade(&self.inner),
            url,
            cancel.clone(),
            generation,
            debounce,
            mode,
        ));
        let mut slot = self.inner.pending.lock().expect("pending slot poisoned");
        *slot = Some(PendingSearch { cancel, handle });
    }
}

impl Drop for ControllerInner {
    fn drop(&mut self) {
        if let Ok(slot) = self.pending.get_mut() {
            if let Some(pending) = slot.take() {
                pending.cancel.cancel();
            }
        }
    }
}

/// Debounce (when requested), fetch, and fold the outcome into state.
///
/// Holds only a weak reference to the controller between suspend points, so
/// a disposed session is never revived or mutated by this task.
async fn run_fetch(
    inner: Weak<ControllerInner>,
    url: String,
    cancel: CancellationToken,
    generation: u64,
    debounce: Option<Duration>,
    mode: Apply,
) {
    if let Some(delay) = debounce {
        tokio::select! {
            _ = cancel.cancelled() => {
                debug!("debounce for {url} superseded");
                return;
            }
            _ = tokio::time::sleep(delay) => {}
        }
    }

    let Some(strong) = inner.upgrade() else {
        return;
    };
    let transport = Arc::clone(&strong.transport);
    drop(strong);

    let outcome = transport.fetch(&url, cancel.clone()).await;

    if cancel.is_cancelled() {
        debug!("response for {url} discarded after cancellation");
        return;
    }
    let Some(strong) = inner.upgrade() else {
        return;
    };
    strong.apply(generation, &url, outcome, mode);
}

impl ControllerInner {
    /// Fold a settled transport outcome into session state.
    ///
    /// Every branch re-checks the session generation inside the state lock;
    /// a mismatch means the response belongs to an abandoned query and is
    /// dropped without touching anything.
    fn apply(&self, generation: u64, url: &str, outcome: Result<SearchPage, SearchError>, mode: Apply) {
        match outcome {
            Err(err) if err.is_cancelled() => {
                debug!("request for {url} superseded");
            }
            Ok(page) => {
                let count = page.items.len();
                let next = next_relation(page.link_header.as_deref());
                let applied = self.state.send_if_modified(|state| {
                    if generation != self.generation.load(Ordering::SeqCst) {
                        return false;
                    }
                    match mode {
                        Apply::Replace => state.results = page.items,
                        Apply::Append => state.results.extend(page.items),
                    }
                    state.loading = false;
                    state.next_page_url = next;
                    state.error = None;
                    true
                });
                if applied {
                    debug!("✅ applied {count} result(s) from {url}");
                } else {
                    debug!("stale response from {url} dropped");
                }
            }
            Err(err) if err.is_rate_limited() => {
                warn!("rate limit exhausted at {url}");
                self.state.send_if_modified(|state| {
                    if generation != self.generation.load(Ordering::SeqCst) {
                        return false;
                    }
                    state.loading = false;
                    state.next_page_url = Some(url.to_string());
                    state.error = Some(ErrorKind::RateLimited {
                        retry_url: url.to_string(),
                    });
                    true
                });
            }
            Err(err) => {
                warn!("search request failed: {err}");
                self.state.send_if_modified(|state| {
                    if generation != self.generation.load(Ordering::SeqCst) {
                        return false;
                    }
                    state.loading = false;
                    state.error = Some(ErrorKind::Other);
                    true
                });
            }
        }
    }
}
