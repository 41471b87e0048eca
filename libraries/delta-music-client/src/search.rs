//! Debounced search panel.
//!
//! Every keystroke replaces the query and cancels the pending search; the
//! search only runs once the input has been quiet for the debounce delay.
//! State is published on a `watch` channel so a UI can redraw on change.

use delta_core::{MusicService, Song, VideoId};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::types::DEFAULT_SEARCH_LIMIT;

/// Quiet period before a search is sent
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// What the search panel shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    /// Current input text
    pub query: String,
    /// Results of the last completed search for `query`
    pub results: Vec<Song>,
    /// A request is in flight
    pub loading: bool,
    /// Last search failure
    pub error: Option<String>,
    /// Whether the panel is open
    pub expanded: bool,
}

impl SearchState {
    /// Whether the result dropdown should be drawn
    pub fn shows_results(&self) -> bool {
        self.expanded && !self.query.trim().is_empty() && !self.loading
    }
}

/// Search input with debounce.
///
/// Must be used inside a tokio runtime; searches run on spawned tasks.
pub struct SearchPanel<S: MusicService + 'static> {
    service: Arc<S>,
    debounce: Duration,
    limit: u32,
    state: Arc<watch::Sender<SearchState>>,
    pending: Option<JoinHandle<()>>,
}

impl<S: MusicService + 'static> SearchPanel<S> {
    /// Create a panel with the default debounce and result limit
    pub fn new(service: Arc<S>) -> Self {
        Self::with_settings(service, DEFAULT_DEBOUNCE, DEFAULT_SEARCH_LIMIT)
    }

    /// Create a panel with explicit debounce and result limit
    pub fn with_settings(service: Arc<S>, debounce: Duration, limit: u32) -> Self {
        let (state, _) = watch::channel(SearchState::default());
        Self {
            service,
            debounce,
            limit,
            state: Arc::new(state),
            pending: None,
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> SearchState {
        self.state.borrow().clone()
    }

    /// Receive every state change
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    /// Open the panel (input focused)
    pub fn expand(&self) {
        self.state.send_if_modified(|state| !std::mem::replace(&mut state.expanded, true));
    }

    /// Close the panel (input blurred or back pressed)
    pub fn collapse(&self) {
        self.state.send_if_modified(|state| std::mem::replace(&mut state.expanded, false));
    }

    /// Replace the query
    ///
    /// Cancels any pending or in-flight search. An empty query clears the
    /// results immediately without touching the network.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();

        if let Some(pending) = self.pending.take() {
            pending.abort();
        }

        let trimmed = query.trim().to_string();
        self.state.send_modify(|state| {
            state.query = query;
            state.loading = false;
            if trimmed.is_empty() {
                state.results.clear();
                state.error = None;
            }
        });

        if trimmed.is_empty() {
            return;
        }

        let service = Arc::clone(&self.service);
        let state = Arc::clone(&self.state);
        let debounce = self.debounce;
        let limit = self.limit;

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(debounce).await;

            state.send_modify(|s| {
                s.loading = true;
                s.error = None;
            });
            debug!(query = %trimmed, limit, "Running search");

            let outcome = service.search(&trimmed, limit).await;
            state.send_modify(|s| {
                s.loading = false;
                match outcome {
                    Ok(results) => s.results = results,
                    Err(e) => {
                        warn!(query = %trimmed, error = %e, "Search failed");
                        s.error = Some(e.to_string());
                    }
                }
            });
        }));
    }

    /// Pick a result
    ///
    /// Returns the id to open in the player and collapses the panel.
    pub fn select(&self, index: usize) -> Option<VideoId> {
        let id = self.state.borrow().results.get(index).map(|song| song.id.clone())?;
        self.collapse();
        Some(id)
    }
}

impl<S: MusicService + 'static> Drop for SearchPanel<S> {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}
