//! Search widget controller.
//!
//! Runs both update paths for every keystroke: the instant update is applied
//! synchronously, the debounced update runs on the tokio runtime after the
//! input has been quiet for the configured delay.
//!
//! Each keystroke bumps a sequence number and aborts the previous debounce
//! task, dropping its in-flight request. A completing request is applied only
//! if its sequence number is still current, so a slow response can never
//! overwrite the results of a newer search.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::config::WidgetConfig;
use crate::endpoint::ResultsEndpoint;
use crate::widget::state::SearchState;

/// The search widget: owns the state and drives searches against `E`.
pub struct SearchWidget<E: ResultsEndpoint> {
    endpoint: Arc<E>,
    /// Runtime the debounced searches are spawned on.
    runtime: Handle,
    debounce: Duration,
    /// Single writer for the state; front ends subscribe to it.
    state: Arc<watch::Sender<SearchState>>,
    /// Sequence number of the latest keystroke.
    sequence: Arc<AtomicU64>,
    /// Debounce/search task for the latest keystroke, if still running.
    pending: Option<JoinHandle<()>>,
}

impl<E: ResultsEndpoint> SearchWidget<E> {
    /// Create a widget searching `endpoint`, spawning its work on `runtime`.
    pub fn new(endpoint: E, config: &WidgetConfig, runtime: Handle) -> Self {
        let (state, _) = watch::channel(SearchState::new(config.min_chars));
        tracing::debug!(
            "Search widget created (min_chars={}, debounce={:?})",
            config.min_chars,
            config.debounce()
        );

        Self {
            endpoint: Arc::new(endpoint),
            runtime,
            debounce: config.debounce(),
            state: Arc::new(state),
            sequence: Arc::new(AtomicU64::new(0)),
            pending: None,
        }
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> SearchState {
        self.state.borrow().clone()
    }

    /// Run `f` against the current state without cloning it.
    pub fn with_state<R>(&self, f: impl FnOnce(&SearchState) -> R) -> R {
        f(&self.state.borrow())
    }

    /// Handle a change of the input value.
    pub fn on_input(&mut self, value: &str) {
        let sequence = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        self.abort_pending();
        self.state.send_modify(|state| state.on_input_instant(value));

        let task = DebouncedSearch {
            endpoint: Arc::clone(&self.endpoint),
            state: Arc::clone(&self.state),
            current: Arc::clone(&self.sequence),
            sequence,
            value: value.to_string(),
        };
        let delay = self.debounce;
        self.pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            task.run().await;
        }));
    }

    /// Cancel any pending search and return to the initial state.
    pub fn reset(&mut self) {
        self.sequence.fetch_add(1, Ordering::SeqCst);
        self.abort_pending();
        self.state.send_modify(SearchState::reset);
    }

    /// Wait until the debounced search for the latest keystroke has finished.
    ///
    /// # Panics
    /// Re-raises a panic from the search task on the caller.
    pub async fn settled(&mut self) {
        let Some(handle) = self.pending.take() else {
            return;
        };
        match handle.await {
            Ok(()) => {}
            Err(e) if e.is_panic() => {
                tracing::error!("Search task panicked");
                std::panic::resume_unwind(e.into_panic());
            }
            Err(_) => tracing::debug!("Search task cancelled"),
        }
    }

    fn abort_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl<E: ResultsEndpoint> Drop for SearchWidget<E> {
    fn drop(&mut self) {
        self.abort_pending();
    }
}

/// The debounced half of a keystroke.
struct DebouncedSearch<E> {
    endpoint: Arc<E>,
    state: Arc<watch::Sender<SearchState>>,
    current: Arc<AtomicU64>,
    sequence: u64,
    value: String,
}

impl<E: ResultsEndpoint> DebouncedSearch<E> {
    async fn run(self) {
        let searchable = self.state.borrow().is_searchable(&self.value);
        if !searchable {
            self.apply(SearchState::reset_too_short);
            return;
        }

        if !self.apply(SearchState::begin_search) {
            return;
        }

        match self.endpoint.search(&self.value).await {
            Ok(response) => {
                tracing::debug!(
                    "Search for {:?} returned {} apps, {} models, {} objects",
                    self.value,
                    response.counts.apps,
                    response.counts.models,
                    response.counts.objects
                );
                if !self.apply(|state| state.apply_response(response)) {
                    tracing::debug!("Discarded stale response for {:?}", self.value);
                }
            }
            Err(e) => {
                tracing::error!("Search for {:?} failed: {}", self.value, e);
                self.apply(SearchState::apply_failure);
            }
        }
    }

    /// Apply `update` if this search is still the latest one.
    ///
    /// The sequence check runs under the state lock, so it cannot interleave
    /// with the instant update of a newer keystroke.
    fn apply<F>(&self, update: F) -> bool
    where
        F: FnOnce(&mut SearchState),
    {
        self.state.send_if_modified(|state| {
            if self.current.load(Ordering::SeqCst) != self.sequence {
                return false;
            }
            update(state);
            true
        })
    }
}
