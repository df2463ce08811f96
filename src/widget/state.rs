//! Search widget state and its transitions.
//!
//! All mutation happens through the methods here; the controller decides
//! when to call them (instantly on each keystroke, or after the debounce).

use crate::endpoint::{ResultSet, SearchResponse};
use crate::widget::navigation::ResultLinks;
use crate::widget::phase::Phase;

/// Input value, phase and current results of the search widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    value: String,
    phase: Phase,
    results: ResultSet,
    /// Navigable links for `results`, rebuilt whenever results change
    links: ResultLinks,
    min_chars: usize,
}

impl SearchState {
    pub fn new(min_chars: usize) -> Self {
        Self {
            value: String::new(),
            phase: Phase::TooShort,
            results: ResultSet::empty(),
            links: ResultLinks::default(),
            min_chars,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    pub fn links(&self) -> &ResultLinks {
        &self.links
    }

    pub fn min_chars(&self) -> usize {
        self.min_chars
    }

    pub fn help_text(&self) -> String {
        self.phase.help_text(self.min_chars)
    }

    /// Whether `value` is long enough to search for.
    pub fn is_searchable(&self, value: &str) -> bool {
        value.chars().count() >= self.min_chars
    }

    /// Keystroke update: store the value, clear results and set the phase
    /// from the length. An empty value leaves the phase as it was.
    pub fn on_input_instant(&mut self, value: &str) {
        self.value = value.to_string();
        self.clear_results();
        if !value.is_empty() {
            self.phase = if self.is_searchable(value) {
                Phase::Searching
            } else {
                Phase::TooShort
            };
        }
    }

    /// Debounced update for input that is too short to search.
    pub fn reset_too_short(&mut self) {
        self.clear_results();
        self.phase = Phase::TooShort;
    }

    /// Mark a request as in flight.
    pub fn begin_search(&mut self) {
        self.phase = Phase::Searching;
    }

    /// Apply a successful response for the current value.
    pub fn apply_response(&mut self, response: SearchResponse) {
        if response.counts.any() {
            self.phase = Phase::Resolved(response.counts);
            self.set_results(response.results);
        } else {
            self.phase = Phase::Empty {
                query: self.value.clone(),
            };
            self.clear_results();
        }
    }

    /// Apply a failed request. Results are left untouched.
    pub fn apply_failure(&mut self) {
        self.phase = Phase::Failed;
    }

    /// Back to the initial state, keeping the configuration.
    pub fn reset(&mut self) {
        *self = Self::new(self.min_chars);
    }

    fn set_results(&mut self, results: ResultSet) {
        self.links = ResultLinks::from_results(&results);
        self.results = results;
    }

    fn clear_results(&mut self) {
        self.set_results(ResultSet::empty());
    }
}
