//! State for the search panel.

use crate::omdb::SearchResult;
use crate::ui::mvi::UiState;

/// Queries shorter than this never reach the network.
pub const DEFAULT_MIN_QUERY_LEN: usize = 3;

/// What the results panel shows. Exactly one of loader, error or list.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchStatus {
    /// No search has run for the current query.
    #[default]
    Idle,
    /// Request `request_seq` is in flight.
    Loading,
    /// Last request succeeded; `results` holds its answer.
    Loaded,
    /// Last request failed.
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    pub query: String,
    pub results: Vec<SearchResult>,
    pub status: SearchStatus,
    /// Sequence of the most recent request. Settlements carrying any other
    /// value are stale and dropped.
    pub request_seq: u64,
    pub min_query_len: usize,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            results: Vec::new(),
            status: SearchStatus::Idle,
            request_seq: 0,
            min_query_len: DEFAULT_MIN_QUERY_LEN,
        }
    }
}

impl UiState for SearchState {}

impl SearchState {
    pub fn with_min_query_len(min_query_len: usize) -> Self {
        Self {
            min_query_len,
            ..Self::default()
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, SearchStatus::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            SearchStatus::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// True when the query is long enough to be sent.
    pub fn is_searchable(&self) -> bool {
        self.query.chars().count() >= self.min_query_len
    }

    /// Results are visible only when neither the loader nor an error is.
    pub fn shows_results(&self) -> bool {
        matches!(self.status, SearchStatus::Idle | SearchStatus::Loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle_and_empty() {
        let state = SearchState::default();
        assert_eq!(state.status, SearchStatus::Idle);
        assert!(state.results.is_empty());
        assert_eq!(state.min_query_len, 3);
        assert!(state.shows_results());
    }

    #[test]
    fn searchable_counts_characters_not_bytes() {
        let mut state = SearchState::default();
        state.query = "été".to_string();
        assert!(state.is_searchable());
        state.query = "ét".to_string();
        assert!(!state.is_searchable());
    }

    #[test]
    fn exactly_one_panel_view_per_status() {
        let mut state = SearchState::default();
        for status in [
            SearchStatus::Idle,
            SearchStatus::Loading,
            SearchStatus::Loaded,
            SearchStatus::Failed {
                message: "boom".to_string(),
            },
        ] {
            state.status = status;
            let shown = [
                state.is_loading(),
                state.error().is_some(),
                state.shows_results(),
            ];
            assert_eq!(shown.iter().filter(|s| **s).count(), 1);
        }
    }
}
