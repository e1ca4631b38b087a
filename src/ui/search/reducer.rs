//! Reducer for the search panel.

use crate::ui::mvi::Reducer;

use super::intent::SearchIntent;
use super::state::{SearchState, SearchStatus};

/// Reducer for query edits and search settlements.
///
/// A query edit that produces a searchable query moves to `Loading` with a
/// fresh `request_seq`; the caller reacts to that by issuing the request.
pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchState;
    type Intent = SearchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SearchIntent::Input { ch } => {
                let mut query = state.query.clone();
                query.push(ch);
                apply_query(state, query)
            }

            SearchIntent::Backspace => {
                let mut query = state.query.clone();
                query.pop();
                apply_query(state, query)
            }

            SearchIntent::Clear => apply_query(state, String::new()),

            SearchIntent::SetQuery { query } => apply_query(state, query),

            SearchIntent::Settled { seq, outcome } => {
                if seq != state.request_seq || !state.is_loading() {
                    return state;
                }
                let mut state = state;
                match outcome {
                    Ok(results) => {
                        state.results = results;
                        state.status = SearchStatus::Loaded;
                    }
                    // Results from the previous answer stay; the error view hides them.
                    Err(message) => state.status = SearchStatus::Failed { message },
                }
                state
            }

            SearchIntent::SetMinQueryLen { len } => {
                let mut state = SearchState {
                    min_query_len: len,
                    ..state
                };
                // A query that no longer passes the gate drops its results.
                if !state.is_searchable() && state.status != SearchStatus::Idle {
                    state.request_seq += 1;
                    state.results.clear();
                    state.status = SearchStatus::Idle;
                }
                state
            }
        }
    }
}

fn apply_query(mut state: SearchState, query: String) -> SearchState {
    if query == state.query {
        return state;
    }

    state.query = query;
    // Any request still in flight belongs to the old query.
    state.request_seq += 1;

    if state.is_searchable() {
        state.status = SearchStatus::Loading;
    } else {
        state.results.clear();
        state.status = SearchStatus::Idle;
    }
    state
}
