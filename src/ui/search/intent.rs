//! Intents for the search panel.

use crate::omdb::SearchResult;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SearchIntent {
    /// Character typed into the search box.
    Input { ch: char },

    /// Delete the last character of the query.
    Backspace,

    /// Empty the query.
    Clear,

    /// Replace the query wholesale (initial query from the command line).
    SetQuery { query: String },

    /// A request finished. `seq` is the sequence it was issued with.
    Settled {
        seq: u64,
        outcome: Result<Vec<SearchResult>, String>,
    },

    /// Minimum query length changed (config reload). Does not start a search.
    SetMinQueryLen { len: usize },
}

impl Intent for SearchIntent {}
