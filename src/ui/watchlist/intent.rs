use crate::ui::mvi::Intent;

use super::state::WatchedMovie;

#[derive(Debug, Clone)]
pub enum WatchlistIntent {
    /// Append to the end of the list. Duplicates are kept.
    Add { movie: WatchedMovie },
    /// Drop every entry with this id.
    Remove { imdb_id: String },
}

impl Intent for WatchlistIntent {}
