use crate::omdb::MovieDetails;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DetailsIntent {
    /// Start loading details for a newly opened selection.
    Load { imdb_id: String },

    /// Lookup for `imdb_id` finished.
    Settled {
        imdb_id: String,
        outcome: Result<MovieDetails, String>,
    },

    /// User picked a rating. Ignored unless details are loaded.
    Rate { rating: u8 },

    /// Selection closed.
    Clear,
}

impl Intent for DetailsIntent {}
