use crate::ui::mvi::UiState;

/// A movie the user has rated.
#[derive(Debug, Clone, PartialEq)]
pub struct WatchedMovie {
    pub imdb_id: String,
    pub title: String,
    pub poster: String,
    /// IMDb critic rating, 0 when unknown.
    pub imdb_rating: f64,
    pub user_rating: f64,
    /// Minutes, 0 when unknown.
    pub runtime: f64,
}

/// Aggregates shown above the watched list.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WatchedSummary {
    pub count: usize,
    pub avg_imdb_rating: f64,
    pub avg_user_rating: f64,
    pub avg_runtime: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WatchlistState {
    /// Insertion order.
    pub movies: Vec<WatchedMovie>,
}

impl UiState for WatchlistState {}

impl WatchlistState {
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn find(&self, imdb_id: &str) -> Option<&WatchedMovie> {
        self.movies.iter().find(|movie| movie.imdb_id == imdb_id)
    }

    pub fn summary(&self) -> WatchedSummary {
        WatchedSummary {
            count: self.movies.len(),
            avg_imdb_rating: average(self.movies.iter().map(|m| m.imdb_rating)),
            avg_user_rating: average(self.movies.iter().map(|m| m.user_rating)),
            avg_runtime: average(self.movies.iter().map(|m| m.runtime)),
        }
    }
}

/// Arithmetic mean; 0 for an empty input.
fn average(values: impl ExactSizeIterator<Item = f64>) -> f64 {
    let len = values.len();
    if len == 0 {
        return 0.0;
    }
    values.sum::<f64>() / len as f64
}
