use crate::ui::mvi::Reducer;

use super::intent::WatchlistIntent;
use super::state::WatchlistState;

pub struct WatchlistReducer;

impl Reducer for WatchlistReducer {
    type State = WatchlistState;
    type Intent = WatchlistIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            WatchlistIntent::Add { movie } => {
                let mut movies = state.movies;
                movies.push(movie);
                WatchlistState { movies }
            }
            WatchlistIntent::Remove { imdb_id } => {
                let mut movies = state.movies;
                movies.retain(|movie| movie.imdb_id != imdb_id);
                WatchlistState { movies }
            }
        }
    }
}
