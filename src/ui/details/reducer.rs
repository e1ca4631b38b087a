use crate::ui::mvi::Reducer;

use super::intent::DetailsIntent;
use super::state::{DetailsState, MAX_USER_RATING};

/// Reducer for the details panel.
///
/// A settlement is applied only while the panel is loading the same id;
/// answers for a selection the user already left are dropped.
pub struct DetailsReducer;

impl Reducer for DetailsReducer {
    type State = DetailsState;
    type Intent = DetailsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailsIntent::Load { imdb_id } => DetailsState::Loading { imdb_id },

            DetailsIntent::Settled { imdb_id, outcome } => match state {
                DetailsState::Loading { imdb_id: loading } if loading == imdb_id => match outcome {
                    Ok(details) => DetailsState::Loaded {
                        details,
                        user_rating: None,
                    },
                    Err(message) => DetailsState::Failed { imdb_id, message },
                },
                other => other,
            },

            DetailsIntent::Rate { rating } => match state {
                DetailsState::Loaded { details, .. } if (1..=MAX_USER_RATING).contains(&rating) => {
                    DetailsState::Loaded {
                        details,
                        user_rating: Some(rating),
                    }
                }
                other => other,
            },

            DetailsIntent::Clear => DetailsState::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::omdb::MovieDetails;

    fn details(id: &str) -> MovieDetails {
        MovieDetails {
            imdb_id: id.to_string(),
            title: "Interstellar".to_string(),
            year: "2014".to_string(),
            poster: "https://example.com/i.jpg".to_string(),
            runtime: "169 min".to_string(),
            imdb_rating: "8.7".to_string(),
            plot: String::new(),
            released: String::new(),
            actors: String::new(),
            director: String::new(),
            genre: String::new(),
        }
    }

    fn loaded(id: &str) -> DetailsState {
        let state = DetailsReducer::reduce(
            DetailsState::default(),
            DetailsIntent::Load {
                imdb_id: id.to_string(),
            },
        );
        DetailsReducer::reduce(
            state,
            DetailsIntent::Settled {
                imdb_id: id.to_string(),
                outcome: Ok(details(id)),
            },
        )
    }

    #[test]
    fn settled_for_loading_id_loads() {
        let state = loaded("tt1");
        assert!(matches!(state, DetailsState::Loaded { user_rating: None, .. }));
    }

    #[test]
    fn settled_for_other_id_is_dropped() {
        let state = DetailsReducer::reduce(
            DetailsState::default(),
            DetailsIntent::Load {
                imdb_id: "tt2".to_string(),
            },
        );
        let state = DetailsReducer::reduce(
            state,
            DetailsIntent::Settled {
                imdb_id: "tt1".to_string(),
                outcome: Ok(details("tt1")),
            },
        );
        assert_eq!(state.imdb_id(), Some("tt2"));
        assert!(state.is_loading());
    }

    #[test]
    fn failure_keeps_id_and_message() {
        let state = DetailsReducer::reduce(
            DetailsState::Loading {
                imdb_id: "tt1".to_string(),
            },
            DetailsIntent::Settled {
                imdb_id: "tt1".to_string(),
                outcome: Err("Movie not found".to_string()),
            },
        );
        assert_eq!(
            state,
            DetailsState::Failed {
                imdb_id: "tt1".to_string(),
                message: "Movie not found".to_string(),
            }
        );
    }

    #[test]
    fn rating_outside_range_is_ignored() {
        let state = DetailsReducer::reduce(loaded("tt1"), DetailsIntent::Rate { rating: 0 });
        assert!(matches!(state, DetailsState::Loaded { user_rating: None, .. }));
        let state = DetailsReducer::reduce(state, DetailsIntent::Rate { rating: 11 });
        assert!(matches!(state, DetailsState::Loaded { user_rating: None, .. }));
    }

    #[test]
    fn rated_details_build_watched_movie() {
        let state = DetailsReducer::reduce(loaded("tt1"), DetailsIntent::Rate { rating: 9 });
        let movie = state.to_watched().unwrap();
        assert_eq!(movie.imdb_id, "tt1");
        assert_eq!(movie.user_rating, 9.0);
        assert_eq!(movie.imdb_rating, 8.7);
        assert_eq!(movie.runtime, 169.0);
    }

    #[test]
    fn unrated_details_are_not_addable() {
        assert!(loaded("tt1").to_watched().is_none());
    }
}
