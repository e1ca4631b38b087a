use crate::omdb::MovieDetails;
use crate::ui::mvi::UiState;
use crate::ui::watchlist::WatchedMovie;

pub const MAX_USER_RATING: u8 = 10;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailsState {
    #[default]
    Empty,
    Loading {
        imdb_id: String,
    },
    Loaded {
        details: MovieDetails,
        /// Rating picked in the panel, not yet added to the watchlist.
        user_rating: Option<u8>,
    },
    Failed {
        imdb_id: String,
        message: String,
    },
}

impl UiState for DetailsState {}

impl DetailsState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn imdb_id(&self) -> Option<&str> {
        match self {
            Self::Empty => None,
            Self::Loading { imdb_id } | Self::Failed { imdb_id, .. } => Some(imdb_id),
            Self::Loaded { details, .. } => Some(&details.imdb_id),
        }
    }

    /// Builds the watchlist entry once details are loaded and rated.
    pub fn to_watched(&self) -> Option<WatchedMovie> {
        match self {
            Self::Loaded {
                details,
                user_rating: Some(rating),
            } => Some(WatchedMovie {
                imdb_id: details.imdb_id.clone(),
                title: details.title.clone(),
                poster: details.poster.clone(),
                imdb_rating: details.critic_rating(),
                user_rating: f64::from(*rating),
                runtime: details.runtime_minutes(),
            }),
            _ => None,
        }
    }
}
