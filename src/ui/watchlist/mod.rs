//! Watched movies and their summary.
//!
//! In-memory only; the list lives for the session.

mod intent;
mod reducer;
mod state;

pub use intent::WatchlistIntent;
pub use reducer::WatchlistReducer;
pub use state::{WatchedMovie, WatchedSummary, WatchlistState};
