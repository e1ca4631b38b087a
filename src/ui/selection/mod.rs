//! Selection of the movie whose details are open.
//!
//! The selection is a plain IMDb id used as a lookup key into the current
//! results or the watchlist; it never owns the movie.

mod intent;
mod reducer;
mod state;

pub use intent::SelectionIntent;
pub use reducer::SelectionReducer;
pub use state::SelectionState;
