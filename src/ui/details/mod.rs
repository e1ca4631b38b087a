//! Details panel for the selected movie.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Empty → Loading → Loaded / Failed, plus the pending rating
//! - `intent.rs` - Load, Settled, Rate, Clear
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::DetailsIntent;
pub use reducer::DetailsReducer;
pub use state::{DetailsState, MAX_USER_RATING};
