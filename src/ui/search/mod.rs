//! Search feature module.
//!
//! Owns the query text and the state of the title search driven by it.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Query, results, status and the latest request sequence
//! - `intent.rs` - Keystrokes and request settlements
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::SearchIntent;
pub use reducer::SearchReducer;
pub use state::{SearchState, SearchStatus, DEFAULT_MIN_QUERY_LEN};
