//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Transforms state based on intents.
///
/// `(State, Intent) -> State`, with no I/O. Anything that must happen as a
/// consequence (starting a request) is derived from the returned state by
/// the caller.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
