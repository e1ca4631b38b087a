use crate::ui::mvi::Reducer;

use super::intent::SelectionIntent;
use super::state::SelectionState;

pub struct SelectionReducer;

impl Reducer for SelectionReducer {
    type State = SelectionState;
    type Intent = SelectionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SelectionIntent::Select { imdb_id } => {
                if state.selected.as_deref() == Some(imdb_id.as_str()) {
                    SelectionState::default()
                } else {
                    SelectionState {
                        selected: Some(imdb_id),
                    }
                }
            }
            SelectionIntent::Close => SelectionState::default(),
        }
    }
}
