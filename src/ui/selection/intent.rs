use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SelectionIntent {
    /// Open `imdb_id`, or close it if it is already open.
    Select { imdb_id: String },
    Close,
}

impl Intent for SelectionIntent {}
