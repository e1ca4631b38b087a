use crate::config::ConfigStore;
use crate::omdb::{MovieDetails, SearchResult};
use crate::ui::details::{DetailsIntent, DetailsReducer, DetailsState};
use crate::ui::mvi::Reducer;
use crate::ui::search::{SearchIntent, SearchReducer, SearchState};
use crate::ui::selection::{SelectionIntent, SelectionReducer, SelectionState};
use crate::ui::watchlist::{WatchedMovie, WatchlistIntent, WatchlistReducer, WatchlistState};
use tokio::sync::mpsc;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Search,
    Results,
    Watched,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Search => Focus::Results,
            Focus::Results => Focus::Watched,
            Focus::Watched => Focus::Search,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Search => Focus::Watched,
            Focus::Results => Focus::Search,
            Focus::Watched => Focus::Results,
        }
    }
}

/// The two collapsible boxes of the main area.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Panel {
    Results,
    Watched,
}

/// Work the UI asks the fetch worker to do.
#[derive(Debug, Clone, PartialEq)]
pub enum UiCommand {
    Search { seq: u64, query: String },
    FetchDetails { imdb_id: String },
    ReloadConfig,
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    config: ConfigStore,
    search: SearchState,
    selection: SelectionState,
    details: DetailsState,
    watchlist: WatchlistState,
    result_cursor: usize,
    watched_cursor: usize,
    results_open: bool,
    watched_open: bool,
    command_sender: Option<UiCommandSender>,
    last_error: Option<String>,
}

impl App {
    pub fn new(config: ConfigStore) -> Self {
        let min_query_len = config.get().search.min_query_len;
        Self {
            should_quit: false,
            focus: Focus::Search,
            config,
            search: SearchState::with_min_query_len(min_query_len),
            selection: SelectionState::default(),
            details: DetailsState::default(),
            watchlist: WatchlistState::default(),
            result_cursor: 0,
            watched_cursor: 0,
            results_open: true,
            watched_open: true,
            command_sender: None,
            last_error: None,
        }
    }

    /// Connect the app to the fetch worker.
    pub fn attach_commands(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn details(&self) -> &DetailsState {
        &self.details
    }

    pub fn watchlist(&self) -> &WatchlistState {
        &self.watchlist
    }

    pub fn result_cursor(&self) -> usize {
        self.result_cursor
    }

    pub fn watched_cursor(&self) -> usize {
        self.watched_cursor
    }

    pub fn is_panel_open(&self, panel: Panel) -> bool {
        match panel {
            Panel::Results => self.results_open,
            Panel::Watched => self.watched_open,
        }
    }

    pub fn toggle_panel(&mut self, panel: Panel) {
        match panel {
            Panel::Results => self.results_open = !self.results_open,
            Panel::Watched => self.watched_open = !self.watched_open,
        }
    }

    /// Last command or config error, shown in the footer.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Feed a query edit through the search reducer and start a request if
    /// the new state asks for one.
    pub fn dispatch_search(&mut self, intent: SearchIntent) {
        let before = self.search.request_seq;
        dispatch_mvi!(self, search, SearchReducer, intent);

        if self.search.request_seq == before {
            return;
        }
        self.result_cursor = 0;

        if self.search.is_loading() {
            tracing::debug!(
                seq = self.search.request_seq,
                query = %self.search.query,
                "Issuing search"
            );
            let seq = self.search.request_seq;
            let sent = self.send_command(UiCommand::Search {
                seq,
                query: self.search.query.clone(),
            });
            if let Err(message) = sent {
                self.on_search_settled(seq, Err(message));
            }
        }
    }

    pub fn on_search_settled(&mut self, seq: u64, outcome: Result<Vec<SearchResult>, String>) {
        if seq != self.search.request_seq {
            tracing::debug!(seq, latest = self.search.request_seq, "Dropping stale search result");
        }
        dispatch_mvi!(self, search, SearchReducer, SearchIntent::Settled { seq, outcome });
        self.result_cursor = clamp_cursor(self.result_cursor, self.search.results.len());
    }

    pub fn move_result_cursor(&mut self, delta: isize) {
        self.result_cursor = step_cursor(self.result_cursor, delta, self.search.results.len());
    }

    pub fn move_watched_cursor(&mut self, delta: isize) {
        self.watched_cursor = step_cursor(self.watched_cursor, delta, self.watchlist.len());
    }

    /// Select the result under the cursor (toggles if already open).
    pub fn select_highlighted_result(&mut self) {
        if !self.search.shows_results() {
            return;
        }
        let Some(result) = self.search.results.get(self.result_cursor) else {
            return;
        };
        let imdb_id = result.imdb_id.clone();
        self.select_movie(imdb_id);
    }

    pub fn select_movie(&mut self, imdb_id: String) {
        dispatch_mvi!(self, selection, SelectionReducer, SelectionIntent::Select { imdb_id });
        self.sync_details();
    }

    pub fn close_movie(&mut self) {
        dispatch_mvi!(self, selection, SelectionReducer, SelectionIntent::Close);
        self.sync_details();
    }

    pub fn on_details_settled(&mut self, imdb_id: String, outcome: Result<MovieDetails, String>) {
        dispatch_mvi!(
            self,
            details,
            DetailsReducer,
            DetailsIntent::Settled { imdb_id, outcome }
        );
    }

    pub fn rate_selected(&mut self, rating: u8) {
        dispatch_mvi!(self, details, DetailsReducer, DetailsIntent::Rate { rating });
    }

    /// Add the open, rated movie to the watchlist and close the details.
    /// Returns false when there is nothing to add.
    pub fn add_selected_to_watchlist(&mut self) -> bool {
        let Some(movie) = self.details.to_watched() else {
            return false;
        };
        if self.watchlist.find(&movie.imdb_id).is_some() {
            return false;
        }
        tracing::info!(imdb_id = %movie.imdb_id, rating = movie.user_rating, "Added to watchlist");
        dispatch_mvi!(self, watchlist, WatchlistReducer, WatchlistIntent::Add { movie });
        self.close_movie();
        true
    }

    /// Entry already in the watchlist for the open selection, if any.
    pub fn watched_selection(&self) -> Option<&WatchedMovie> {
        self.selection
            .selected()
            .and_then(|imdb_id| self.watchlist.find(imdb_id))
    }

    pub fn remove_highlighted_watched(&mut self) {
        let Some(movie) = self.watchlist.movies.get(self.watched_cursor) else {
            return;
        };
        let imdb_id = movie.imdb_id.clone();
        tracing::info!(imdb_id = %imdb_id, "Removed from watchlist");
        dispatch_mvi!(self, watchlist, WatchlistReducer, WatchlistIntent::Remove { imdb_id });
        self.watched_cursor = clamp_cursor(self.watched_cursor, self.watchlist.len());
    }

    pub fn request_config_reload(&mut self) {
        // Failure is already reported in the footer.
        let _ = self.send_command(UiCommand::ReloadConfig);
    }

    pub fn on_config_reload(&mut self) {
        let len = self.config.get().search.min_query_len;
        dispatch_mvi!(self, search, SearchReducer, SearchIntent::SetMinQueryLen { len });
        self.last_error = None;
    }

    pub fn on_config_error(&mut self, message: String) {
        tracing::warn!(error = %message, "Config reload failed");
        self.last_error = Some(message);
    }

    /// Keep the details panel in step with the selection.
    fn sync_details(&mut self) {
        match self.selection.selected().map(str::to_string) {
            Some(imdb_id) if self.details.imdb_id() != Some(imdb_id.as_str()) => {
                dispatch_mvi!(
                    self,
                    details,
                    DetailsReducer,
                    DetailsIntent::Load {
                        imdb_id: imdb_id.clone()
                    }
                );
                let sent = self.send_command(UiCommand::FetchDetails {
                    imdb_id: imdb_id.clone(),
                });
                if let Err(message) = sent {
                    self.on_details_settled(imdb_id, Err(message));
                }
            }
            Some(_) => {}
            None => {
                dispatch_mvi!(self, details, DetailsReducer, DetailsIntent::Clear);
            }
        }
    }

    /// Queue a command for the worker. On failure the message is also put
    /// in the footer and returned so the caller can settle its request.
    fn send_command(&mut self, command: UiCommand) -> Result<(), String> {
        let Some(sender) = &self.command_sender else {
            return Ok(());
        };
        if let Err(err) = sender.try_send(command) {
            tracing::warn!(error = %err, "Failed to queue command");
            let message = format!("Request queue unavailable: {err}");
            self.last_error = Some(message.clone());
            return Err(message);
        }
        Ok(())
    }
}

fn clamp_cursor(cursor: usize, len: usize) -> usize {
    cursor.min(len.saturating_sub(1))
}

fn step_cursor(cursor: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let next = cursor as isize + delta;
    next.clamp(0, len as isize - 1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_stays_in_bounds() {
        assert_eq!(step_cursor(0, -1, 3), 0);
        assert_eq!(step_cursor(2, 1, 3), 2);
        assert_eq!(step_cursor(1, 1, 3), 2);
        assert_eq!(step_cursor(5, 1, 0), 0);
    }

    #[test]
    fn clamp_handles_shrinking_list() {
        assert_eq!(clamp_cursor(4, 2), 1);
        assert_eq!(clamp_cursor(4, 0), 0);
    }

    #[test]
    fn focus_cycles_both_ways() {
        assert_eq!(Focus::Search.next().next().next(), Focus::Search);
        assert_eq!(Focus::Search.prev(), Focus::Watched);
    }
}
