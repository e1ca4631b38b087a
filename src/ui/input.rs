use crate::ui::app::{App, Focus, Panel};
use crate::ui::search::SearchIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 'r') {
        app.request_config_reload();
        return;
    }

    match key.code {
        KeyCode::F(2) => return app.toggle_panel(Panel::Results),
        KeyCode::F(3) => return app.toggle_panel(Panel::Watched),
        KeyCode::Tab => return app.focus_next(),
        KeyCode::BackTab => return app.focus_prev(),
        KeyCode::Esc if app.selection().is_open() => return app.close_movie(),
        _ => {}
    }

    match app.focus() {
        Focus::Search => handle_search_key(app, key),
        Focus::Results => handle_results_key(app, key),
        Focus::Watched => handle_watched_key(app, key),
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_search(SearchIntent::Input { ch });
        }
        KeyCode::Char('u') => app.dispatch_search(SearchIntent::Clear),
        KeyCode::Backspace => app.dispatch_search(SearchIntent::Backspace),
        KeyCode::Esc => app.dispatch_search(SearchIntent::Clear),
        KeyCode::Enter | KeyCode::Down => app.set_focus(Focus::Results),
        _ => {}
    }
}

fn handle_results_key(app: &mut App, key: KeyEvent) {
    if handle_details_key(app, key) {
        return;
    }
    match key.code {
        KeyCode::Up => app.move_result_cursor(-1),
        KeyCode::Down => app.move_result_cursor(1),
        KeyCode::Enter => app.select_highlighted_result(),
        KeyCode::Esc => app.set_focus(Focus::Search),
        _ => {}
    }
}

fn handle_watched_key(app: &mut App, key: KeyEvent) {
    if handle_details_key(app, key) {
        return;
    }
    match key.code {
        KeyCode::Up => app.move_watched_cursor(-1),
        KeyCode::Down => app.move_watched_cursor(1),
        KeyCode::Char('d') | KeyCode::Delete => app.remove_highlighted_watched(),
        KeyCode::Esc => app.set_focus(Focus::Search),
        _ => {}
    }
}

/// Rating digits and `a` apply to the open details panel. Returns true when
/// the key was consumed.
fn handle_details_key(app: &mut App, key: KeyEvent) -> bool {
    if !app.selection().is_open() {
        return false;
    }
    match key.code {
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            let digit = ch.to_digit(10).unwrap_or(0) as u8;
            app.rate_selected(if digit == 0 { 10 } else { digit });
            true
        }
        KeyCode::Char('a') => {
            app.add_selected_to_watchlist();
            true
        }
        _ => false,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
