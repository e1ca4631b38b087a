//! Draws the full screen into a test backend and checks what is visible.

mod common;

use common::{app_with_commands, drain, movie_details, search_result};
use frate::ui::app::{App, UiCommand};
use frate::ui::render::draw;
use frate::ui::search::SearchIntent;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn screen_text(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn searched(app: &mut App, rx: &mut tokio::sync::mpsc::Receiver<UiCommand>, query: &str) -> u64 {
    app.dispatch_search(SearchIntent::SetQuery {
        query: query.to_string(),
    });
    match drain(rx).pop() {
        Some(UiCommand::Search { seq, .. }) => seq,
        other => panic!("Expected Search command, got {other:?}"),
    }
}

#[test]
fn initial_screen_shows_placeholder_and_empty_summary() {
    let (app, _rx) = app_with_commands();
    let text = screen_text(&app);
    assert!(text.contains("Search movies..."));
    assert!(text.contains("Found 0 results"));
    assert!(text.contains("Movies you watched"));
    assert!(text.contains("0 movies"));
}

#[test]
fn loading_screen_shows_loader() {
    let (mut app, mut rx) = app_with_commands();
    searched(&mut app, &mut rx, "alien");
    let text = screen_text(&app);
    assert!(text.contains("Loading..."));
}

#[test]
fn results_and_count_are_rendered() {
    let (mut app, mut rx) = app_with_commands();
    let seq = searched(&mut app, &mut rx, "alien");
    app.on_search_settled(
        seq,
        Ok(vec![
            search_result("tt0078748", "Alien", "1979"),
            search_result("tt0090605", "Aliens", "1986"),
        ]),
    );

    let text = screen_text(&app);
    assert!(text.contains("Found 2 results"));
    assert!(text.contains("Aliens"));
    assert!(text.contains("1986"));
    assert!(!text.contains("Loading..."));
}

#[test]
fn error_is_rendered_instead_of_results() {
    let (mut app, mut rx) = app_with_commands();
    let seq = searched(&mut app, &mut rx, "qqqq");
    app.on_search_settled(seq, Err("Movie not found".to_string()));

    let text = screen_text(&app);
    assert!(text.contains("Movie not found"));
    assert!(!text.contains("Loading..."));
}

#[test]
fn details_replace_watchlist_while_selected() {
    let (mut app, _rx) = app_with_commands();
    app.select_movie("tt1375666".to_string());
    app.on_details_settled(
        "tt1375666".to_string(),
        Ok(movie_details("tt1375666", "Inception", "148 min", "8.8")),
    );

    let text = screen_text(&app);
    assert!(text.contains("Details"));
    assert!(text.contains("Inception"));
    assert!(text.contains("Your rating"));
    assert!(!text.contains("Movies you watched"));
}

#[test]
fn long_result_list_scrolls_to_cursor() {
    let (mut app, mut rx) = app_with_commands();
    let seq = searched(&mut app, &mut rx, "movie");
    let results = (0..40)
        .map(|n| search_result(&format!("tt{n:07}"), &format!("Movie {n:02}"), "2000"))
        .collect();
    app.on_search_settled(seq, Ok(results));

    let text = screen_text(&app);
    assert!(text.contains("Movie 00"));
    assert!(!text.contains("Movie 39"));

    app.move_result_cursor(39);
    let text = screen_text(&app);
    assert!(text.contains("Movie 39"));
    assert!(!text.contains("Movie 00"));
}
