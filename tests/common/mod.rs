//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_omdb;

use frate::config::{Config, ConfigStore};
use frate::omdb::{MovieDetails, SearchResult};
use frate::ui::app::{App, UiCommand};
use frate::ui::watchlist::WatchedMovie;
use std::path::PathBuf;
use tokio::sync::mpsc;

pub const TEST_API_KEY: &str = "test-key";

/// Config pointing at `base_url` with a test API key.
pub fn test_config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.api.base_url = base_url.to_string();
    config.api.api_key = Some(TEST_API_KEY.to_string());
    config
}

pub fn test_store(config: Config) -> ConfigStore {
    ConfigStore::new(config, PathBuf::from("/nonexistent/frate/config.toml"))
}

/// App wired to a command channel the test can inspect.
pub fn app_with_commands() -> (App, mpsc::Receiver<UiCommand>) {
    let (tx, rx) = mpsc::channel(16);
    let mut app = App::new(test_store(test_config("http://127.0.0.1:9/")));
    app.attach_commands(tx);
    (app, rx)
}

/// Drain every command queued so far.
pub fn drain(rx: &mut mpsc::Receiver<UiCommand>) -> Vec<UiCommand> {
    let mut commands = Vec::new();
    while let Ok(command) = rx.try_recv() {
        commands.push(command);
    }
    commands
}

pub fn search_result(id: &str, title: &str, year: &str) -> SearchResult {
    SearchResult {
        imdb_id: id.to_string(),
        title: title.to_string(),
        year: year.to_string(),
        poster: format!("https://img.example.com/{id}.jpg"),
    }
}

pub fn movie_details(id: &str, title: &str, runtime: &str, rating: &str) -> MovieDetails {
    MovieDetails {
        imdb_id: id.to_string(),
        title: title.to_string(),
        year: "2010".to_string(),
        poster: String::new(),
        runtime: runtime.to_string(),
        imdb_rating: rating.to_string(),
        plot: "Plot.".to_string(),
        released: "16 Jul 2010".to_string(),
        actors: "Someone".to_string(),
        director: "Someone Else".to_string(),
        genre: "Drama".to_string(),
    }
}

pub fn watched(id: &str, crit: f64, user: f64, runtime: f64) -> WatchedMovie {
    WatchedMovie {
        imdb_id: id.to_string(),
        title: format!("Movie {id}"),
        poster: String::new(),
        imdb_rating: crit,
        user_rating: user,
        runtime,
    }
}
