//! frate: search the OMDb movie database from the terminal and keep a rated
//! watchlist for the session.
//!
//! # Modules
//!
//! - `config` - TOML configuration and the shared store
//! - `omdb` - HTTP client for search and details lookups
//! - `fetch` - background worker executing lookups for the UI
//! - `ui` - reducers, input handling and rendering

pub mod cli;
pub mod config;
pub mod fetch;
pub mod logging;
pub mod omdb;
pub mod ui;
