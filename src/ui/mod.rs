pub mod app;
pub mod details;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod search;
pub mod selection;
pub mod terminal_guard;
pub mod theme;
pub mod watchlist;
