//! OMDb (Open Movie Database) API client.
//!
//! Two lookups are used: free-text search (`?s=`) for the results list and
//! id lookup (`?i=`) for the details panel. Both send the access key as the
//! `apikey` query parameter.

mod client;
mod error;
mod types;

pub use client::OmdbClient;
pub use error::{OmdbError, NOT_FOUND_MESSAGE};
pub use types::{MovieDetails, SearchResult};
