//! Error types for OMDb lookups.

use thiserror::Error;

/// Message shown when the API answers with `"Response": "False"`.
pub const NOT_FOUND_MESSAGE: &str = "Movie not found";

/// Errors that can occur while talking to the OMDb API.
///
/// Every variant ends up as a single line of text in the UI; the variant
/// only matters for logging.
#[derive(Debug, Error)]
pub enum OmdbError {
    /// Request could not be sent or the body could not be read.
    ///
    /// Holds the error without its URL, which carries the API key.
    #[error("{0}")]
    Transport(#[source] reqwest::Error),

    /// Base URL plus parameters did not form a valid URL.
    #[error("Invalid request URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Upstream returned a non-2xx status.
    #[error("Request failed with status {status}")]
    Status { status: u16 },

    /// Body was not the JSON shape we expect.
    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Application-level negative answer.
    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound {
        /// Text of the upstream `Error` field, kept for diagnostics.
        reason: Option<String>,
    },
}

impl From<reqwest::Error> for OmdbError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.without_url())
    }
}

impl OmdbError {
    /// Text stored in UI state for this failure.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
