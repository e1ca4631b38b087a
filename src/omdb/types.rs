//! Wire types for the OMDb API.
//!
//! Only the fields the app consumes are modelled. OMDb uses PascalCase keys
//! and string values for everything, including numbers ("8.8", "148 min").

use serde::{Deserialize, Serialize};

/// One entry of a `?s=` search answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
}

/// Answer to a `?i=` lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetails {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
    #[serde(rename = "Runtime", default)]
    pub runtime: String,
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: String,
    #[serde(rename = "Plot", default)]
    pub plot: String,
    #[serde(rename = "Released", default)]
    pub released: String,
    #[serde(rename = "Actors", default)]
    pub actors: String,
    #[serde(rename = "Director", default)]
    pub director: String,
    #[serde(rename = "Genre", default)]
    pub genre: String,
}

impl MovieDetails {
    /// Runtime in minutes, parsed from values like "148 min". Unknown is 0.
    pub fn runtime_minutes(&self) -> f64 {
        self.runtime
            .split_whitespace()
            .next()
            .and_then(|n| n.parse::<f64>().ok())
            .unwrap_or(0.0)
    }

    /// Critic rating as a number. "N/A" and other non-numeric values are 0.
    pub fn critic_rating(&self) -> f64 {
        self.imdb_rating.trim().parse::<f64>().unwrap_or(0.0)
    }
}
