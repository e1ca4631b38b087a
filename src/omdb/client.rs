use std::time::Duration;

use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::Value;

use crate::config::ApiConfig;

use super::error::OmdbError;
use super::types::{MovieDetails, SearchResult};

/// HTTP client for the OMDb API.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct OmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Deserialize)]
struct SearchPage {
    #[serde(rename = "Search", default)]
    search: Vec<SearchResult>,
}

impl OmdbClient {
    pub fn new(api: &ApiConfig, api_key: impl Into<String>) -> Result<Self, OmdbError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(api.connect_timeout_seconds as u64))
            .build()?;

        Ok(Self {
            client,
            base_url: api.base_url.clone(),
            api_key: api_key.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Free-text title search (`?s=`). Results keep the upstream order.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, OmdbError> {
        let body = self.get(&[("s", query)]).await?;
        let page: SearchPage = serde_json::from_value(body)?;
        Ok(page.search)
    }

    /// Full record for one title (`?i=`).
    pub async fn details(&self, imdb_id: &str) -> Result<MovieDetails, OmdbError> {
        let body = self.get(&[("i", imdb_id)]).await?;
        Ok(serde_json::from_value(body)?)
    }

    async fn get(&self, params: &[(&str, &str)]) -> Result<Value, OmdbError> {
        let url = self.request_url(params)?;
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(OmdbError::Status {
                status: status.as_u16(),
            });
        }

        let text = response.text().await?;
        let body: Value = serde_json::from_str(&text)?;

        if body.get("Response").and_then(Value::as_str) == Some("False") {
            return Err(OmdbError::NotFound {
                reason: body.get("Error").and_then(Value::as_str).map(String::from),
            });
        }

        Ok(body)
    }

    fn request_url(&self, params: &[(&str, &str)]) -> Result<Url, OmdbError> {
        let pairs = params
            .iter()
            .copied()
            .chain(std::iter::once(("apikey", self.api_key.as_str())));
        Url::parse_with_params(&self.base_url, pairs).map_err(|e| OmdbError::InvalidUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })
    }
}
