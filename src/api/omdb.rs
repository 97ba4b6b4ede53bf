//! OMDb API client
//!
//! Fetches canonical movie metadata (title, year, plot) by title and year.
//! API docs: https://www.omdbapi.com/

use anyhow::Result;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;

use crate::api::ApiError;
use crate::models::MovieMetadata;

const PROVIDER: &str = "OMDb";

/// OMDb API client
pub struct OmdbClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl OmdbClient {
    /// Create a new OMDb client with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, "https://www.omdbapi.com/")
    }

    /// Create a client with a custom base URL (for testing)
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
        }
    }

    /// Fetch metadata for a movie by title and year
    ///
    /// Fields the provider omits come back as `None`. A non-success status
    /// is an error; there are no retries.
    pub async fn metadata(&self, title: &str, year: u16) -> Result<MovieMetadata> {
        let year = year.to_string();
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("t", title),
                ("y", year.as_str()),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                provider: PROVIDER,
                source,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ApiError::Status {
                provider: PROVIDER,
                status: status.as_u16(),
            }
            .into());
        }

        let body = response.text().await.map_err(|source| ApiError::Transport {
            provider: PROVIDER,
            source,
        })?;
        let raw: OmdbResponse =
            serde_json::from_str(&body).map_err(|e| ApiError::InvalidResponse {
                provider: PROVIDER,
                detail: format!("JSON parse error: {}", e),
            })?;

        Ok(raw.into_metadata())
    }
}

#[derive(Debug, Deserialize)]
struct OmdbResponse {
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "Plot")]
    plot: Option<String>,
}

impl OmdbResponse {
    fn into_metadata(self) -> MovieMetadata {
        MovieMetadata {
            title: self.title,
            year: self.year,
            synopsis: self.plot,
        }
    }
}
