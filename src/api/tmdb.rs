//! TMDB (The Movie Database) API client
//!
//! Resolves a movie's TMDB id via search and fetches user reviews for it.
//! API docs: https://developer.themoviedb.org/docs

use anyhow::Result;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;

use crate::api::ApiError;
use crate::models::REVIEW_LIMIT;

const PROVIDER: &str = "TMDB";

/// TMDB API client
pub struct TmdbClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl TmdbClient {
    /// Create a new TMDB client with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, "https://api.themoviedb.org/3")
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

    /// Make an authenticated GET request and deserialize the response
    async fn get<T: for<'de> Deserialize<'de>>(&self, endpoint: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self
            .client
            .get(&url)
            .query(&[("api_key", &self.api_key)])
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
        let parsed: T = serde_json::from_str(&body).map_err(|e| ApiError::InvalidResponse {
            provider: PROVIDER,
            detail: format!("JSON parse error: {}", e),
        })?;
        Ok(parsed)
    }

    /// Resolve the TMDB id of the best-matching movie for a title and year
    ///
    /// The provider's relevance ranking is trusted as-is: the first search
    /// result wins. Zero results is a not-found error, not an empty id.
    pub async fn find_movie_id(&self, title: &str, year: u16) -> Result<u64> {
        let endpoint = format!(
            "/search/movie?query={}&year={}",
            urlencoding::encode(title),
            year
        );
        let response: SearchResponse = self.get(&endpoint).await?;

        match response.results.first() {
            Some(entry) => Ok(entry.id),
            None => Err(ApiError::NotFound {
                title: title.to_string(),
                year,
            }
            .into()),
        }
    }

    /// Fetch user reviews for a movie id, truncated to the first
    /// [`REVIEW_LIMIT`] in the provider's returned order
    ///
    /// An empty result list is a valid outcome and yields an empty vector.
    pub async fn reviews(&self, movie_id: u64) -> Result<Vec<String>> {
        let endpoint = format!("/movie/{}/reviews", movie_id);
        let response: ReviewsResponse = self.get(&endpoint).await?;

        Ok(response
            .results
            .into_iter()
            .map(|r| r.content)
            .take(REVIEW_LIMIT)
            .collect())
    }
}

// =============================================================================
// Response Structures (internal deserialization)
// =============================================================================

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<SearchEntry>,
}

#[derive(Debug, Deserialize)]
struct SearchEntry {
    id: u64,
}

#[derive(Debug, Deserialize)]
struct ReviewsResponse {
    results: Vec<ReviewEntry>,
}

#[derive(Debug, Deserialize)]
struct ReviewEntry {
    content: String,
}
