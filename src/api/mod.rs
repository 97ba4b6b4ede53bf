//! API clients for external services
//!
//! - OMDb: canonical movie metadata (title, year, plot)
//! - TMDB: catalog search and user reviews

pub mod omdb;
pub mod tmdb;

pub use omdb::OmdbClient;
pub use tmdb::TmdbClient;

use thiserror::Error;

/// Errors surfaced by the API clients
///
/// Transport failures and non-success statuses are both provider-side
/// failures as far as the caller is concerned; `NotFound` is the one kind
/// the boundary treats differently (exit code, message).
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{provider} returned HTTP {status}")]
    Status { provider: &'static str, status: u16 },

    #[error("{provider} request failed: {source}")]
    Transport {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} sent an invalid response: {detail}")]
    InvalidResponse {
        provider: &'static str,
        detail: String,
    },

    #[error("no match found for \"{title}\" ({year})")]
    NotFound { title: String, year: u16 },
}

impl ApiError {
    /// True when the error means the catalog had no entry for the query
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }
}
