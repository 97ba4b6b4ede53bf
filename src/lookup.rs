//! Lookup orchestration
//!
//! Composes the three provider calls into one combined result: metadata and
//! id resolution run concurrently, the review fetch runs strictly after the
//! id is known.

use anyhow::Result;

use crate::api::{OmdbClient, TmdbClient};
use crate::models::{LookupResult, MovieQuery};

/// Orchestrates one movie lookup across both providers
pub struct MovieLookup {
    omdb: OmdbClient,
    tmdb: TmdbClient,
}

impl MovieLookup {
    pub fn new(omdb: OmdbClient, tmdb: TmdbClient) -> Self {
        Self { omdb, tmdb }
    }

    /// Run a full lookup for one query
    ///
    /// The OMDb metadata fetch and the TMDB id search are independent and
    /// run concurrently; the first error wins and the sibling future is
    /// dropped. The review fetch only starts once both have completed, so
    /// it always sees a valid id. Any leaf failure aborts the whole lookup —
    /// there is no metadata-without-reviews fallback.
    pub async fn lookup(&self, query: &MovieQuery) -> Result<LookupResult> {
        let (metadata, movie_id) = tokio::try_join!(
            self.omdb.metadata(&query.title, query.year),
            self.tmdb.find_movie_id(&query.title, query.year),
        )?;

        let reviews = self.tmdb.reviews(movie_id).await?;

        Ok(LookupResult::new(metadata, reviews))
    }
}
