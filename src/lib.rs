//! reelcap - movie metadata and review lookup
//!
//! Queries OMDb for canonical metadata and TMDB for a catalog id plus up to
//! 3 user reviews, concurrently where the calls are independent, and merges
//! the results into one summary.
//!
//! # Modules
//!
//! - `models` - Query, metadata, and merged result types
//! - `api` - API clients (OMDb, TMDB) and their shared error type
//! - `lookup` - The fan-out/fan-in orchestrator
//! - `config` - API key resolution
//! - `cli` / `commands` - Command-line surface

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod lookup;
pub mod models;

// Re-export commonly used types
pub use api::{ApiError, OmdbClient, TmdbClient};
pub use lookup::MovieLookup;
pub use models::{LookupResult, MovieMetadata, MovieQuery, REVIEW_LIMIT};
