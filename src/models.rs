//! Data structures for movie lookups
//!
//! Everything here is transient: a `MovieQuery` goes in, a `LookupResult`
//! comes out, and nothing outlives the lookup call that produced it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of reviews kept from the provider's result list
pub const REVIEW_LIMIT: usize = 3;

/// A single movie lookup request: title plus release year
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieQuery {
    pub title: String,
    pub year: u16,
}

impl MovieQuery {
    pub fn new(title: impl Into<String>, year: u16) -> Self {
        Self {
            title: title.into(),
            year,
        }
    }
}

impl fmt::Display for MovieQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.year)
    }
}

/// Canonical metadata from OMDb
///
/// Any field the provider omits stays `None` — absent is absent, never a
/// placeholder string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieMetadata {
    pub title: Option<String>,
    pub year: Option<String>,
    pub synopsis: Option<String>,
}

/// Merged result of one lookup: OMDb metadata plus up to
/// [`REVIEW_LIMIT`] TMDB reviews in provider order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    pub title: Option<String>,
    pub year: Option<String>,
    pub synopsis: Option<String>,
    pub reviews: Vec<String>,
}

impl LookupResult {
    pub fn new(metadata: MovieMetadata, reviews: Vec<String>) -> Self {
        Self {
            title: metadata.title,
            year: metadata.year,
            synopsis: metadata.synopsis,
            reviews,
        }
    }
}

impl fmt::Display for LookupResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let missing = "(not available)";
        writeln!(f, "Title: {}", self.title.as_deref().unwrap_or(missing))?;
        writeln!(f, "Year: {}", self.year.as_deref().unwrap_or(missing))?;
        writeln!(
            f,
            "Synopsis: {}",
            self.synopsis.as_deref().unwrap_or(missing)
        )?;
        writeln!(f)?;
        writeln!(f, "Reviews:")?;
        if self.reviews.is_empty() {
            write!(f, "No reviews available.")?;
        } else {
            for (idx, review) in self.reviews.iter().enumerate() {
                writeln!(f)?;
                write!(f, "Review {}: {}", idx + 1, review)?;
            }
        }
        Ok(())
    }
}
