use crate::{
    error::AppResult,
    models::{FilterCriteria, Genre, MovieDetail, MovieSummary},
};

pub mod tmdb;

pub use tmdb::TmdbProvider;

/// Movie catalog abstraction.
///
/// The selection pipeline only ever talks to the catalog through this trait:
/// candidate discovery, detail enrichment and the genre list. Keeping the
/// seam here lets tests drive the pipeline with canned catalogs.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetches one page of discovery candidates matching the criteria.
    /// Adult content is excluded at the query level; the caller applies the
    /// lexical filter on top.
    async fn discover(
        &self,
        criteria: &FilterCriteria,
        page: u32,
    ) -> AppResult<Vec<MovieSummary>>;

    /// Fetches the full detail record for one movie, cache-checked.
    async fn movie_details(&self, id: u64) -> AppResult<MovieDetail>;

    /// Fetches the catalog genre list, cache-first.
    async fn genres(&self) -> AppResult<Vec<Genre>>;
}
