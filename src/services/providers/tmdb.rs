use std::sync::Arc;

use reqwest::Client as HttpClient;

use crate::{
    cache::SnapshotCache,
    error::AppResult,
    models::{
        DiscoverResponse, FilterCriteria, Genre, GenreListResponse, MovieDetail,
        MovieDetailResponse, MovieSummary,
    },
    services::http::{fetch_json, RetryPolicy},
    services::providers::CatalogProvider,
};

/// TMDB-backed catalog provider.
///
/// Wraps the three TMDB endpoints the app uses (discover, movie detail, genre
/// list) behind the retrying fetch layer, and writes trimmed projections
/// through the snapshot cache.
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    language: String,
    policy: RetryPolicy,
    cache: Arc<SnapshotCache>,
}

impl TmdbProvider {
    pub fn new(
        cache: Arc<SnapshotCache>,
        policy: RetryPolicy,
        api_key: String,
        api_url: String,
        language: String,
    ) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
            language,
            policy,
            cache,
        }
    }

    /// Builds the discovery query string parameters.
    ///
    /// Genre ids are sorted and deduplicated so identical criteria always
    /// produce the identical query, whatever order the taxonomy listed them
    /// in. Year bounds expand to the first and last day of the year.
    fn discover_query(&self, criteria: &FilterCriteria, page: u32) -> Vec<(&'static str, String)> {
        let genre_key = criteria
            .normalized_genres()
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");

        let mut query = vec![
            ("api_key", self.api_key.clone()),
            ("with_genres", genre_key),
            ("page", page.to_string()),
            ("language", self.language.clone()),
            ("sort_by", "popularity.desc".to_string()),
            ("include_adult", "false".to_string()),
        ];

        if let Some(year) = criteria.year_start {
            query.push(("primary_release_date.gte", format!("{}-01-01", year)));
        }
        if let Some(year) = criteria.year_end {
            query.push(("primary_release_date.lte", format!("{}-12-31", year)));
        }

        query
    }
}

#[async_trait::async_trait]
impl CatalogProvider for TmdbProvider {
    async fn discover(
        &self,
        criteria: &FilterCriteria,
        page: u32,
    ) -> AppResult<Vec<MovieSummary>> {
        let url = format!("{}/discover/movie", self.api_url);
        let query = self.discover_query(criteria, page);

        let response: DiscoverResponse =
            fetch_json(&self.http_client, &url, &query, &self.policy).await?;

        let summaries: Vec<MovieSummary> = response
            .results
            .into_iter()
            .map(MovieSummary::from)
            .collect();

        tracing::info!(
            page,
            candidates = summaries.len(),
            provider = "tmdb",
            "Discovery page fetched"
        );

        self.cache.put_movies(summaries.iter().cloned()).await;
        Ok(summaries)
    }

    async fn movie_details(&self, id: u64) -> AppResult<MovieDetail> {
        if let Some(cached) = self.cache.detail(id).await {
            return Ok(cached);
        }

        let url = format!("{}/movie/{}", self.api_url, id);
        let query = vec![
            ("api_key", self.api_key.clone()),
            ("language", self.language.clone()),
            ("append_to_response", "images".to_string()),
        ];

        let raw: MovieDetailResponse =
            fetch_json(&self.http_client, &url, &query, &self.policy).await?;
        let detail = MovieDetail::from(raw);

        self.cache.put_detail(detail.clone()).await;
        Ok(detail)
    }

    async fn genres(&self) -> AppResult<Vec<Genre>> {
        if let Some(cached) = self.cache.genres().await {
            return Ok(cached);
        }

        let url = format!("{}/genre/movie/list", self.api_url);
        let query = vec![
            ("api_key", self.api_key.clone()),
            ("language", self.language.clone()),
        ];

        let response: GenreListResponse =
            fetch_json(&self.http_client, &url, &query, &self.policy).await?;

        self.cache.put_genres(response.genres.clone()).await;
        Ok(response.genres)
    }
}
