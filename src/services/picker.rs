use std::sync::Arc;

use crate::{
    models::{FilterCriteria, Genre, MovieDetail, MovieSummary},
    services::content_filter::contains_adult_content,
    services::providers::CatalogProvider,
};

/// Discovery draws a random page from this many result pages.
const DISCOVER_PAGES: u32 = 5;

/// How many times a detail-stage content rejection may re-roll the whole
/// selection before giving up with an absent result. The draw keeps no memory
/// of rejected candidates, so the same movie can be drawn again within the
/// budget.
const MAX_REROLLS: u32 = 10;

enum Roll {
    Found(MovieDetail),
    /// The catalog has nothing for these filters; stop immediately.
    Exhausted,
    /// The chosen candidate failed the detail-stage check; draw again.
    Rejected,
}

/// Orchestrates candidate discovery, filtering and detail enrichment into a
/// single recommended movie.
pub struct Recommender {
    provider: Arc<dyn CatalogProvider>,
}

impl Recommender {
    pub fn new(provider: Arc<dyn CatalogProvider>) -> Self {
        Self { provider }
    }

    /// Picks one random movie matching the criteria, or `None` when the
    /// filters match nothing. Network failures anywhere in the pipeline are
    /// logged and reported as `None`; they never escape this service.
    pub async fn random_movie(&self, criteria: &FilterCriteria) -> Option<MovieDetail> {
        for attempt in 0..MAX_REROLLS {
            match self.roll(criteria).await {
                Ok(Roll::Found(detail)) => return Some(detail),
                Ok(Roll::Exhausted) => return None,
                Ok(Roll::Rejected) => {
                    tracing::debug!(attempt, "Candidate rejected at detail stage, re-rolling");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Movie discovery failed");
                    return None;
                }
            }
        }

        tracing::warn!(attempts = MAX_REROLLS, "Re-roll budget exhausted");
        None
    }

    async fn roll(&self, criteria: &FilterCriteria) -> crate::error::AppResult<Roll> {
        let page = fastrand::u32(1..=DISCOVER_PAGES);
        let candidates = self.provider.discover(criteria, page).await?;

        // A whole empty page means these filters find nothing; no further
        // pages are attempted.
        if candidates.is_empty() {
            return Ok(Roll::Exhausted);
        }

        let survivors: Vec<MovieSummary> = candidates
            .into_iter()
            .filter(|m| !contains_adult_content(&m.overview))
            .filter(|m| criteria.format.accepts(&m.genre_ids))
            .collect();

        if survivors.is_empty() {
            return Ok(Roll::Exhausted);
        }

        let pick = &survivors[fastrand::usize(..survivors.len())];

        // The detail record can carry a richer overview than the discovery
        // projection, so the content filter runs again against it.
        match self.provider.movie_details(pick.id).await {
            Ok(detail) if !contains_adult_content(&detail.overview) => Ok(Roll::Found(detail)),
            Ok(detail) => {
                tracing::debug!(id = detail.id, "Detail overview failed content filter");
                Ok(Roll::Rejected)
            }
            Err(e) => {
                tracing::warn!(id = pick.id, error = %e, "Detail fetch failed");
                Ok(Roll::Rejected)
            }
        }
    }

    /// Genre list for labeling the recommendation. Degrades to an empty list
    /// on any failure; the movie simply renders without genre labels.
    pub async fn genre_labels(&self) -> Vec<Genre> {
        match self.provider.genres().await {
            Ok(genres) => genres,
            Err(e) => {
                tracing::warn!(error = %e, "Genre lookup failed, labels omitted");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::{Format, ANIMATION_GENRE_ID};
    use crate::services::providers::MockCatalogProvider;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn summary(id: u64, overview: &str, genre_ids: Vec<u32>) -> MovieSummary {
        MovieSummary {
            id,
            title: format!("Movie {}", id),
            overview: overview.to_string(),
            genre_ids,
        }
    }

    fn detail(id: u64, overview: &str, genre_ids: Vec<u32>) -> MovieDetail {
        MovieDetail {
            id,
            title: format!("Movie {}", id),
            overview: overview.to_string(),
            release_date: "2015-06-01".to_string(),
            runtime: 110,
            vote_average: 7.2,
            poster_path: None,
            genre_ids,
        }
    }

    fn criteria(format: Format) -> FilterCriteria {
        FilterCriteria::new(vec![35, 18], format)
    }

    #[tokio::test]
    async fn test_adult_candidates_are_never_picked() {
        let mut provider = MockCatalogProvider::new();
        provider.expect_discover().returning(|_, _| {
            Ok(vec![
                summary(1, "Contains explicit scenes", vec![35]),
                summary(2, "A gentle comedy about a bakery", vec![35]),
                summary(3, "Graphic violence and gore", vec![35]),
            ])
        });
        provider
            .expect_movie_details()
            .withf(|id| *id == 2)
            .returning(|id| Ok(detail(id, "A gentle comedy about a bakery", vec![35])));

        let recommender = Recommender::new(Arc::new(provider));
        let movie = recommender.random_movie(&criteria(Format::Any)).await;

        assert_eq!(movie.unwrap().id, 2);
    }

    #[tokio::test]
    async fn test_animation_format_keeps_only_animated() {
        let mut provider = MockCatalogProvider::new();
        provider.expect_discover().returning(|_, _| {
            Ok(vec![
                summary(1, "Live action drama", vec![18]),
                summary(2, "A charming cartoon", vec![ANIMATION_GENRE_ID, 35]),
            ])
        });
        provider
            .expect_movie_details()
            .withf(|id| *id == 2)
            .returning(|id| Ok(detail(id, "A charming cartoon", vec![ANIMATION_GENRE_ID, 35])));

        let recommender = Recommender::new(Arc::new(provider));
        let movie = recommender.random_movie(&criteria(Format::Animation)).await;

        assert!(movie
            .unwrap()
            .genre_ids
            .contains(&ANIMATION_GENRE_ID));
    }

    #[tokio::test]
    async fn test_live_action_format_excludes_animated() {
        let mut provider = MockCatalogProvider::new();
        provider.expect_discover().returning(|_, _| {
            Ok(vec![
                summary(1, "Live action drama", vec![18]),
                summary(2, "A charming cartoon", vec![ANIMATION_GENRE_ID, 35]),
            ])
        });
        provider
            .expect_movie_details()
            .withf(|id| *id == 1)
            .returning(|id| Ok(detail(id, "Live action drama", vec![18])));

        let recommender = Recommender::new(Arc::new(provider));
        let movie = recommender.random_movie(&criteria(Format::LiveAction)).await;

        assert!(!movie
            .unwrap()
            .genre_ids
            .contains(&ANIMATION_GENRE_ID));
    }

    #[tokio::test]
    async fn test_empty_page_returns_absent_without_reroll() {
        let mut provider = MockCatalogProvider::new();
        provider
            .expect_discover()
            .times(1)
            .returning(|_, _| Ok(vec![]));
        provider.expect_movie_details().never();

        let recommender = Recommender::new(Arc::new(provider));
        assert!(recommender.random_movie(&criteria(Format::Any)).await.is_none());
    }

    #[tokio::test]
    async fn test_no_survivors_returns_absent() {
        let mut provider = MockCatalogProvider::new();
        provider
            .expect_discover()
            .times(1)
            .returning(|_, _| Ok(vec![summary(1, "Nudity throughout", vec![18])]));
        provider.expect_movie_details().never();

        let recommender = Recommender::new(Arc::new(provider));
        assert!(recommender.random_movie(&criteria(Format::Any)).await.is_none());
    }

    #[tokio::test]
    async fn test_detail_stage_rejection_rerolls_up_to_cap() {
        let mut provider = MockCatalogProvider::new();
        provider
            .expect_discover()
            .times(10)
            .returning(|_, _| Ok(vec![summary(1, "Looks harmless in discovery", vec![18])]));
        // The richer detail overview trips the filter every time
        provider
            .expect_movie_details()
            .times(10)
            .returning(|id| Ok(detail(id, "Director's cut with explicit material", vec![18])));

        let recommender = Recommender::new(Arc::new(provider));
        assert!(recommender.random_movie(&criteria(Format::Any)).await.is_none());
    }

    #[tokio::test]
    async fn test_detail_fetch_failure_rerolls_then_succeeds() {
        let calls = Arc::new(AtomicU32::new(0));
        let calls_in_mock = Arc::clone(&calls);

        let mut provider = MockCatalogProvider::new();
        provider
            .expect_discover()
            .times(2)
            .returning(|_, _| Ok(vec![summary(1, "A quiet road movie", vec![18])]));
        provider.expect_movie_details().times(2).returning(move |id| {
            if calls_in_mock.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(AppError::Network("timeout".to_string()))
            } else {
                Ok(detail(id, "A quiet road movie", vec![18]))
            }
        });

        let recommender = Recommender::new(Arc::new(provider));
        let movie = recommender.random_movie(&criteria(Format::Any)).await;

        assert_eq!(movie.unwrap().id, 1);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_discovery_failure_is_swallowed_to_absent() {
        let mut provider = MockCatalogProvider::new();
        provider
            .expect_discover()
            .times(1)
            .returning(|_, _| Err(AppError::Network("connection refused".to_string())));
        provider.expect_movie_details().never();

        let recommender = Recommender::new(Arc::new(provider));
        assert!(recommender.random_movie(&criteria(Format::Any)).await.is_none());
    }

    #[tokio::test]
    async fn test_discovery_page_stays_in_range() {
        let mut provider = MockCatalogProvider::new();
        provider
            .expect_discover()
            .withf(|_, page| (1..=5).contains(page))
            .returning(|_, _| Ok(vec![summary(1, "A quiet road movie", vec![18])]));
        provider
            .expect_movie_details()
            .returning(|id| Ok(detail(id, "A quiet road movie", vec![18])));

        let recommender = Recommender::new(Arc::new(provider));
        for _ in 0..20 {
            assert!(recommender.random_movie(&criteria(Format::Any)).await.is_some());
        }
    }

    #[tokio::test]
    async fn test_genre_labels_degrade_to_empty_on_failure() {
        let mut provider = MockCatalogProvider::new();
        provider
            .expect_genres()
            .returning(|| Err(AppError::Network("down".to_string())));

        let recommender = Recommender::new(Arc::new(provider));
        assert!(recommender.genre_labels().await.is_empty());
    }
}
