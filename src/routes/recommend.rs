use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::{moods::find_sub_mood, FilterCriteria, Format},
    state::AppState,
    view::MovieView,
};

#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    pub mood: String,
    pub sub_mood: String,
    pub format: Option<String>,
    pub year_start: Option<i32>,
    pub year_end: Option<i32>,
}

/// Handler for the recommendation endpoint: resolves the mood to genre ids,
/// builds the filter criteria and returns one movie as a display projection.
pub async fn recommend(
    State(state): State<AppState>,
    Query(params): Query<RecommendQuery>,
) -> AppResult<Json<MovieView>> {
    let sub_mood = find_sub_mood(&params.mood, &params.sub_mood).ok_or_else(|| {
        AppError::validation("sub_mood", "Please select a mood and a specific mood")
    })?;

    let mut criteria = FilterCriteria::new(
        sub_mood.genres.to_vec(),
        Format::from_param(params.format.as_deref()),
    );
    if let Some(year) = params.year_start {
        criteria.set_year_start(year);
    }
    if let Some(year) = params.year_end {
        criteria.set_year_end(year);
    }

    tracing::info!(
        mood = %params.mood,
        sub_mood = %params.sub_mood,
        format = ?criteria.format,
        "Recommendation requested"
    );

    let movie = state.recommender.random_movie(&criteria).await.ok_or_else(|| {
        AppError::NotFound(
            "No movie found with the selected filters. Please try different criteria.".to_string(),
        )
    })?;

    let genres = state.recommender.genre_labels().await;
    Ok(Json(MovieView::project(
        &movie,
        &genres,
        &state.image_base_url,
    )))
}
