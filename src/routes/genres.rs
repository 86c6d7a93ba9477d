use axum::{extract::State, Json};

use crate::{models::Genre, state::AppState};

/// Handler for the genre-list endpoint. Degrades to an empty list when the
/// catalog is unreachable; never an error.
pub async fn list(State(state): State<AppState>) -> Json<Vec<Genre>> {
    Json(state.recommender.genre_labels().await)
}
