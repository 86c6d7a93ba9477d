use axum::Json;

use crate::models::{MoodCategory, MOOD_CATEGORIES};

/// Handler for the mood taxonomy endpoint. The client populates its mood
/// selectors from this; the table itself is compiled in.
pub async fn list() -> Json<&'static [MoodCategory]> {
    Json(MOOD_CATEGORIES)
}
