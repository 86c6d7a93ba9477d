use serde::Serialize;

use crate::models::{Genre, MovieDetail};
use crate::util::{format_rating, format_runtime, release_year};

/// Display-ready projection of a recommended movie. Every field is already
/// formatted; the client renders these verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieView {
    pub id: u64,
    pub title: String,
    pub poster_url: Option<String>,
    pub year: String,
    pub rating: String,
    pub duration: String,
    pub genres: String,
    pub overview: String,
}

impl MovieView {
    /// Pure projection from a detail record to display fields. Callers check
    /// for an absent movie before projecting; there is no empty-state view.
    pub fn project(movie: &MovieDetail, genre_list: &[Genre], image_base_url: &str) -> Self {
        let genres = movie
            .genre_ids
            .iter()
            .filter_map(|id| genre_list.iter().find(|g| g.id == *id))
            .map(|g| g.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            id: movie.id,
            title: movie.title.clone(),
            poster_url: movie
                .poster_path
                .as_ref()
                .map(|path| format!("{}{}", image_base_url, path)),
            year: release_year(&movie.release_date).to_string(),
            rating: format_rating(movie.vote_average),
            duration: format_runtime(movie.runtime),
            genres,
            overview: movie.overview.clone(),
        }
    }
}
