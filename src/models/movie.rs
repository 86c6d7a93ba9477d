use serde::{Deserialize, Serialize};

/// A catalog genre
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

/// Response from the genre-list endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct GenreListResponse {
    pub genres: Vec<Genre>,
}

/// Response from the discovery endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct DiscoverResponse {
    #[serde(default)]
    pub results: Vec<DiscoverMovie>,
}

/// A single discovery result. Only the fields the selection pipeline needs.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscoverMovie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub genre_ids: Vec<u32>,
}

/// Trimmed projection of a discovery result, as stored in the cache
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: u64,
    pub title: String,
    pub overview: String,
    pub genre_ids: Vec<u32>,
}

impl From<DiscoverMovie> for MovieSummary {
    fn from(movie: DiscoverMovie) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            overview: movie.overview,
            genre_ids: movie.genre_ids,
        }
    }
}

/// Raw response from the movie-detail endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct MovieDetailResponse {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
}

/// Trimmed detail record kept in the cache and handed to the view layer.
/// Only the essential fields are retained to bound snapshot size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub id: u64,
    pub title: String,
    pub overview: String,
    pub release_date: String,
    pub runtime: u32,
    pub vote_average: f64,
    pub poster_path: Option<String>,
    pub genre_ids: Vec<u32>,
}

impl From<MovieDetailResponse> for MovieDetail {
    fn from(raw: MovieDetailResponse) -> Self {
        Self {
            id: raw.id,
            title: raw.title,
            overview: raw.overview,
            release_date: raw.release_date,
            runtime: raw.runtime.unwrap_or(0),
            vote_average: raw.vote_average,
            poster_path: raw.poster_path,
            genre_ids: raw.genres.into_iter().map(|g| g.id).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_projection_keeps_essential_fields() {
        let json = r#"{
            "id": 27205,
            "title": "Inception",
            "overview": "A thief who steals corporate secrets",
            "release_date": "2010-07-15",
            "runtime": 148,
            "vote_average": 8.37,
            "poster_path": "/inception.jpg",
            "genres": [{"id": 28, "name": "Action"}, {"id": 878, "name": "Science Fiction"}],
            "budget": 160000000,
            "production_companies": []
        }"#;

        let raw: MovieDetailResponse = serde_json::from_str(json).unwrap();
        let detail: MovieDetail = raw.into();

        assert_eq!(detail.id, 27205);
        assert_eq!(detail.runtime, 148);
        assert_eq!(detail.genre_ids, vec![28, 878]);
        assert_eq!(detail.poster_path.as_deref(), Some("/inception.jpg"));
    }

    #[test]
    fn test_detail_projection_tolerates_missing_fields() {
        let json = r#"{"id": 1, "title": "Unreleased", "genres": []}"#;

        let raw: MovieDetailResponse = serde_json::from_str(json).unwrap();
        let detail: MovieDetail = raw.into();

        assert_eq!(detail.runtime, 0);
        assert_eq!(detail.release_date, "");
        assert_eq!(detail.poster_path, None);
    }

    #[test]
    fn test_discover_movie_to_summary() {
        let movie = DiscoverMovie {
            id: 603,
            title: "The Matrix".to_string(),
            overview: "A computer hacker learns the truth".to_string(),
            genre_ids: vec![28, 878],
        };

        let summary: MovieSummary = movie.into();
        assert_eq!(summary.id, 603);
        assert_eq!(summary.genre_ids, vec![28, 878]);
    }

    #[test]
    fn test_discover_response_defaults_to_empty_results() {
        let response: DiscoverResponse = serde_json::from_str(r#"{"page": 1}"#).unwrap();
        assert!(response.results.is_empty());
    }
}
