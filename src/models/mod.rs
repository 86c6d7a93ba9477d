pub mod filters;
pub mod moods;
pub mod movie;

pub use filters::{FilterCriteria, Format, ANIMATION_GENRE_ID};
pub use moods::{MoodCategory, SubMood, MOOD_CATEGORIES};
pub use movie::{
    DiscoverMovie, DiscoverResponse, Genre, GenreListResponse, MovieDetail, MovieDetailResponse,
    MovieSummary,
};
