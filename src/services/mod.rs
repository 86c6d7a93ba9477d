pub mod content_filter;
pub mod http;
pub mod picker;
pub mod providers;

pub use picker::Recommender;
