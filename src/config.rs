use serde::Deserialize;

/// Advisory connection-quality hint. Only scales timeouts and backoff in the
/// fetch layer, never correctness.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum NetworkProfile {
    #[default]
    Fast,
    Slow,
}

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// TMDB API key
    pub tmdb_api_key: String,

    /// TMDB API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    /// Base URL for poster images
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,

    /// Identity provider (Firebase Identity Toolkit) API key
    pub identity_api_key: String,

    /// Identity provider base URL
    #[serde(default = "default_identity_api_url")]
    pub identity_api_url: String,

    /// Path of the persisted cache snapshot
    #[serde(default = "default_cache_path")]
    pub cache_path: String,

    /// Path of the durable session store
    #[serde(default = "default_session_path")]
    pub session_path: String,

    /// Connection-quality hint for the fetch layer
    #[serde(default)]
    pub network_profile: NetworkProfile,

    /// Catalog language
    #[serde(default = "default_language")]
    pub language: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_image_base_url() -> String {
    "https://image.tmdb.org/t/p/w500".to_string()
}

fn default_identity_api_url() -> String {
    "https://identitytoolkit.googleapis.com/v1".to_string()
}

fn default_cache_path() -> String {
    "movie-cache.json".to_string()
}

fn default_session_path() -> String {
    "sessions.json".to_string()
}

fn default_language() -> String {
    "en-US".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
