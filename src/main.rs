use std::sync::Arc;

use moodpick_api::{
    auth::{FirebaseIdentityProvider, SessionManager},
    cache::SnapshotCache,
    config::Config,
    create_router,
    services::{
        http::RetryPolicy,
        providers::TmdbProvider,
        Recommender,
    },
    AppState,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("moodpick_api=debug,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let cache = Arc::new(SnapshotCache::open(&config.cache_path).await);
    let policy = RetryPolicy::for_profile(config.network_profile);
    let provider = Arc::new(TmdbProvider::new(
        Arc::clone(&cache),
        policy,
        config.tmdb_api_key.clone(),
        config.tmdb_api_url.clone(),
        config.language.clone(),
    ));
    let recommender = Arc::new(Recommender::new(provider));

    let identity = Arc::new(FirebaseIdentityProvider::new(
        config.identity_api_key.clone(),
        config.identity_api_url.clone(),
    ));
    let sessions = Arc::new(SessionManager::open(&config.session_path).await);

    let state = AppState::new(recommender, identity, sessions, config.image_base_url.clone());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!(host = %config.host, port = config.port, "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
