use axum::{
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::middleware::{make_span_with_request_id, request_id_middleware, require_session};
use crate::state::AppState;

pub mod auth;
pub mod genres;
pub mod moods;
pub mod recommend;

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes(state.clone()))
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

/// API routes under /api/v1. The recommendation surface requires a session;
/// the auth surface does not.
fn api_routes(state: AppState) -> Router<AppState> {
    let guarded = Router::new()
        .route("/moods", get(moods::list))
        .route("/genres", get(genres::list))
        .route("/recommend", get(recommend::recommend))
        .route_layer(middleware::from_fn_with_state(state, require_session));

    let auth_routes = Router::new()
        .route("/auth/signup", post(auth::signup))
        .route("/auth/login", post(auth::login))
        .route("/auth/reset", post(auth::reset))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/session", get(auth::session))
        .route("/auth/password-strength", post(auth::strength));

    guarded.merge(auth_routes)
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
