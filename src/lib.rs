pub mod auth;
pub mod cache;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod util;
pub mod view;

pub use routes::create_router;
pub use state::AppState;
