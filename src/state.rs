use std::sync::Arc;

use crate::{auth::IdentityProvider, auth::SessionManager, services::Recommender};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<Recommender>,
    pub identity: Arc<dyn IdentityProvider>,
    pub sessions: Arc<SessionManager>,
    pub image_base_url: String,
}

impl AppState {
    pub fn new(
        recommender: Arc<Recommender>,
        identity: Arc<dyn IdentityProvider>,
        sessions: Arc<SessionManager>,
        image_base_url: String,
    ) -> Self {
        Self {
            recommender,
            identity,
            sessions,
            image_base_url,
        }
    }
}
