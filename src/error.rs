use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::auth::AuthError;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Timeout, transport failure and non-2xx status are deliberately
    /// undifferentiated: all of them mean "the catalog could not be reached".
    #[error("Network error: {0}")]
    Network(String),

    #[error("{0}")]
    Auth(#[from] AuthError),

    #[error("{message}")]
    Validation { field: String, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Validation error tied to a single form field.
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            AppError::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                json!({ "error": message, "field": field }),
            ),
            AppError::Auth(err) => (
                StatusCode::UNAUTHORIZED,
                json!({ "error": err.user_message(), "code": err.code() }),
            ),
            AppError::Network(_) => (StatusCode::BAD_GATEWAY, json!({ "error": self.to_string() })),
            AppError::Cache(_) | AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": self.to_string() }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
