use axum::{extract::State, http::HeaderMap, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    auth::{password_strength, PersistenceMode, Session},
    error::{AppError, AppResult},
    state::AppState,
};

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: Option<String>,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub remember_me: bool,
}

#[derive(Debug, Deserialize)]
pub struct ResetRequest {
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct PasswordStrengthRequest {
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub token: String,
    pub email: String,
    pub display_name: String,
}

impl From<&Session> for SessionResponse {
    fn from(session: &Session) -> Self {
        Self {
            token: session.token.clone(),
            email: session.email.clone(),
            display_name: session.display_label().to_string(),
        }
    }
}

/// Inline form validation, mirroring what the client checks before
/// submitting.
fn validate_credentials(email: &str, password: &str) -> AppResult<()> {
    if email.is_empty() {
        return Err(AppError::validation(
            "email",
            "Please enter your email address",
        ));
    }
    if !email.contains('@') {
        return Err(AppError::validation("email", "Please enter a valid email"));
    }
    if password.is_empty() {
        return Err(AppError::validation(
            "password",
            "Please enter your password",
        ));
    }
    Ok(())
}

/// Handler for account creation
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> AppResult<Json<SessionResponse>> {
    validate_credentials(&request.email, &request.password)?;
    if request.password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::validation(
            "password",
            "Password should be at least 6 characters",
        ));
    }

    let strength = password_strength(&request.password);
    tracing::debug!(score = strength.score, "Signup password strength");

    let user = state
        .identity
        .sign_up(
            &request.email,
            &request.password,
            request.name.as_deref().filter(|n| !n.is_empty()),
        )
        .await?;

    let session = state.sessions.sign_in(user).await;
    Ok(Json(SessionResponse::from(&session)))
}

/// Handler for credential login. The persistence mode is switched before
/// signing in, matching the remember-me semantics.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<SessionResponse>> {
    validate_credentials(&request.email, &request.password)?;

    state
        .sessions
        .set_persistence_mode(PersistenceMode::from_remember_me(request.remember_me))
        .await;

    let user = state.identity.sign_in(&request.email, &request.password).await?;
    let session = state.sessions.sign_in(user).await;

    tracing::info!(email = %session.email, "User signed in");
    Ok(Json(SessionResponse::from(&session)))
}

/// Handler for password-reset email dispatch
pub async fn reset(
    State(state): State<AppState>,
    Json(request): Json<ResetRequest>,
) -> AppResult<Json<Value>> {
    if request.email.is_empty() {
        return Err(AppError::validation(
            "email",
            "Please enter your email address",
        ));
    }

    state.identity.send_password_reset(&request.email).await?;
    Ok(Json(json!({
        "message": "Password reset email sent. Please check your inbox."
    })))
}

/// Handler for sign-out. Always acknowledges.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Json<Value> {
    if let Some(token) = token_from(&headers) {
        state.sessions.sign_out(token).await;
    }
    Json(json!({ "message": "Signed out" }))
}

/// Handler for the current-session lookup
pub async fn session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<Json<SessionResponse>> {
    let session = match token_from(&headers) {
        Some(token) => state.sessions.session(token).await,
        None => None,
    };

    session
        .as_ref()
        .map(|s| Json(SessionResponse::from(s)))
        .ok_or_else(|| AppError::NotFound("No active session".to_string()))
}

/// Handler for the live password-strength meter
pub async fn strength(Json(request): Json<PasswordStrengthRequest>) -> Json<Value> {
    let strength = password_strength(&request.password);
    Json(json!({
        "score": strength.score,
        "label": strength.label,
        "feedback": strength.feedback(),
    }))
}

fn token_from(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}
