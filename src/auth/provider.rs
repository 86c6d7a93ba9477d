use reqwest::Client as HttpClient;
use serde::Deserialize;
use serde_json::json;

use crate::auth::AuthError;

/// Account data handed back by the identity provider on a successful
/// sign-in or sign-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
}

/// Opaque identity service: account creation, credential sign-in and
/// password-reset email dispatch. Session lifecycle and persistence stay on
/// our side of the boundary. Tests implement this directly with canned
/// providers.
#[async_trait::async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: Option<&str>,
    ) -> Result<AuthenticatedUser, AuthError>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthenticatedUser, AuthError>;

    async fn send_password_reset(&self, email: &str) -> Result<(), AuthError>;
}

/// Firebase Identity Toolkit REST backend.
pub struct FirebaseIdentityProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountResponse {
    local_id: String,
    email: String,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    id_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

impl FirebaseIdentityProvider {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
        }
    }

    /// Posts to an Identity Toolkit endpoint, mapping transport failures and
    /// provider error codes into `AuthError`.
    async fn post(
        &self,
        endpoint: &str,
        body: serde_json::Value,
    ) -> Result<AccountResponse, AuthError> {
        let url = format!("{}/accounts:{}", self.api_url, endpoint);

        let response = self
            .http_client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|_| AuthError::network())?;

        if !response.status().is_success() {
            let code = response
                .json::<ErrorBody>()
                .await
                .map(|b| b.error.message)
                .unwrap_or_else(|_| "UNKNOWN".to_string());
            return Err(AuthError::from_code(&code));
        }

        response.json().await.map_err(|_| AuthError::network())
    }
}

#[async_trait::async_trait]
impl IdentityProvider for FirebaseIdentityProvider {
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: Option<&str>,
    ) -> Result<AuthenticatedUser, AuthError> {
        let account = self
            .post(
                "signUp",
                json!({
                    "email": email,
                    "password": password,
                    "returnSecureToken": true,
                }),
            )
            .await?;

        // Profile update runs as a second call; the account exists either way
        let display_name = match (display_name, account.id_token) {
            (Some(name), Some(id_token)) => {
                self.post(
                    "update",
                    json!({
                        "idToken": id_token,
                        "displayName": name,
                        "returnSecureToken": false,
                    }),
                )
                .await?;
                Some(name.to_string())
            }
            (name, _) => name.map(str::to_string),
        };

        tracing::info!(email, "Account created");

        Ok(AuthenticatedUser {
            uid: account.local_id,
            email: account.email,
            display_name,
        })
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthenticatedUser, AuthError> {
        let account = self
            .post(
                "signInWithPassword",
                json!({
                    "email": email,
                    "password": password,
                    "returnSecureToken": true,
                }),
            )
            .await?;

        Ok(AuthenticatedUser {
            uid: account.local_id,
            email: account.email,
            display_name: account.display_name,
        })
    }

    async fn send_password_reset(&self, email: &str) -> Result<(), AuthError> {
        self.post(
            "sendOobCode",
            json!({
                "requestType": "PASSWORD_RESET",
                "email": email,
            }),
        )
        .await?;

        tracing::info!(email, "Password reset email requested");
        Ok(())
    }
}
