/// Authentication failure with the provider's error code attached.
///
/// Codes are mapped to a fixed table of user-facing messages; anything the
/// table does not know falls back to a generic message rather than leaking
/// the raw code to the user.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", self.user_message())]
pub struct AuthError {
    code: String,
}

impl AuthError {
    /// Wraps a provider error code. Some providers suffix codes with
    /// explanatory text ("WEAK_PASSWORD : Password should be..."); only the
    /// leading token is kept.
    pub fn from_code(code: &str) -> Self {
        let code = code
            .split([' ', ':'])
            .next()
            .unwrap_or_default()
            .to_string();
        Self { code }
    }

    /// Transport-level failure talking to the identity provider.
    pub fn network() -> Self {
        Self {
            code: "NETWORK_REQUEST_FAILED".to_string(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn user_message(&self) -> &'static str {
        match self.code.as_str() {
            "INVALID_EMAIL" => "Please enter a valid email address",
            "USER_DISABLED" => "This account has been disabled. Please contact support",
            "EMAIL_NOT_FOUND" => "No account exists with this email. Please sign up first",
            "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => {
                "Incorrect password. Please try again"
            }
            "EMAIL_EXISTS" => "This email is already registered. Please login instead",
            "WEAK_PASSWORD" => "Password must be at least 6 characters long",
            "NETWORK_REQUEST_FAILED" => "Network error. Please check your internet connection",
            "TOO_MANY_ATTEMPTS_TRY_LATER" => "Too many failed attempts. Please try again later",
            "OPERATION_NOT_ALLOWED" => {
                "Email/password login is not enabled. Please contact support"
            }
            "UNKNOWN" => "An unexpected error occurred. Please try again",
            _ => "Authentication error. Please try again",
        }
    }
}
