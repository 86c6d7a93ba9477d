use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::config::NetworkProfile;
use crate::error::{AppError, AppResult};

/// Per-call retry behavior, derived from the advisory connection-quality
/// hint. The hint only scales the timeout and backoff, never correctness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub timeout: Duration,
    pub base_delay: Duration,
}

impl RetryPolicy {
    pub fn for_profile(profile: NetworkProfile) -> Self {
        match profile {
            NetworkProfile::Fast => Self {
                max_attempts: 3,
                timeout: Duration::from_secs(5),
                base_delay: Duration::from_millis(1000),
            },
            NetworkProfile::Slow => Self {
                max_attempts: 3,
                timeout: Duration::from_secs(10),
                base_delay: Duration::from_millis(2000),
            },
        }
    }

    /// Linear backoff after the given zero-based attempt, no jitter.
    fn backoff(&self, attempt: u32) -> Duration {
        self.base_delay * (attempt + 1)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::for_profile(NetworkProfile::Fast)
    }
}

/// Fetches a JSON body with automatic retry.
///
/// Each attempt is bounded by the policy timeout; a non-2xx status counts as
/// a failure exactly like a transport error. After the final attempt the last
/// error is propagated. No state is kept between calls.
pub async fn fetch_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
    query: &[(&str, String)],
    policy: &RetryPolicy,
) -> AppResult<T> {
    let mut last_error = AppError::Network("no attempts made".to_string());

    for attempt in 0..policy.max_attempts {
        match attempt_fetch(client, url, query, policy.timeout).await {
            Ok(value) => return Ok(value),
            Err(e) => {
                tracing::debug!(url, attempt, error = %e, "Fetch attempt failed");
                last_error = e;
                if attempt + 1 < policy.max_attempts {
                    tokio::time::sleep(policy.backoff(attempt)).await;
                }
            }
        }
    }

    Err(last_error)
}

async fn attempt_fetch<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
    query: &[(&str, String)],
    timeout: Duration,
) -> AppResult<T> {
    let response = client
        .get(url)
        .query(query)
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(AppError::Network(format!(
            "HTTP status {}",
            response.status()
        )));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| AppError::Network(e.to_string()))
}
