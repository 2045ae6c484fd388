//! Post-service side of the existence check.
//!
//! A post may only be written or listed for a user the user-service knows
//! about. [`UserDirectory`] answers that question with three distinct
//! outcomes: `Ok(true)`, `Ok(false)`, or `Err(VerifyError)` when the answer
//! could not be obtained. Callers must never read an error as "no such user".

use crate::dto::ExistenceResponse;
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_USER_SERVICE_URL: &str = "http://localhost:8080";
pub const DEFAULT_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    #[error("invalid user-service base url {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("user-service request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("user-service answered with status {0}")]
    Status(StatusCode),
    #[error("cannot decode user-service answer: {0}")]
    Decode(#[source] reqwest::Error),
}

#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Whether a user with this id currently exists.
    async fn user_exists(&self, user_id: &str) -> Result<bool, VerifyError>;
}

/// [`UserDirectory`] backed by `GET {base}/users/exists/{id}`.
#[derive(Clone)]
pub struct HttpUserDirectory {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpUserDirectory {
    /// `timeout` bounds the whole exchange, body included.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, VerifyError> {
        let invalid = |reason: String| VerifyError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };

        let parsed = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if parsed.cannot_be_a_base() {
            return Err(invalid("url cannot carry a path".into()));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(VerifyError::Transport)?;

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn existence_url(&self, user_id: &str) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected in new()
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["users", "exists", user_id]);
        }
        url
    }
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn user_exists(&self, user_id: &str) -> Result<bool, VerifyError> {
        let url = self.existence_url(user_id);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(VerifyError::Transport)?;

        match response.status() {
            status if status.is_success() => {
                let body: ExistenceResponse = response.json().await.map_err(|e| {
                    if e.is_timeout() {
                        VerifyError::Transport(e)
                    } else {
                        VerifyError::Decode(e)
                    }
                })?;
                debug!(user_id, exists = body.exists, "user-service answered");
                Ok(body.exists)
            }
            // The user-service rejects ids that are not ObjectIds; no user can have one.
            StatusCode::BAD_REQUEST => Ok(false),
            status => Err(VerifyError::Status(status)),
        }
    }
}
