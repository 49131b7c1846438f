//! Server collaborators consumed by the session store.
//!
//! [`AuthApi`] is the seam between the session logic and the transport:
//! the session store only ever sees typed results, so tests drive it with
//! in-process fakes and the application wires in [`HttpAuthApi`].

use async_trait::async_trait;
use opsdesk_models::auth::{LoginRequest, LoginResponse};
use opsdesk_models::users::User;
use reqwest::StatusCode;

use crate::error::ClientError;

/// The two server operations the client core depends on.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchanges credentials for a token and identity.
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ClientError>;

    /// Resolves a persisted token back into the current identity.
    async fn fetch_identity(&self, token: &str) -> Result<User, ClientError>;
}

/// HTTP implementation against the Opsdesk API.
#[derive(Debug, Clone)]
pub struct HttpAuthApi {
    base_url: String,
    http: reqwest::Client,
}

impl HttpAuthApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ClientError> {
        let response = self
            .http
            .post(format!("{}/api/auth/login", self.base_url))
            .json(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        match response.status() {
            status if status.is_success() => response
                .json()
                .await
                .map_err(|e| ClientError::Network(e.to_string())),
            StatusCode::UNAUTHORIZED => Err(ClientError::CredentialsInvalid),
            status => Err(ClientError::UnexpectedStatus(status.as_u16())),
        }
    }

    async fn fetch_identity(&self, token: &str) -> Result<User, ClientError> {
        let response = self
            .http
            .get(format!("{}/api/auth/me", self.base_url))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        match response.status() {
            status if status.is_success() => response
                .json()
                .await
                .map_err(|e| ClientError::Network(e.to_string())),
            StatusCode::UNAUTHORIZED => Err(ClientError::Unauthenticated),
            StatusCode::FORBIDDEN => Err(ClientError::Forbidden),
            status => Err(ClientError::UnexpectedStatus(status.as_u16())),
        }
    }
}
