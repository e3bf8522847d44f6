use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::errors::GatewayError;
use crate::models::LoginOutcome;
use crate::models::UserProfile;
use crate::ports::AuthGateway;

/// Auth gateway speaking the backend's HTTP contract.
pub struct HttpAuthGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAuthGateway {
    /// # Arguments
    /// * `base_url` - Backend origin, e.g. `http://localhost:8080` (no
    ///   trailing slash)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Turn a non-success response into `Rejected`, preserving the backend's
    /// `{ "message": … }` body when it parses.
    async fn rejection(response: reqwest::Response) -> GatewayError {
        let status = response.status();

        let message = response
            .json::<ErrorBody>()
            .await
            .map(|body| body.message)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("Request rejected")
                    .to_string()
            });

        GatewayError::Rejected {
            status: status.as_u16(),
            message,
        }
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, GatewayError> {
        let response = self
            .client
            .post(format!("{}/api/auth/login", self.base_url))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        response
            .json::<LoginOutcome>()
            .await
            .map_err(|e| GatewayError::Transport(format!("Unreadable login response: {}", e)))
    }

    async fn current_user(&self, token: &str) -> Result<UserProfile, GatewayError> {
        let response = self
            .client
            .get(format!("{}/api/auth/me", self.base_url))
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        let body = response
            .json::<MeResponseBody>()
            .await
            .map_err(|e| GatewayError::Transport(format!("Unreadable profile response: {}", e)))?;

        Ok(body.user)
    }
}

#[derive(Debug, Deserialize)]
struct MeResponseBody {
    user: UserProfile,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}
