//! Auth operations
//!
//! Register and login persist the returned token as a side effect; logout is
//! local only.

use reqwest::Method;
use serde::Serialize;
use skillhub_types::{AuthResponse, User};
use tracing::{debug, info};

use crate::client::SkillHubClient;
use crate::error::Result;

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

/// `/api/auth` endpoints
pub struct AuthApi<'a> {
    client: &'a SkillHubClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(client: &'a SkillHubClient) -> Self {
        Self { client }
    }

    /// Create an account. A returned token is stored before this returns.
    ///
    /// # Errors
    /// Fails on transport errors, non-2xx responses, an unexpected body, or
    /// if the token cannot be stored
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: Option<&str>,
    ) -> Result<AuthResponse> {
        self.exchange(
            "register",
            &Credentials {
                email,
                password,
                name,
            },
        )
        .await
    }

    /// Sign in. A returned token is stored before this returns.
    ///
    /// # Errors
    /// Fails on transport errors, non-2xx responses, an unexpected body, or
    /// if the token cannot be stored
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        self.exchange(
            "login",
            &Credentials {
                email,
                password,
                name: None,
            },
        )
        .await
    }

    /// Profile of the signed-in user
    ///
    /// # Errors
    /// Returns [`crate::ClientError::Unauthorized`] without a valid session
    pub async fn me(&self) -> Result<User> {
        let url = self.client.endpoint(&["api", "auth", "me"])?;
        self.client
            .send_json(self.client.request(Method::GET, url))
            .await
    }

    /// Forget the session token. No request is made.
    ///
    /// # Errors
    /// Fails only if the session store cannot be written
    pub fn logout(&self) -> Result<()> {
        self.client.session_store().clear()?;
        info!("logged out");
        Ok(())
    }

    /// Whether a session token is currently stored
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.client.session_store().get().is_some()
    }

    async fn exchange(&self, action: &str, credentials: &Credentials<'_>) -> Result<AuthResponse> {
        let url = self.client.endpoint(&["api", "auth", action])?;
        let response: AuthResponse = self
            .client
            .send_json(self.client.request(Method::POST, url).json(credentials))
            .await?;

        match response.token.as_deref().filter(|t| !t.is_empty()) {
            Some(token) => {
                self.client.session_store().set(token)?;
                info!(action, email = credentials.email, "session token stored");
            }
            None => debug!(action, "auth response carried no token"),
        }

        Ok(response)
    }
}
