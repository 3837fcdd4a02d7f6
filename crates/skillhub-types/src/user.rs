use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A marketplace account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Sign-in provider (`email`, `github`, ...)
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_provider() -> String {
    "email".to_string()
}

fn default_role() -> String {
    "user".to_string()
}

impl User {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.email)
    }
}

/// Body returned by register and login.
///
/// Only `token` is interpreted. `user` is kept as sent and decoded on demand
/// with [`AuthResponse::parse_user`], so an unfamiliar profile shape never
/// loses the token. Everything else lands in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AuthResponse {
    /// Decode the embedded profile, if any
    ///
    /// # Errors
    /// Fails if `user` does not match [`User`]
    pub fn parse_user(&self) -> Result<Option<User>, serde_json::Error> {
        self.user.clone().map(serde_json::from_value).transpose()
    }
}
