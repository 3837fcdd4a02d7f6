//! Configuration types for the API client

use serde::Deserialize;
use url::Url;

use crate::error::{ClientError, Result};

/// Base URL used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Environment variable selecting the backend base URL
pub const BASE_URL_ENV: &str = "SKILLHUB_API_URL";

/// API client configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend root, e.g. `https://api.skillhub.dev`
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ClientConfig {
    /// Configuration pointing at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Read the base URL from `SKILLHUB_API_URL`, falling back to the local
    /// development address when unset or empty.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(BASE_URL_ENV).ok())
    }

    fn from_env_value(value: Option<String>) -> Self {
        value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map_or_else(Self::default, Self::new)
    }

    /// Parse and validate the base URL
    ///
    /// # Errors
    /// Returns [`ClientError::Config`] if the URL is malformed or not HTTP(S)
    pub fn parse_base_url(&self) -> Result<Url> {
        let url = Url::parse(self.base_url.trim()).map_err(|e| {
            ClientError::Config(format!("invalid base URL '{}': {e}", self.base_url))
        })?;

        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(ClientError::Config(format!(
                "base URL '{}' must be an http(s) URL",
                self.base_url
            )));
        }

        Ok(url)
    }
}
