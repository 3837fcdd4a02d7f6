//! Error types for `SkillHub` API operations

use reqwest::StatusCode;
use thiserror::Error;

/// API client errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// Backend rejected the session (HTTP 401). The stored token has already
    /// been cleared when this is returned.
    #[error("Unauthorized request to {url}")]
    Unauthorized {
        /// Request URL
        url: String,
    },

    /// Resource does not exist (HTTP 404)
    #[error("Not found: {url}")]
    NotFound {
        /// Request URL
        url: String,
    },

    /// Any other non-success status
    #[error("HTTP {status} from {url}: {body}")]
    Status {
        /// Response status
        status: StatusCode,
        /// Request URL
        url: String,
        /// Response body, possibly empty
        body: String,
    },

    /// Transport-level error (connection, I/O, TLS)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body did not match the expected shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Session store could not be read or written
    #[error("Session store error: {0}")]
    Session(String),
}

impl ClientError {
    /// Map a non-success response to the matching variant
    #[must_use]
    pub fn from_status(status: StatusCode, url: &str, body: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => Self::Unauthorized {
                url: url.to_string(),
            },
            StatusCode::NOT_FOUND => Self::NotFound {
                url: url.to_string(),
            },
            _ => Self::Status {
                status,
                url: url.to_string(),
                body,
            },
        }
    }

    /// HTTP status behind this error, if the backend answered at all
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Unauthorized { .. } => Some(StatusCode::UNAUTHORIZED),
            Self::NotFound { .. } => Some(StatusCode::NOT_FOUND),
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status(),
            Self::Json(_) | Self::Config(_) | Self::Session(_) => None,
        }
    }

    /// Whether the caller should render a "not found" view
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether the session was rejected
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, ClientError>;
