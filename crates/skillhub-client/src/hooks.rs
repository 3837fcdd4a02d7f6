//! Request/response middleware
//!
//! Request hooks run on every built request right before it is sent; response
//! hooks run on every received response before its status is classified.
//! Neither runs when the transport fails before a response exists.

use std::sync::Arc;

use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::{Request, StatusCode};
use tracing::{debug, info, warn};
use url::Url;

use crate::navigator::{Navigator, LOGIN_ROUTE};
use crate::session::SessionStore;

/// Runs on each outgoing request
pub trait RequestHook: Send + Sync {
    /// Inspect or modify the request before it is sent
    fn on_request(&self, request: &mut Request);
}

/// Runs on each received response, whatever its status
pub trait ResponseHook: Send + Sync {
    /// Observe the response status
    fn on_response(&self, status: StatusCode, url: &Url);
}

/// Attaches `Authorization: Bearer <token>` while a session token is stored.
pub struct BearerAuth {
    store: Arc<dyn SessionStore>,
}

impl BearerAuth {
    /// Read tokens from `store`
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }
}

impl RequestHook for BearerAuth {
    fn on_request(&self, request: &mut Request) {
        let Some(token) = self.store.get() else {
            return;
        };

        match HeaderValue::from_str(&format!("Bearer {token}")) {
            Ok(mut value) => {
                value.set_sensitive(true);
                debug!(
                    token_preview = %format!("{}...", token.chars().take(6).collect::<String>()),
                    url = %request.url(),
                    "Setting bearer auth"
                );
                request.headers_mut().insert(AUTHORIZATION, value);
            }
            Err(e) => {
                warn!(error = %e, "stored session token is not a valid header value, sending request without it");
            }
        }
    }
}

/// On `401`, drops the stored token and sends the user to the login view.
pub struct SessionExpiry {
    store: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl SessionExpiry {
    /// Clear `store` and drive `navigator` on auth failures
    pub fn new(store: Arc<dyn SessionStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self { store, navigator }
    }
}

impl ResponseHook for SessionExpiry {
    fn on_response(&self, status: StatusCode, url: &Url) {
        if status != StatusCode::UNAUTHORIZED {
            return;
        }

        info!(url = %url, "401 received, clearing session");
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "failed to clear session token");
        }
        self.navigator.navigate(LOGIN_ROUTE);
    }
}
