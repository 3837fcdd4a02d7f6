//! HTTP client bound to a `SkillHub` backend
//!
//! Provides [`SkillHubClient`], which owns the `reqwest::Client`, the session
//! store and the middleware hooks, and hands out the typed operation groups.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use url::Url;

use crate::auth::AuthApi;
use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::favorites::FavoritesApi;
use crate::hooks::{BearerAuth, RequestHook, ResponseHook, SessionExpiry};
use crate::navigator::Navigator;
use crate::session::SessionStore;
use crate::skills::SkillsApi;

const JSON_MIME_TYPE: &str = "application/json";

/// Typed client for the `SkillHub` API.
///
/// Every request passes through the request hooks (bearer auth first), and
/// every response through the response hooks (session expiry first) before
/// its status is checked.
pub struct SkillHubClient {
    http: reqwest::Client,
    base_url: Url,
    store: Arc<dyn SessionStore>,
    request_hooks: Vec<Arc<dyn RequestHook>>,
    response_hooks: Vec<Arc<dyn ResponseHook>>,
}

impl SkillHubClient {
    /// Create a client with the default hooks installed
    ///
    /// # Errors
    /// Returns [`ClientError::Config`] if the base URL is invalid or the HTTP
    /// client cannot be built
    pub fn new(
        config: &ClientConfig,
        store: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        let base_url = config.parse_base_url()?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_MIME_TYPE));
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!("skillhub/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build HTTP client: {e}")))?;

        let bearer: Arc<dyn RequestHook> = Arc::new(BearerAuth::new(Arc::clone(&store)));
        let expiry: Arc<dyn ResponseHook> =
            Arc::new(SessionExpiry::new(Arc::clone(&store), navigator));

        info!(base_url = %base_url, "SkillHub client initialized");

        Ok(Self {
            http,
            base_url,
            store,
            request_hooks: vec![bearer],
            response_hooks: vec![expiry],
        })
    }

    /// Create a client whose base URL comes from `SKILLHUB_API_URL`
    ///
    /// # Errors
    /// See [`SkillHubClient::new`]
    pub fn from_env(store: Arc<dyn SessionStore>, navigator: Arc<dyn Navigator>) -> Result<Self> {
        Self::new(&ClientConfig::from_env(), store, navigator)
    }

    /// Append a request hook; it runs after the built-in ones
    #[must_use]
    pub fn with_request_hook(mut self, hook: Arc<dyn RequestHook>) -> Self {
        self.request_hooks.push(hook);
        self
    }

    /// Append a response hook; it runs after the built-in ones
    #[must_use]
    pub fn with_response_hook(mut self, hook: Arc<dyn ResponseHook>) -> Self {
        self.response_hooks.push(hook);
        self
    }

    /// Backend root
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Session store shared with the hooks
    #[must_use]
    pub fn session_store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    /// Skills operations
    #[must_use]
    pub fn skills(&self) -> SkillsApi<'_> {
        SkillsApi::new(self)
    }

    /// Auth operations
    #[must_use]
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    /// Favorites operations
    #[must_use]
    pub fn favorites(&self) -> FavoritesApi<'_> {
        FavoritesApi::new(self)
    }

    /// Build an absolute URL from path segments. Each segment is
    /// percent-encoded, so ids cannot alter the path structure.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::Config(format!("base URL '{}' cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub(crate) fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http.request(method, url)
    }

    /// Run the hooks around a request and fail on non-success statuses
    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let mut request = builder.build()?;
        for hook in &self.request_hooks {
            hook.on_request(&mut request);
        }

        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, url = %url, "sending request");

        let response = self.http.execute(request).await?;
        let status = response.status();
        debug!(%method, url = %url, %status, "response received");

        for hook in &self.response_hooks {
            hook.on_response(status, &url);
        }

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        debug!(
            %status,
            body_preview = %body.chars().take(200).collect::<String>(),
            "request failed"
        );
        Err(ClientError::from_status(status, url.as_str(), body))
    }

    /// Send and decode a JSON body
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = self.send(builder).await?;
        // text() + from_str() keeps decoding failures distinct from transport ones
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
