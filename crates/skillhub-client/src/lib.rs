//! `SkillHub` API Client Library
//!
//! Typed client for the `SkillHub` marketplace backend.
//!
//! ## Features
//!
//! - Skills listing with pagination and filters, detail lookup, download links
//! - Email/password auth with the session token kept in an injected [`SessionStore`]
//! - Favorites management
//! - Explicit middleware hooks: bearer-token injection before each request and
//!   session expiry handling (clear token, send the user to the login route)
//!   after each `401`
//!
//! ```no_run
//! use std::sync::Arc;
//! use skillhub_client::prelude::*;
//!
//! # async fn demo() -> skillhub_client::Result<()> {
//! let client = SkillHubClient::new(
//!     &ClientConfig::from_env(),
//!     Arc::new(MemorySessionStore::new()),
//!     Arc::new(LogNavigator),
//! )?;
//! client.auth().login("a@b.com", "secret").await?;
//! let page = client.skills().list(&SkillQuery::new().with_limit(10)).await?;
//! println!("{} skills", page.total);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code, dead_code, unused_imports, unused_variables, missing_docs)]

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod favorites;
pub mod hooks;
pub mod navigator;
pub mod session;
pub mod skills;

pub use auth::AuthApi;
pub use client::SkillHubClient;
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use favorites::FavoritesApi;
pub use hooks::{BearerAuth, RequestHook, ResponseHook, SessionExpiry};
pub use navigator::{LogNavigator, Navigator, LOGIN_ROUTE};
pub use session::{FileSessionStore, MemorySessionStore, SessionStore, SESSION_TOKEN_KEY};
pub use skills::SkillsApi;

pub use skillhub_types as types;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        ClientConfig, ClientError, FileSessionStore, LogNavigator, MemorySessionStore, Navigator,
        SessionStore, SkillHubClient,
    };
    pub use skillhub_types::{
        AuthResponse, DownloadLink, Favorite, PaginatedResponse, Skill, SkillQuery, User,
    };
}
