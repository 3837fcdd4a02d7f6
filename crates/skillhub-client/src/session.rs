//! Session token storage
//!
//! The client never touches storage directly; it goes through a
//! [`SessionStore`] handed to it at construction.

use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};

use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::error::{ClientError, Result};

/// Key under which the session token is persisted
pub const SESSION_TOKEN_KEY: &str = "token";

/// Single-slot storage for the session token.
///
/// Writes are last-write-wins; reads are plain snapshots.
pub trait SessionStore: Send + Sync {
    /// Current token, if any
    fn get(&self) -> Option<String>;

    /// Replace the stored token
    ///
    /// # Errors
    /// Returns [`ClientError::Session`] if the backing storage cannot be written
    fn set(&self, token: &str) -> Result<()>;

    /// Remove the stored token. Clearing an empty store succeeds.
    ///
    /// # Errors
    /// Returns [`ClientError::Session`] if the backing storage cannot be written
    fn clear(&self) -> Result<()>;
}

/// In-process token slot
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: RwLock<Option<String>>,
}

impl MemorySessionStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding `token`
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set(&self, token: &str) -> Result<()> {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

/// File-based session storage at `~/.skillhub/session.json`.
///
/// The file is a flat JSON object; the token lives under
/// [`SESSION_TOKEN_KEY`] and other keys are preserved on write.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Store at the default location
    ///
    /// # Errors
    /// Returns [`ClientError::Session`] if the home directory is unknown
    pub fn new() -> Result<Self> {
        Self::default_path()
            .map(Self::with_path)
            .ok_or_else(|| ClientError::Session("could not determine home directory".into()))
    }

    /// Create a store at a specific path (useful for testing).
    #[must_use]
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// `~/.skillhub/session.json`
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".skillhub").join("session.json"))
    }

    /// Backing file
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn load_map(&self) -> Option<Map<String, Value>> {
        let path = self.path.display().to_string();
        let data = match std::fs::read_to_string(&self.path) {
            Ok(d) => d,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path, "session file not found");
                return None;
            }
            Err(e) => {
                warn!(path = %path, error = %e, "session file read failed");
                return None;
            }
        };

        match serde_json::from_str(&data) {
            Ok(map) => Some(map),
            Err(e) => {
                warn!(path = %path, error = %e, "session file parse failed");
                None
            }
        }
    }

    fn write_map(&self, map: &Map<String, Value>) -> Result<()> {
        let session_err = |e: &dyn std::fmt::Display| {
            ClientError::Session(format!("{}: {e}", self.path.display()))
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| session_err(&e))?;
        }

        let data = serde_json::to_string_pretty(map)?;
        std::fs::write(&self.path, data).map_err(|e| session_err(&e))?;

        // Set file permissions to 0600 on Unix
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))
                .map_err(|e| session_err(&e))?;
        }

        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Option<String> {
        self.load_map()?
            .get(SESSION_TOKEN_KEY)
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
    }

    fn set(&self, token: &str) -> Result<()> {
        let mut map = self.load_map().unwrap_or_default();
        map.insert(SESSION_TOKEN_KEY.to_string(), Value::String(token.to_string()));
        self.write_map(&map)?;
        info!(path = %self.path.display(), "session token saved");
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let Some(mut map) = self.load_map() else {
            return Ok(());
        };
        if map.remove(SESSION_TOKEN_KEY).is_some() {
            self.write_map(&map)?;
            info!(path = %self.path.display(), "session token removed");
        }
        Ok(())
    }
}
