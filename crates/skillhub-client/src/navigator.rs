//! Where to send the user when their session is rejected

use tracing::warn;

/// Route of the sign-in view
pub const LOGIN_ROUTE: &str = "/login";

/// Moves the embedding frontend to another view.
pub trait Navigator: Send + Sync {
    /// Switch to `route`
    fn navigate(&self, route: &str);
}

/// Navigator for headless frontends: tells the user to sign in again.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, route: &str) {
        warn!(route, "session expired or invalid, sign in again");
    }
}
