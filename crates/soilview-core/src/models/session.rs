use serde::{Deserialize, Serialize};

/// Authentication flag for one client instance.
///
/// Starts unauthenticated unless the caller injects an authenticated session.
/// Nothing is persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub authenticated: bool,
}

impl Session {
    /// A fresh, unauthenticated session
    pub fn new() -> Self {
        Self::default()
    }

    /// A session that has already logged in
    pub fn authenticated() -> Self {
        Self { authenticated: true }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}
