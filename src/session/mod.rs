//! Anonymous sessions that scope which transactions a client can see.
//!
//! A session is nothing more than a random ID held by the client in the
//! `sessionId` cookie. There is no session table: the ID is stored on each
//! transaction row and every query filters on it.

mod cookie;
mod middleware;

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use cookie::{SESSION_COOKIE, SESSION_COOKIE_MAX_AGE, get_session_id, set_session_cookie};
pub use middleware::session_guard;

/// The ID of a client's session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Create a new, random session ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a session ID from its string form.
    ///
    /// Returns `None` if `value` is not a UUID.
    pub fn parse(value: &str) -> Option<Self> {
        Uuid::parse_str(value).ok().map(Self)
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for SessionId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
