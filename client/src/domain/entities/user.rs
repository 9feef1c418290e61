//! User domain entities

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user's public profile
///
/// Rendered next to posts and on the profile screen. The `profiles` row is
/// created at sign-up and may be updated independently of any posts that
/// carry a snapshot of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: UserId,
    pub name: String,
    pub avatar_url: Option<String>,
}

/// Data needed to create or update a profile
#[derive(Debug, Clone)]
pub struct NewProfile {
    pub id: UserId,
    pub name: String,
    pub avatar_url: Option<String>,
}
