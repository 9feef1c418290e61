//! Auth session entity

use super::UserId;

/// An authenticated session against the managed backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: UserId,
    pub email: String,
    pub access_token: String,
    pub refresh_token: Option<String>,
}
