//! Feed scope
//!
//! The filter defining which posts a feed list contains: everything, or one
//! author's posts (the profile screen).

use super::{Post, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedScope {
    /// Every post on the platform, newest first
    Global,
    /// Only posts by one author
    Author(UserId),
}

impl FeedScope {
    pub fn author(&self) -> Option<UserId> {
        match self {
            FeedScope::Global => None,
            FeedScope::Author(author) => Some(*author),
        }
    }

    /// Whether a post belongs in a feed with this scope
    pub fn includes(&self, post: &Post) -> bool {
        match self {
            FeedScope::Global => true,
            FeedScope::Author(author) => post.author_id == *author,
        }
    }
}

impl std::fmt::Display for FeedScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedScope::Global => write!(f, "global"),
            FeedScope::Author(author) => write!(f, "author:{author}"),
        }
    }
}
