//! Post domain entities
//!
//! A post is identified by its id; within a feed list the only field that
//! changes outside a full reload is the viewer's membership in `liked_by`.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserId;

/// Unique identifier for a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostId(pub Uuid);

impl PostId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PostId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for PostId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Media attached to a post: none, one image, or one video - never both
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostMedia {
    #[default]
    None,
    Image(String),
    Video(String),
}

impl PostMedia {
    /// Build from the backend's separate url columns; when both are somehow
    /// populated the image wins, matching render precedence
    pub fn from_columns(image_url: Option<String>, video_url: Option<String>) -> Self {
        match (image_url, video_url) {
            (Some(url), _) => PostMedia::Image(url),
            (None, Some(url)) => PostMedia::Video(url),
            (None, None) => PostMedia::None,
        }
    }

    pub fn image_url(&self) -> Option<&str> {
        match self {
            PostMedia::Image(url) => Some(url),
            _ => None,
        }
    }

    pub fn video_url(&self) -> Option<&str> {
        match self {
            PostMedia::Video(url) => Some(url),
            _ => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, PostMedia::None)
    }
}

/// Kind of raw media picked for a draft post
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn extension(&self) -> &'static str {
        match self {
            MediaKind::Image => ".jpg",
            MediaKind::Video => ".mp4",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            MediaKind::Image => "image/jpeg",
            MediaKind::Video => "video/mp4",
        }
    }
}

/// Denormalized author info carried on a joined post row
///
/// A snapshot for rendering; may be stale relative to the author's current
/// profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorDisplay {
    pub name: String,
    pub avatar_url: Option<String>,
}

/// A post as displayed in a feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub author_id: UserId,
    /// User-supplied caption, possibly empty
    pub caption: String,
    pub media: PostMedia,
    /// Sole sort key for feed ordering
    pub created_at: DateTime<Utc>,
    /// Accounts currently liking this post (set semantics, order irrelevant)
    pub liked_by: HashSet<UserId>,
    pub author: Option<AuthorDisplay>,
}

impl Post {
    pub fn like_count(&self) -> usize {
        self.liked_by.len()
    }

    pub fn is_liked_by(&self, viewer: UserId) -> bool {
        self.liked_by.contains(&viewer)
    }
}

/// Data needed to create a new post
#[derive(Debug, Clone)]
pub struct NewPost {
    pub caption: String,
    pub media: PostMedia,
}
