//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use std::collections::HashSet;

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::entities::{Post, PostId, PostMedia, Profile, UserId};

/// A fresh viewer id; call twice for two distinct users
pub fn test_viewer() -> UserId {
    UserId::new()
}

/// A fixed instant inside one test hour, keyed by minute
pub fn test_time(minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 10, minute, 0).unwrap()
}

/// Create a test post with default values
pub fn test_post() -> Post {
    Post {
        id: PostId::new(),
        author_id: UserId::new(),
        caption: "test post".to_string(),
        media: PostMedia::None,
        created_at: Utc::now(),
        liked_by: HashSet::new(),
        author: None,
    }
}

/// Create a test post with a specific timestamp
pub fn test_post_at(created_at: DateTime<Utc>) -> Post {
    Post {
        created_at,
        ..test_post()
    }
}

/// Create a test post by a specific author
pub fn test_post_by(author: UserId) -> Post {
    Post {
        author_id: author,
        ..test_post()
    }
}

/// Create a test profile for a specific user
pub fn test_profile(id: UserId) -> Profile {
    Profile {
        id,
        name: "Test User".to_string(),
        avatar_url: None,
    }
}
