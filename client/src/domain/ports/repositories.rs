//! Repository port traits
//!
//! These traits define the interface to the managed backend's data surface.
//! Implementations are provided by adapters (e.g., the REST client).

use async_trait::async_trait;

use crate::domain::entities::{FeedScope, NewPost, NewProfile, Post, PostId, Profile, UserId};
use crate::error::DomainError;

/// Repository for Post entities
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Fetch every post in a scope, joined with its current like
    /// memberships and the author's display info
    async fn query(&self, scope: FeedScope) -> Result<Vec<Post>, DomainError>;

    /// Create a new post
    async fn create(&self, author: UserId, post: &NewPost) -> Result<Post, DomainError>;

    /// Add or remove a single like row
    ///
    /// Fire-and-forget from the feed's perspective: the caller has already
    /// applied the change locally and will not roll it back on failure.
    async fn set_liked(&self, post: PostId, viewer: UserId, liked: bool)
        -> Result<(), DomainError>;
}

/// Repository for Profile entities
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Fetch a profile by user id
    async fn get(&self, id: UserId) -> Result<Option<Profile>, DomainError>;

    /// Create or update a profile
    async fn upsert(&self, profile: &NewProfile) -> Result<(), DomainError>;
}
