//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::mpsc;

use crate::domain::entities::{
    FeedScope, NewPost, NewProfile, Post, PostId, Profile, Session, UserId,
};
use crate::domain::ports::{
    AuthGateway, FeedSubscription, MediaStore, PostRepository, ProfileRepository, RealtimeGateway,
};
use crate::error::DomainError;

// ============================================================================
// In-Memory Post Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: Arc<RwLock<Vec<Post>>>,
    fail_queries: Arc<AtomicBool>,
    fail_likes: Arc<AtomicBool>,
    like_calls: Arc<RwLock<Vec<(PostId, UserId, bool)>>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a post for testing
    pub fn with_post(self, post: Post) -> Self {
        self.posts.write().unwrap().push(post);
        self
    }

    /// Make every like mutation fail with a backend error
    pub fn fail_like_mutations(self) -> Self {
        self.fail_likes.store(true, Ordering::SeqCst);
        self
    }

    /// Toggle query failures at runtime
    pub fn set_fail_queries(&self, fail: bool) {
        self.fail_queries.store(fail, Ordering::SeqCst);
    }

    /// Every `set_liked` call that reached the store, in arrival order
    pub fn like_calls(&self) -> Vec<(PostId, UserId, bool)> {
        self.like_calls.read().unwrap().clone()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn query(&self, scope: FeedScope) -> Result<Vec<Post>, DomainError> {
        if self.fail_queries.load(Ordering::SeqCst) {
            return Err(DomainError::Internal("simulated query failure".to_string()));
        }

        let posts = self.posts.read().unwrap();
        let mut matching: Vec<Post> = posts
            .iter()
            .filter(|p| scope.includes(p))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matching)
    }

    async fn create(&self, author: UserId, post: &NewPost) -> Result<Post, DomainError> {
        let post = Post {
            id: PostId::new(),
            author_id: author,
            caption: post.caption.clone(),
            media: post.media.clone(),
            created_at: Utc::now(),
            liked_by: Default::default(),
            author: None,
        };
        self.posts.write().unwrap().push(post.clone());
        Ok(post)
    }

    async fn set_liked(
        &self,
        post: PostId,
        viewer: UserId,
        liked: bool,
    ) -> Result<(), DomainError> {
        if self.fail_likes.load(Ordering::SeqCst) {
            return Err(DomainError::Internal("simulated like failure".to_string()));
        }

        self.like_calls.write().unwrap().push((post, viewer, liked));

        let mut posts = self.posts.write().unwrap();
        for stored in posts.iter_mut().filter(|p| p.id == post) {
            if liked {
                stored.liked_by.insert(viewer);
            } else {
                stored.liked_by.remove(&viewer);
            }
        }
        Ok(())
    }
}

// ============================================================================
// In-Memory Profile Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryProfileRepository {
    profiles: Arc<RwLock<HashMap<UserId, Profile>>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a profile for testing
    pub fn with_profile(self, profile: Profile) -> Self {
        self.profiles.write().unwrap().insert(profile.id, profile);
        self
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn get(&self, id: UserId) -> Result<Option<Profile>, DomainError> {
        Ok(self.profiles.read().unwrap().get(&id).cloned())
    }

    async fn upsert(&self, profile: &NewProfile) -> Result<(), DomainError> {
        self.profiles.write().unwrap().insert(
            profile.id,
            Profile {
                id: profile.id,
                name: profile.name.clone(),
                avatar_url: profile.avatar_url.clone(),
            },
        );
        Ok(())
    }
}

// ============================================================================
// Mock Auth Gateway
// ============================================================================

/// Auth gateway that accepts any credentials for one fixed user
pub struct MockAuthGateway {
    user_id: UserId,
    fail_sign_out: bool,
}

impl MockAuthGateway {
    pub fn new() -> Self {
        Self {
            user_id: UserId::new(),
            fail_sign_out: false,
        }
    }

    /// Make the backend sign-out request fail
    pub fn failing_sign_out(mut self) -> Self {
        self.fail_sign_out = true;
        self
    }

    fn session(&self, email: &str) -> Session {
        Session {
            user_id: self.user_id,
            email: email.to_string(),
            access_token: "test-access-token".to_string(),
            refresh_token: None,
        }
    }
}

impl Default for MockAuthGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthGateway for MockAuthGateway {
    async fn sign_up(&self, email: &str, _password: &str) -> Result<Session, DomainError> {
        Ok(self.session(email))
    }

    async fn sign_in(&self, email: &str, _password: &str) -> Result<Session, DomainError> {
        Ok(self.session(email))
    }

    async fn sign_out(&self) -> Result<(), DomainError> {
        if self.fail_sign_out {
            return Err(DomainError::Internal(
                "simulated sign-out failure".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// In-Memory Media Store
// ============================================================================

#[derive(Default)]
pub struct InMemoryMediaStore {
    uploads: Arc<RwLock<Vec<(String, usize, String)>>>,
}

impl InMemoryMediaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every upload so far as `(path, byte length, content type)`
    pub fn uploads(&self) -> Vec<(String, usize, String)> {
        self.uploads.read().unwrap().clone()
    }
}

#[async_trait]
impl MediaStore for InMemoryMediaStore {
    async fn upload(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, DomainError> {
        self.uploads
            .write()
            .unwrap()
            .push((path.to_string(), bytes.len(), content_type.to_string()));
        Ok(format!("https://storage.test/{path}"))
    }
}

// ============================================================================
// Channel Realtime Gateway
// ============================================================================

/// Realtime gateway backed by plain channels
///
/// Tests push posts in by hand; each live subscription whose scope matches
/// receives a copy. Subscription teardown is observable through
/// [`active_subscriptions`](Self::active_subscriptions).
#[derive(Default)]
pub struct ChannelRealtimeGateway {
    senders: Arc<RwLock<Vec<(FeedScope, mpsc::UnboundedSender<Post>)>>>,
    active: Arc<AtomicUsize>,
}

impl ChannelRealtimeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate a backend INSERT notification
    pub fn push(&self, post: Post) {
        let senders = self.senders.read().unwrap();
        for (scope, sender) in senders.iter() {
            if scope.includes(&post) {
                // a closed receiver just means that subscription is gone
                let _ = sender.send(post.clone());
            }
        }
    }

    /// How many subscriptions have been opened and not yet torn down
    pub fn active_subscriptions(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RealtimeGateway for ChannelRealtimeGateway {
    async fn subscribe(&self, scope: FeedScope) -> Result<FeedSubscription, DomainError> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.senders.write().unwrap().push((scope, tx));
        self.active.fetch_add(1, Ordering::SeqCst);

        let active = Arc::clone(&self.active);
        Ok(FeedSubscription::new(
            rx,
            Box::new(move || {
                active.fetch_sub(1, Ordering::SeqCst);
            }),
        ))
    }
}
