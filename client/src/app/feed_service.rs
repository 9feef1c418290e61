//! Feed screen service
//!
//! Wires one [`FeedState`] to the backend ports for a single screen: bulk
//! refresh, realtime inserts over a scoped subscription, and fire-and-forget
//! like persistence.

use std::sync::Arc;

use crate::app::feed_state::FeedState;
use crate::domain::entities::{FeedScope, Post, PostId, UserId};
use crate::domain::ports::{FeedSubscription, PostRepository, RealtimeGateway};
use crate::error::ClientError;

/// One feed screen's state and event wiring
///
/// A separate instance backs each active screen (global feed, profile feed);
/// instances share nothing, so all list mutation is single-writer.
pub struct FeedService<P, R>
where
    P: PostRepository + 'static,
    R: RealtimeGateway,
{
    posts: Arc<P>,
    realtime: Arc<R>,
    scope: FeedScope,
    viewer: UserId,
    state: FeedState,
    subscription: Option<FeedSubscription>,
}

impl<P, R> FeedService<P, R>
where
    P: PostRepository + 'static,
    R: RealtimeGateway,
{
    pub fn new(posts: Arc<P>, realtime: Arc<R>, scope: FeedScope, viewer: UserId) -> Self {
        Self {
            posts,
            realtime,
            scope,
            viewer,
            state: FeedState::new(),
            subscription: None,
        }
    }

    /// Replace the list with a fresh authoritative snapshot
    ///
    /// On a failed fetch the previous list is kept unchanged
    /// (stale-but-consistent) and the error is returned for the caller to
    /// surface.
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        let posts = self.posts.query(self.scope).await?;
        self.state.load_all(posts);
        Ok(())
    }

    /// Bring the screen up: initial load plus realtime subscription
    pub async fn mount(&mut self) -> Result<(), ClientError> {
        self.refresh().await?;
        if self.subscription.is_none() {
            self.subscription = Some(self.realtime.subscribe(self.scope).await?);
        }
        Ok(())
    }

    /// Tear the screen down, releasing the realtime subscription
    pub fn unmount(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.close();
        }
    }

    /// Apply every realtime insert buffered so far; returns how many landed
    pub fn drain_inserts(&mut self) -> usize {
        let Some(subscription) = self.subscription.as_mut() else {
            return 0;
        };

        let mut applied = 0;
        while let Some(post) = subscription.try_next_insert() {
            self.state.apply_remote_insert(post);
            applied += 1;
        }
        applied
    }

    /// Wait for the next realtime insert and apply it
    ///
    /// Returns the applied post, or `None` when the screen has no live
    /// subscription or the channel has closed.
    pub async fn apply_next_insert(&mut self) -> Option<Post> {
        let subscription = self.subscription.as_mut()?;
        let post = subscription.next_insert().await?;
        self.state.apply_remote_insert(post.clone());
        Some(post)
    }

    /// Optimistically toggle the viewer's like and persist it in the
    /// background
    ///
    /// The list flips before the backend round-trip completes; a failed
    /// write is only logged, leaving the screen diverged until the next
    /// refresh. Unknown post ids are ignored.
    pub fn toggle_like(&mut self, post_id: PostId) {
        let Some(mutation) = self.state.toggle_like(post_id, self.viewer) else {
            return;
        };

        let posts = Arc::clone(&self.posts);
        tokio::spawn(async move {
            if let Err(e) = posts
                .set_liked(mutation.post_id, mutation.viewer, mutation.liked)
                .await
            {
                tracing::warn!(post_id = %mutation.post_id, "failed to persist like toggle: {}", e);
            }
        });
    }

    /// Read-only render view, newest first
    pub fn posts(&self) -> &[Post] {
        self.state.posts()
    }

    /// The viewer's current (optimistic) like state for a post
    pub fn liked_by_viewer(&self, post_id: PostId) -> bool {
        self.state.liked_by_viewer(post_id, self.viewer)
    }

    pub fn scope(&self) -> FeedScope {
        self.scope
    }
}
