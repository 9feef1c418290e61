//! Feed state reconciliation
//!
//! Owns the ordered post list behind one feed screen and merges three kinds
//! of events into it: bulk loads, realtime inserts, and optimistic like
//! toggles from the viewer. Pure synchronous list surgery; all I/O lives in
//! the surrounding service.

use crate::domain::entities::{Post, PostId, UserId};

/// A like mutation to persist remotely after its optimistic application
///
/// [`FeedState::toggle_like`] flips the local list immediately and hands one
/// of these back; the caller issues it to the backend and discards the
/// outcome. There is deliberately no rollback path: a failed remote write
/// leaves the list diverged until the next bulk load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeMutation {
    pub post_id: PostId,
    pub viewer: UserId,
    /// Desired server-side membership after the toggle
    pub liked: bool,
}

/// In-memory ordered post list for one feed scope
///
/// Ordering: newest first by `created_at` after a bulk load, ties keeping
/// input order. Realtime inserts always land at the head, even when their
/// timestamp is older than the current head's. Duplicate ids arriving over
/// the realtime channel are kept as visible duplicate rows; the channel is
/// trusted not to redeliver.
#[derive(Debug, Default)]
pub struct FeedState {
    posts: Vec<Post>,
}

impl FeedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole list with an authoritative snapshot
    pub fn load_all(&mut self, mut posts: Vec<Post>) {
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        self.posts = posts;
    }

    /// Prepend a post delivered by the realtime channel
    ///
    /// Realtime payloads carry no joined like rows, so the inserted post
    /// starts with an empty `liked_by` regardless of what the server has
    /// recorded; the count catches up on the next bulk load.
    pub fn apply_remote_insert(&mut self, mut post: Post) {
        post.liked_by.clear();
        self.posts.insert(0, post);
    }

    /// Optimistically flip the viewer's like on a post
    ///
    /// Returns the remote mutation to issue, or `None` when the post is not
    /// in the list. Consecutive calls toggle freely; nothing is coalesced.
    pub fn toggle_like(&mut self, post_id: PostId, viewer: UserId) -> Option<LikeMutation> {
        let post = self.posts.iter_mut().find(|p| p.id == post_id)?;
        let liked = if post.liked_by.contains(&viewer) {
            post.liked_by.remove(&viewer);
            false
        } else {
            post.liked_by.insert(viewer);
            true
        };

        Some(LikeMutation {
            post_id,
            viewer,
            liked,
        })
    }

    /// The viewer's current (optimistic) like state; `false` for unknown ids
    pub fn liked_by_viewer(&self, post_id: PostId, viewer: UserId) -> bool {
        self.posts
            .iter()
            .find(|p| p.id == post_id)
            .map(|p| p.is_liked_by(viewer))
            .unwrap_or(false)
    }

    /// Read-only render view, newest first
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
