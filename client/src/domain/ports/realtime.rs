//! Realtime port
//!
//! Delivers newly committed posts for a scope as they happen. A subscription
//! is a scoped resource: it is acquired when a screen mounts and must be
//! released on every exit path, which the guard handles by RAII.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::domain::entities::{FeedScope, Post};
use crate::error::DomainError;

/// Gateway to the backend's realtime change feed
#[async_trait]
pub trait RealtimeGateway: Send + Sync {
    /// Open a subscription delivering new posts matching `scope`
    ///
    /// Delivery is assumed in-order per subscription; the feed applies
    /// inserts in the order they arrive and does not verify this.
    async fn subscribe(&self, scope: FeedScope) -> Result<FeedSubscription, DomainError>;
}

/// Teardown hook invoked exactly once when a subscription ends
pub type Teardown = Box<dyn FnOnce() + Send>;

/// A live realtime subscription
///
/// Inserts are buffered on an unbounded channel in delivery order. Dropping
/// the subscription (or calling [`FeedSubscription::close`]) runs the
/// gateway's teardown, releasing the underlying channel and any pump tasks.
pub struct FeedSubscription {
    inserts: mpsc::UnboundedReceiver<Post>,
    _guard: SubscriptionGuard,
}

impl FeedSubscription {
    pub fn new(inserts: mpsc::UnboundedReceiver<Post>, teardown: Teardown) -> Self {
        Self {
            inserts,
            _guard: SubscriptionGuard {
                teardown: Some(teardown),
            },
        }
    }

    /// Next buffered insert, if any, without waiting
    pub fn try_next_insert(&mut self) -> Option<Post> {
        self.inserts.try_recv().ok()
    }

    /// Wait for the next insert; `None` once the gateway side has closed
    pub async fn next_insert(&mut self) -> Option<Post> {
        self.inserts.recv().await
    }

    /// Explicitly end the subscription
    pub fn close(self) {}
}

struct SubscriptionGuard {
    teardown: Option<Teardown>,
}

impl Drop for SubscriptionGuard {
    fn drop(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}
