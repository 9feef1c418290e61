//! Domain ports (traits)
//!
//! Port traits define what the client needs from the managed backend.
//! Adapters provide concrete implementations of these traits.

pub mod auth;
pub mod realtime;
pub mod repositories;
pub mod storage;

pub use auth::AuthGateway;
pub use realtime::{FeedSubscription, RealtimeGateway, Teardown};
pub use repositories::{PostRepository, ProfileRepository};
pub use storage::MediaStore;
