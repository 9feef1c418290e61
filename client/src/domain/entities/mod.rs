//! Domain entities
//!
//! Pure models for the social feed: posts and their media, profiles,
//! sessions, and feed scopes.

pub mod feed;
pub mod post;
pub mod session;
pub mod user;

pub use feed::FeedScope;
pub use post::{AuthorDisplay, MediaKind, NewPost, Post, PostId, PostMedia};
pub use session::Session;
pub use user::{NewProfile, Profile, UserId};
