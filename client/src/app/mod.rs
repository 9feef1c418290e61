//! Application layer
//!
//! Use cases behind each screen: feed reconciliation and wiring, account
//! session flow, and post composition.

pub mod account_service;
pub mod composer;
pub mod feed_service;
pub mod feed_state;

pub use account_service::AccountService;
pub use composer::{Composer, MediaAttachment};
pub use feed_service::FeedService;
pub use feed_state::{FeedState, LikeMutation};
