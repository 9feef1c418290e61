//! REST adapters for the managed backend
//!
//! PostgREST-style data queries, token-based auth, and object storage, all
//! sharing one [`RestClient`].

pub mod auth;
pub mod client;
pub mod posts;
pub mod profiles;
pub mod storage;

pub use auth::RestAuthGateway;
pub use client::RestClient;
pub use posts::RestPostRepository;
pub use profiles::RestProfileRepository;
pub use storage::RestMediaStore;
