//! Auth port trait

use async_trait::async_trait;

use crate::domain::entities::Session;
use crate::error::DomainError;

/// Gateway to the managed backend's auth surface
///
/// Account storage, password handling, and token issuance are entirely the
/// backend's concern; this client only holds the resulting session.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Register a new account
    async fn sign_up(&self, email: &str, password: &str) -> Result<Session, DomainError>;

    /// Authenticate with an email and password
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, DomainError>;

    /// Invalidate the current session server-side
    async fn sign_out(&self) -> Result<(), DomainError>;
}
