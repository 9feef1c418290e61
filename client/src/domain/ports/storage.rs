//! Media storage port trait

use async_trait::async_trait;

use crate::error::DomainError;

/// Object storage for post media
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Upload a media object and return its public URL
    async fn upload(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, DomainError>;
}
