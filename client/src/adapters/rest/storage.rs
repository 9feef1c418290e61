//! Media storage client

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use super::client::RestClient;
use crate::domain::ports::MediaStore;
use crate::error::{BackendError, DomainError};

pub struct RestMediaStore {
    rest: Arc<RestClient>,
    bucket: String,
}

impl RestMediaStore {
    pub fn new(rest: Arc<RestClient>, bucket: String) -> Self {
        Self { rest, bucket }
    }

    /// Public download URL for an object in this bucket
    pub fn public_url(&self, path: &str) -> String {
        self.rest
            .storage_url(&format!("/object/public/{}/{}", self.bucket, path))
    }
}

#[async_trait]
impl MediaStore for RestMediaStore {
    async fn upload(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, DomainError> {
        let request = self
            .rest
            .http()
            .post(
                self.rest
                    .storage_url(&format!("/object/{}/{}", self.bucket, path)),
            )
            .header(CONTENT_TYPE, content_type)
            .body(bytes);

        let response = self
            .rest
            .authed(request)
            .send()
            .await
            .map_err(BackendError::from)?;
        self.rest.handle_empty_response(response).await?;

        Ok(self.public_url(path))
    }
}
