//! Unified error types for the Framez client
//!
//! This module defines error types for each layer:
//! - `DomainError`: port-level failures as application services see them
//! - `BackendError`: HTTP/websocket failures from the managed backend
//! - `ClientError`: top-level errors handed to embedding callers

use thiserror::Error;

/// Port-level errors - what application services see
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Managed-backend client errors (REST, storage, realtime)
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Unauthorized - invalid or expired credentials")]
    Unauthorized,

    #[error("Rate limited")]
    RateLimited,

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Realtime channel error: {0}")]
    Realtime(String),
}

impl From<BackendError> for DomainError {
    fn from(e: BackendError) -> Self {
        match e {
            BackendError::Unauthorized => {
                DomainError::Unauthorized("backend rejected credentials".to_string())
            }
            other => DomainError::Backend(other.to_string()),
        }
    }
}

/// Top-level client errors - what embedding applications receive
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
