//! Shared REST client for the managed backend
//!
//! Thin wrapper around `reqwest` carrying the project API key and, once the
//! user signs in, their access token. One instance is shared by every REST
//! adapter so a sign-in authenticates all of them at once.

use std::sync::RwLock;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::BackendError;

pub struct RestClient {
    http: Client,
    base_url: String,
    api_key: String,
    access_token: RwLock<Option<String>>,
}

impl RestClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            access_token: RwLock::new(None),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn http(&self) -> &Client {
        &self.http
    }

    pub fn rest_url(&self, path: &str) -> String {
        format!("{}/rest/v1{}", self.base_url, path)
    }

    pub fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1{}", self.base_url, path)
    }

    pub fn storage_url(&self, path: &str) -> String {
        format!("{}/storage/v1{}", self.base_url, path)
    }

    /// Install or clear the signed-in user's access token
    pub fn set_access_token(&self, token: Option<String>) {
        *self
            .access_token
            .write()
            .expect("access token lock poisoned") = token;
    }

    /// Attach auth headers: the project key plus the user's bearer token,
    /// falling back to the project key when nobody is signed in
    pub fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header("apikey", &self.api_key);
        let token = self
            .access_token
            .read()
            .expect("access token lock poisoned");
        match token.as_deref() {
            Some(token) => builder.bearer_auth(token),
            None => builder.bearer_auth(&self.api_key),
        }
    }

    pub async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, BackendError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| BackendError::Deserialization(e.to_string()))
        } else if status.as_u16() == 401 {
            Err(BackendError::Unauthorized)
        } else if status.as_u16() == 429 {
            Err(BackendError::RateLimited)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(BackendError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }

    pub async fn handle_empty_response(
        &self,
        response: reqwest::Response,
    ) -> Result<(), BackendError> {
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else if status.as_u16() == 401 {
            Err(BackendError::Unauthorized)
        } else if status.as_u16() == 429 {
            Err(BackendError::RateLimited)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(BackendError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}
