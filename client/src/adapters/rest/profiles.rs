//! Profile repository over the backend's REST surface

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::client::RestClient;
use crate::domain::entities::{NewProfile, Profile, UserId};
use crate::domain::ports::ProfileRepository;
use crate::error::{BackendError, DomainError};

pub struct RestProfileRepository {
    rest: Arc<RestClient>,
}

impl RestProfileRepository {
    pub fn new(rest: Arc<RestClient>) -> Self {
        Self { rest }
    }
}

#[derive(Deserialize)]
struct ProfileRow {
    id: UserId,
    name: String,
    avatar_url: Option<String>,
}

#[derive(Serialize)]
struct UpsertProfileRequest<'a> {
    id: UserId,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    avatar_url: Option<&'a str>,
}

#[async_trait]
impl ProfileRepository for RestProfileRepository {
    async fn get(&self, id: UserId) -> Result<Option<Profile>, DomainError> {
        let request = self
            .rest
            .http()
            .get(self.rest.rest_url("/profiles"))
            .query(&[("select", "*".to_string()), ("id", format!("eq.{id}"))]);

        let response = self
            .rest
            .authed(request)
            .send()
            .await
            .map_err(BackendError::from)?;
        let mut rows: Vec<ProfileRow> = self.rest.handle_response(response).await?;

        Ok(rows.pop().map(|row| Profile {
            id: row.id,
            name: row.name,
            avatar_url: row.avatar_url,
        }))
    }

    async fn upsert(&self, profile: &NewProfile) -> Result<(), DomainError> {
        let body = UpsertProfileRequest {
            id: profile.id,
            name: &profile.name,
            avatar_url: profile.avatar_url.as_deref(),
        };
        let request = self
            .rest
            .http()
            .post(self.rest.rest_url("/profiles"))
            .header("Prefer", "resolution=merge-duplicates")
            .json(&body);

        let response = self
            .rest
            .authed(request)
            .send()
            .await
            .map_err(BackendError::from)?;
        self.rest.handle_empty_response(response).await?;
        Ok(())
    }
}
