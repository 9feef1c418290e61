//! Auth gateway over the backend's token endpoints

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::client::RestClient;
use crate::domain::entities::{Session, UserId};
use crate::domain::ports::AuthGateway;
use crate::error::{BackendError, DomainError};

pub struct RestAuthGateway {
    rest: Arc<RestClient>,
}

impl RestAuthGateway {
    pub fn new(rest: Arc<RestClient>) -> Self {
        Self { rest }
    }

    fn install_session(&self, response: SessionResponse) -> Session {
        self.rest
            .set_access_token(Some(response.access_token.clone()));
        Session {
            user_id: response.user.id,
            email: response.user.email,
            access_token: response.access_token,
            refresh_token: response.refresh_token,
        }
    }
}

#[derive(Serialize)]
struct CredentialsRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct SessionResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    user: SessionUser,
}

#[derive(Deserialize)]
struct SessionUser {
    id: UserId,
    email: String,
}

#[async_trait]
impl AuthGateway for RestAuthGateway {
    async fn sign_up(&self, email: &str, password: &str) -> Result<Session, DomainError> {
        let request = self
            .rest
            .http()
            .post(self.rest.auth_url("/signup"))
            .json(&CredentialsRequest { email, password });

        let response = self
            .rest
            .authed(request)
            .send()
            .await
            .map_err(BackendError::from)?;
        let session: SessionResponse = self.rest.handle_response(response).await?;
        Ok(self.install_session(session))
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, DomainError> {
        let request = self
            .rest
            .http()
            .post(self.rest.auth_url("/token"))
            .query(&[("grant_type", "password")])
            .json(&CredentialsRequest { email, password });

        let response = self
            .rest
            .authed(request)
            .send()
            .await
            .map_err(BackendError::from)?;
        let session: SessionResponse = self.rest.handle_response(response).await?;
        Ok(self.install_session(session))
    }

    async fn sign_out(&self) -> Result<(), DomainError> {
        let request = self.rest.http().post(self.rest.auth_url("/logout"));
        let response = self
            .rest
            .authed(request)
            .send()
            .await
            .map_err(BackendError::from)?;
        // the local token is cleared whatever the backend says
        self.rest.set_access_token(None);
        self.rest.handle_empty_response(response).await?;
        Ok(())
    }
}
