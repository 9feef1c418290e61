//! Account service
//!
//! Session flow against the auth gateway: sign-up (including the profile
//! bootstrap), sign-in, and sign-out.

use std::sync::Arc;

use crate::domain::entities::{NewProfile, Profile, Session, UserId};
use crate::domain::ports::{AuthGateway, ProfileRepository};
use crate::error::ClientError;

const DEFAULT_DISPLAY_NAME: &str = "New User";

/// Placeholder avatar assigned at sign-up, keyed by user id
fn default_avatar_url(user: UserId) -> String {
    format!("https://i.pravatar.cc/150?u={user}")
}

/// Manages the viewer's session and profile
pub struct AccountService<A, P>
where
    A: AuthGateway,
    P: ProfileRepository,
{
    auth: Arc<A>,
    profiles: Arc<P>,
    session: Option<Session>,
}

impl<A, P> AccountService<A, P>
where
    A: AuthGateway,
    P: ProfileRepository,
{
    pub fn new(auth: Arc<A>, profiles: Arc<P>) -> Self {
        Self {
            auth,
            profiles,
            session: None,
        }
    }

    /// Create an account and bootstrap its profile row
    pub async fn sign_up(
        &mut self,
        email: &str,
        password: &str,
        display_name: Option<&str>,
    ) -> Result<Session, ClientError> {
        let session = self.auth.sign_up(email, password).await?;

        let profile = NewProfile {
            id: session.user_id,
            name: display_name.unwrap_or(DEFAULT_DISPLAY_NAME).to_string(),
            avatar_url: Some(default_avatar_url(session.user_id)),
        };
        self.profiles.upsert(&profile).await?;

        tracing::info!(user = %session.user_id, "account created");
        self.session = Some(session.clone());
        Ok(session)
    }

    /// Authenticate an existing account
    pub async fn sign_in(&mut self, email: &str, password: &str) -> Result<Session, ClientError> {
        let session = self.auth.sign_in(email, password).await?;
        self.session = Some(session.clone());
        Ok(session)
    }

    /// End the session
    ///
    /// A failed backend sign-out is only logged; the local session is
    /// cleared regardless so the user is never stuck signed in.
    pub async fn sign_out(&mut self) {
        if let Err(e) = self.auth.sign_out().await {
            tracing::warn!("sign-out request failed: {}", e);
        }
        self.session = None;
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// The signed-in user's id, if any
    pub fn viewer(&self) -> Option<UserId> {
        self.session.as_ref().map(|s| s.user_id)
    }

    /// Fetch a profile for display
    pub async fn profile(&self, id: UserId) -> Result<Option<Profile>, ClientError> {
        Ok(self.profiles.get(id).await?)
    }
}
