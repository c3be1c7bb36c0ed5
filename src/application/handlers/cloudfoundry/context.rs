//! Precondition checks shared by the deploy controller handlers.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::ports::{MessagingClient, MessagingClientProvider, PlatformSession, SessionStore};

use super::CloudFoundryError;

/// A logged-in platform session plus the user's Flux connection.
pub struct DeployContext {
    pub session: Arc<dyn PlatformSession>,
    pub messaging: Arc<dyn MessagingClient>,
}

impl DeployContext {
    /// Resolves both preconditions, platform login first.
    pub async fn resolve(
        store: &dyn SessionStore,
        provider: &dyn MessagingClientProvider,
        user_id: &UserId,
    ) -> Result<Self, CloudFoundryError> {
        let session = logged_in_session(store, user_id).await?;
        let messaging = messaging_client(provider, user_id).await?;
        Ok(Self { session, messaging })
    }
}

/// The stored session of `user_id`, if it still reports logged-in.
pub async fn logged_in_session(
    store: &dyn SessionStore,
    user_id: &UserId,
) -> Result<Arc<dyn PlatformSession>, CloudFoundryError> {
    let Some(session) = store.get(user_id).await else {
        tracing::info!(user_id = %user_id, "No platform session");
        return Err(CloudFoundryError::NotLoggedIn);
    };
    if !session.is_logged_in().await {
        tracing::info!(user_id = %user_id, "Platform session is no longer logged in");
        return Err(CloudFoundryError::NotLoggedIn);
    }
    Ok(session)
}

/// The Flux client of `user_id`.
pub async fn messaging_client(
    provider: &dyn MessagingClientProvider,
    user_id: &UserId,
) -> Result<Arc<dyn MessagingClient>, CloudFoundryError> {
    provider.client_for(user_id).await.ok_or_else(|| {
        tracing::info!(user_id = %user_id, "No Flux connection");
        CloudFoundryError::MessagingUnavailable
    })
}
