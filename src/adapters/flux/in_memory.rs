//! In-memory Flux messaging adapter.
//!
//! Backs the sandbox binary and the tests. A directory maps identities to
//! clients; each client knows its projects, profile and access token and
//! can be told to fail so error paths can be exercised.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use secrecy::SecretString;
use tokio::sync::RwLock;

use crate::domain::foundation::UserId;
use crate::ports::{
    MessagingClient, MessagingClientProvider, MessagingConnector, MessagingError, UserProfile,
};

/// One user's sandbox Flux connection.
pub struct InMemoryFluxClient {
    connector: MessagingConnector,
    profile: UserProfile,
    token: SecretString,
    projects: RwLock<Vec<String>>,
    force_error: RwLock<Option<MessagingError>>,
}

impl InMemoryFluxClient {
    /// Creates a client for `login` connected through `host`.
    pub fn new(host: impl Into<String>, login: impl Into<String>, token: impl Into<String>) -> Self {
        let login = login.into();
        Self {
            connector: MessagingConnector::new(host, login.clone()),
            profile: UserProfile::new(login),
            token: SecretString::new(token.into()),
            projects: RwLock::new(Vec::new()),
            force_error: RwLock::new(None),
        }
    }

    /// Seeds the project list.
    pub fn with_projects<I, S>(self, projects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            projects: RwLock::new(projects.into_iter().map(Into::into).collect()),
            ..self
        }
    }

    /// Adds a project at runtime.
    pub async fn add_project(&self, project: impl Into<String>) {
        self.projects.write().await.push(project.into());
    }

    /// Makes every fallible call return `error` until cleared.
    pub async fn fail_with(&self, error: MessagingError) {
        *self.force_error.write().await = Some(error);
    }

    /// Clears a forced error.
    pub async fn clear_error(&self) {
        *self.force_error.write().await = None;
    }

    async fn check(&self) -> Result<(), MessagingError> {
        match self.force_error.read().await.clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl MessagingClient for InMemoryFluxClient {
    async fn projects(&self) -> Result<Vec<String>, MessagingError> {
        self.check().await?;
        Ok(self.projects.read().await.clone())
    }

    fn connector(&self) -> MessagingConnector {
        self.connector.clone()
    }

    async fn user_profile(&self) -> Result<UserProfile, MessagingError> {
        self.check().await?;
        Ok(self.profile.clone())
    }

    async fn access_token(&self) -> Result<SecretString, MessagingError> {
        self.check().await?;
        Ok(self.token.clone())
    }
}

/// Hands out the Flux client signed in for each identity.
#[derive(Default)]
pub struct InMemoryFluxDirectory {
    clients: RwLock<HashMap<UserId, Arc<dyn MessagingClient>>>,
}

impl InMemoryFluxDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the client of an identity.
    pub async fn sign_in(&self, user_id: UserId, client: Arc<dyn MessagingClient>) {
        self.clients.write().await.insert(user_id, client);
    }

    /// Drops the client of an identity.
    pub async fn sign_out(&self, user_id: &UserId) {
        self.clients.write().await.remove(user_id);
    }
}

#[async_trait]
impl MessagingClientProvider for InMemoryFluxDirectory {
    async fn client_for(&self, user_id: &UserId) -> Option<Arc<dyn MessagingClient>> {
        self.clients.read().await.get(user_id).cloned()
    }
}
