//! In-memory Cloud Foundry platform.
//!
//! Stands in for the real platform in the sandbox binary and the tests:
//! accounts, spaces and deployed apps live in one shared `InMemoryPlatform`,
//! and every session created by the connector talks to it. Calling
//! `invalidate_sessions` simulates the platform side restarting, after
//! which every existing session reports logged-out.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use tokio::sync::RwLock;

use crate::domain::deployment::{DeploymentConfig, OrgSpace};
use crate::ports::{
    MessagingClient, MessagingConnector, PlatformConnector, PlatformError, PlatformSession,
};

const DEFAULT_APP_DOMAIN: &str = "cfapps.io";

/// One push as seen by the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushRecord {
    pub user: String,
    pub project: String,
    pub org_space: OrgSpace,
}

#[derive(Default)]
struct PlatformState {
    accounts: HashMap<String, String>,
    spaces: Vec<OrgSpace>,
    deployments: HashMap<String, DeploymentConfig>,
    pushes: Vec<PushRecord>,
    generation: u64,
    force_error: Option<PlatformError>,
}

/// Shared sandbox platform.
pub struct InMemoryPlatform {
    state: RwLock<PlatformState>,
    app_domain: String,
}

impl Default for InMemoryPlatform {
    fn default() -> Self {
        Self {
            state: RwLock::new(PlatformState::default()),
            app_domain: DEFAULT_APP_DOMAIN.to_string(),
        }
    }
}

impl InMemoryPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Domain appended to app names when routes are assigned.
    pub fn with_app_domain(self, domain: impl Into<String>) -> Self {
        Self {
            app_domain: domain.into(),
            ..self
        }
    }

    /// Registers an account.
    pub async fn add_account(&self, login: impl Into<String>, password: impl Into<String>) {
        self.state
            .write()
            .await
            .accounts
            .insert(login.into(), password.into());
    }

    /// Registers a space the accounts may deploy to.
    pub async fn add_space(&self, space: OrgSpace) {
        let mut state = self.state.write().await;
        if !state.spaces.contains(&space) {
            state.spaces.push(space);
        }
    }

    /// Every push received so far, oldest first.
    pub async fn pushes(&self) -> Vec<PushRecord> {
        self.state.read().await.pushes.clone()
    }

    /// Logs every existing session out.
    pub async fn invalidate_sessions(&self) {
        self.state.write().await.generation += 1;
    }

    /// Makes every platform call fail with `error` until cleared.
    pub async fn fail_with(&self, error: PlatformError) {
        self.state.write().await.force_error = Some(error);
    }

    pub async fn clear_error(&self) {
        self.state.write().await.force_error = None;
    }

    async fn check(&self) -> Result<(), PlatformError> {
        match self.state.read().await.force_error.clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    async fn generation(&self) -> u64 {
        self.state.read().await.generation
    }
}

/// Creates sessions against a shared `InMemoryPlatform`.
#[derive(Clone)]
pub struct InMemoryPlatformConnector {
    platform: Arc<InMemoryPlatform>,
}

impl InMemoryPlatformConnector {
    pub fn new(platform: Arc<InMemoryPlatform>) -> Self {
        Self { platform }
    }
}

impl PlatformConnector for InMemoryPlatformConnector {
    fn connect(&self, api_url: &str) -> Arc<dyn PlatformSession> {
        tracing::debug!(api_url, "Creating sandbox platform session");
        Arc::new(InMemoryPlatformSession::new(self.platform.clone(), api_url))
    }
}

#[derive(Default)]
struct SessionState {
    user: Option<String>,
    space: Option<OrgSpace>,
    /// Platform generation the login happened in.
    generation: Option<u64>,
}

/// One session against the sandbox platform.
pub struct InMemoryPlatformSession {
    platform: Arc<InMemoryPlatform>,
    api_url: String,
    state: RwLock<SessionState>,
}

impl InMemoryPlatformSession {
    pub fn new(platform: Arc<InMemoryPlatform>, api_url: impl Into<String>) -> Self {
        Self {
            platform,
            api_url: api_url.into(),
            state: RwLock::new(SessionState::default()),
        }
    }

    async fn require_login(&self) -> Result<String, PlatformError> {
        self.platform.check().await?;
        let state = self.state.read().await;
        match (&state.user, state.generation) {
            (Some(user), Some(generation)) if generation == self.platform.generation().await => {
                Ok(user.clone())
            }
            _ => Err(PlatformError::NotLoggedIn),
        }
    }
}

#[async_trait]
impl PlatformSession for InMemoryPlatformSession {
    async fn login(
        &self,
        messaging: &dyn MessagingClient,
        login: Option<&str>,
        password: Option<&SecretString>,
    ) -> Result<(), PlatformError> {
        self.platform.check().await?;

        // Without a password the Flux identity has to vouch for the account,
        // so the requested login must be the Flux user's own.
        let requested = login.filter(|l| !l.is_empty());
        let flux_login = match (requested, password) {
            (Some(_), Some(_)) => None,
            _ => Some(
                messaging
                    .user_profile()
                    .await
                    .map_err(|e| PlatformError::login_failed(e.to_string()))?
                    .login,
            ),
        };
        let login = requested
            .map(str::to_string)
            .or_else(|| flux_login.clone())
            .unwrap_or_default();
        tracing::debug!(api_url = %self.api_url, login = %login, "Sandbox platform login");

        let (accepted, spaces, generation) = {
            let platform = self.platform.state.read().await;
            let accepted = match (platform.accounts.get(&login), password) {
                (Some(expected), Some(given)) => expected == given.expose_secret(),
                (Some(_), None) => flux_login.as_deref() == Some(login.as_str()),
                (None, _) => false,
            };
            (accepted, platform.spaces.clone(), platform.generation)
        };

        if !accepted {
            return Err(PlatformError::login_failed(format!(
                "Invalid credentials for '{}'",
                login
            )));
        }

        let mut state = self.state.write().await;
        state.user = Some(login);
        state.generation = Some(generation);
        if state.space.is_none() {
            state.space = spaces.into_iter().next();
        }
        Ok(())
    }

    async fn is_logged_in(&self) -> bool {
        self.require_login().await.is_ok()
    }

    async fn user(&self) -> Option<String> {
        self.state.read().await.user.clone()
    }

    async fn space(&self) -> Option<OrgSpace> {
        self.state.read().await.space.clone()
    }

    async fn set_space(&self, space: OrgSpace) {
        self.state.write().await.space = Some(space);
    }

    async fn spaces(&self, _connector: &MessagingConnector) -> Result<Vec<OrgSpace>, PlatformError> {
        self.require_login().await?;
        Ok(self.platform.state.read().await.spaces.clone())
    }

    async fn deployment_config(
        &self,
        _connector: &MessagingConnector,
        project: &str,
    ) -> Result<DeploymentConfig, PlatformError> {
        self.require_login().await?;
        Ok(self
            .platform
            .state
            .read()
            .await
            .deployments
            .get(project)
            .cloned()
            .unwrap_or_else(|| DeploymentConfig::new(project)))
    }

    async fn push(
        &self,
        _connector: &MessagingConnector,
        config: &DeploymentConfig,
    ) -> Result<(), PlatformError> {
        let user = self.require_login().await?;
        let org_space = config
            .org_space
            .clone()
            .ok_or_else(|| PlatformError::push_failed(&config.project, "no target space"))?;

        let mut platform = self.platform.state.write().await;
        if !platform.spaces.contains(&org_space) {
            return Err(PlatformError::push_failed(
                &config.project,
                format!("unknown space '{}'", org_space),
            ));
        }

        let route = format!("{}.{}", config.project, self.platform.app_domain);
        let deployed = config.clone().with_routes(vec![route]);
        platform.deployments.insert(config.project.clone(), deployed);
        platform.pushes.push(PushRecord {
            user,
            project: config.project.clone(),
            org_space,
        });
        Ok(())
    }
}
