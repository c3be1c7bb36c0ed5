//! Shared fixtures for the deploy controller handler tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::adapters::cloudfoundry::{InMemoryPlatform, InMemoryPlatformConnector};
use crate::adapters::flux::{InMemoryFluxClient, InMemoryFluxDirectory};
use crate::adapters::session_store::InMemorySessionStore;
use crate::domain::deployment::{DeploymentConfig, OrgSpace};
use crate::domain::foundation::UserId;
use crate::ports::{
    MessagingClient, MessagingConnector, PlatformConnector, PlatformError, PlatformSession,
    SessionStore,
};

pub const API_URL: &str = "https://api.example.com/";

pub struct Fixture {
    pub platform: Arc<InMemoryPlatform>,
    pub store: Arc<InMemorySessionStore>,
    pub flux: Arc<InMemoryFluxDirectory>,
    pub flux_client: Arc<InMemoryFluxClient>,
    pub user: UserId,
}

impl Fixture {
    /// Platform with account bob/pw and two spaces; user `u1` is signed
    /// in to Flux with projects app1 and app2 but has no platform session.
    pub async fn new() -> Self {
        let platform = Arc::new(InMemoryPlatform::new());
        platform.add_account("bob", "pw").await;
        platform.add_space(space("org1/space1")).await;
        platform.add_space(space("org1/space2")).await;

        let user = UserId::new("u1").unwrap();
        let flux_client = Arc::new(
            InMemoryFluxClient::new("flux.example.com", "bob", "flux-token").with_projects(["app1", "app2"]),
        );
        let flux = Arc::new(InMemoryFluxDirectory::new());
        flux.sign_in(user.clone(), flux_client.clone()).await;

        Self {
            platform,
            store: Arc::new(InMemorySessionStore::new()),
            flux,
            flux_client,
            user,
        }
    }

    /// As `new`, plus a logged-in platform session in the store.
    pub async fn logged_in() -> Self {
        let fixture = Self::new().await;
        let session = fixture.connector().connect(API_URL);
        session
            .login(
                fixture.flux_client.as_ref(),
                Some("bob"),
                Some(&SecretString::new("pw".to_string())),
            )
            .await
            .unwrap();
        fixture.store.put(&fixture.user, session).await;
        fixture
    }

    pub fn connector(&self) -> Arc<dyn PlatformConnector> {
        Arc::new(InMemoryPlatformConnector::new(self.platform.clone()))
    }

    pub async fn session(&self) -> Arc<dyn PlatformSession> {
        self.store.get(&self.user).await.unwrap()
    }
}

pub fn space(value: &str) -> OrgSpace {
    OrgSpace::parse(value).unwrap()
}

/// Platform session that records the order of calls it receives.
#[derive(Default)]
pub struct RecordingSession {
    pub calls: Mutex<Vec<String>>,
    pub logged_in: bool,
    pub push_error: Option<PlatformError>,
}

impl RecordingSession {
    pub fn logged_in() -> Self {
        Self {
            logged_in: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl PlatformSession for RecordingSession {
    async fn login(
        &self,
        _messaging: &dyn MessagingClient,
        login: Option<&str>,
        password: Option<&SecretString>,
    ) -> Result<(), PlatformError> {
        self.record(format!(
            "login:{}:{}",
            login.unwrap_or("-"),
            password.map(|p| p.expose_secret().as_str()).unwrap_or("-")
        ));
        Ok(())
    }

    async fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    async fn user(&self) -> Option<String> {
        Some("recorder".to_string())
    }

    async fn space(&self) -> Option<OrgSpace> {
        None
    }

    async fn set_space(&self, space: OrgSpace) {
        self.record(format!("set_space:{}", space));
    }

    async fn spaces(&self, _connector: &MessagingConnector) -> Result<Vec<OrgSpace>, PlatformError> {
        self.record("spaces".to_string());
        Ok(vec![])
    }

    async fn deployment_config(
        &self,
        _connector: &MessagingConnector,
        project: &str,
    ) -> Result<DeploymentConfig, PlatformError> {
        self.record(format!("deployment_config:{}", project));
        Ok(DeploymentConfig::new(project))
    }

    async fn push(
        &self,
        _connector: &MessagingConnector,
        config: &DeploymentConfig,
    ) -> Result<(), PlatformError> {
        let target = config
            .org_space
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();
        self.record(format!("push:{}:{}", config.project, target));
        match &self.push_error {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}
