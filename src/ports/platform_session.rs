//! Platform session port - one authenticated Cloud Foundry session.
//!
//! The deployer never talks to the Cloud Foundry API directly. A
//! `PlatformConnector` creates an unauthenticated session bound to the
//! configured API base URL; after a successful `login` the session is kept
//! in the `SessionStore` and reused by every later request of that user.
//!
//! Space listing, deployment lookups and pushes are addressed through the
//! user's Flux `MessagingConnector`, because the platform side answers over
//! the same messaging channels the Flux projects live on.

use std::sync::Arc;

use async_trait::async_trait;
use secrecy::SecretString;
use thiserror::Error;

use crate::domain::deployment::{DeploymentConfig, OrgSpace};
use crate::ports::{MessagingClient, MessagingConnector};

/// Errors reported by a platform session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    /// The session was valid once but the platform no longer accepts it.
    #[error("Not logged in to Cloud Foundry")]
    NotLoggedIn,

    /// Credentials were rejected or the login flow failed.
    #[error("Cloud Foundry login failed: {0}")]
    LoginFailed(String),

    /// The platform or its deployer service could not be reached.
    #[error("Cloud Foundry unavailable: {0}")]
    Unavailable(String),

    /// The push itself failed.
    #[error("Deploying '{project}' failed: {reason}")]
    PushFailed { project: String, reason: String },

    /// Any other error reported by the platform.
    #[error("Cloud Foundry error: {0}")]
    Remote(String),
}

impl PlatformError {
    pub fn login_failed(message: impl Into<String>) -> Self {
        Self::LoginFailed(message.into())
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    pub fn push_failed(project: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::PushFailed {
            project: project.into(),
            reason: reason.into(),
        }
    }
}

/// One user's session against the platform.
///
/// Sessions are shared between concurrent requests of the same user, so
/// mutating operations (`set_space`) go through interior mutability and
/// follow last-writer-wins semantics.
#[async_trait]
pub trait PlatformSession: Send + Sync {
    /// Authenticate this session.
    ///
    /// `password` may be absent, in which case the implementation attempts
    /// an implicit grant using the Flux identity behind `messaging`.
    async fn login(
        &self,
        messaging: &dyn MessagingClient,
        login: Option<&str>,
        password: Option<&SecretString>,
    ) -> Result<(), PlatformError>;

    /// Whether the session currently holds a valid login.
    async fn is_logged_in(&self) -> bool;

    /// Platform user name of the logged-in account.
    async fn user(&self) -> Option<String>;

    /// Current default space.
    async fn space(&self) -> Option<OrgSpace>;

    /// Replace the default space used by later requests.
    async fn set_space(&self, space: OrgSpace);

    /// Spaces the user may deploy to.
    async fn spaces(&self, connector: &MessagingConnector) -> Result<Vec<OrgSpace>, PlatformError>;

    /// Current deployment state of a project.
    async fn deployment_config(
        &self,
        connector: &MessagingConnector,
        project: &str,
    ) -> Result<DeploymentConfig, PlatformError>;

    /// Push a project to the platform.
    ///
    /// May take as long as the platform needs to stage and start the app;
    /// no progress is reported.
    async fn push(
        &self,
        connector: &MessagingConnector,
        config: &DeploymentConfig,
    ) -> Result<(), PlatformError>;
}

/// Creates platform sessions bound to an API base URL.
pub trait PlatformConnector: Send + Sync {
    /// Create a new, not yet authenticated session.
    fn connect(&self, api_url: &str) -> Arc<dyn PlatformSession>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_error_messages_are_human_readable() {
        assert_eq!(
            PlatformError::login_failed("bad credentials").to_string(),
            "Cloud Foundry login failed: bad credentials"
        );
        assert_eq!(
            PlatformError::push_failed("app1", "staging error").to_string(),
            "Deploying 'app1' failed: staging error"
        );
        assert_eq!(
            PlatformError::NotLoggedIn.to_string(),
            "Not logged in to Cloud Foundry"
        );
    }

    #[test]
    fn platform_ports_are_object_safe() {
        fn _session(_: &dyn PlatformSession) {}
        fn _connector(_: &dyn PlatformConnector) {}
        fn _assert_send_sync<T: Send + Sync + ?Sized>() {}
        _assert_send_sync::<Arc<dyn PlatformSession>>();
        _assert_send_sync::<Arc<dyn PlatformConnector>>();
    }
}
