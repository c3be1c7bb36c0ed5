//! Messaging client port - the user's Flux connection.
//!
//! Flux owns the user's projects and the messaging channels the platform
//! side is addressed through. A `MessagingClientProvider` hands out the
//! client bound to an identity; `None` means the user has not signed in to
//! Flux yet.

use std::sync::Arc;

use async_trait::async_trait;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::UserId;

/// Errors reported by the messaging client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessagingError {
    /// The Flux service could not be reached.
    #[error("Flux unavailable: {0}")]
    Unavailable(String),

    /// Flux rejected the user's credentials.
    #[error("Flux rejected the user's credentials")]
    Unauthorized,

    /// Any other error reported by Flux.
    #[error("Flux error: {0}")]
    Remote(String),
}

/// Live connection details of a Flux messaging client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagingConnector {
    host: String,
    user: String,
}

impl MessagingConnector {
    pub fn new(host: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            user: user.into(),
        }
    }

    /// Host of the socket transport the browser connects to.
    pub fn host(&self) -> &str {
        &self.host
    }
}

/// Flux user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl UserProfile {
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            name: None,
        }
    }
}

/// One user's Flux connection.
#[async_trait]
pub trait MessagingClient: Send + Sync {
    /// Names of the user's Flux projects.
    async fn projects(&self) -> Result<Vec<String>, MessagingError>;

    /// Connection the platform side is addressed through.
    fn connector(&self) -> MessagingConnector;

    /// Profile of the signed-in Flux user.
    async fn user_profile(&self) -> Result<UserProfile, MessagingError>;

    /// Access token the browser uses to join the user's channels.
    async fn access_token(&self) -> Result<SecretString, MessagingError>;
}

/// Looks up the messaging client of an identity.
#[async_trait]
pub trait MessagingClientProvider: Send + Sync {
    /// Returns `None` when the user has no Flux connection.
    async fn client_for(&self, user_id: &UserId) -> Option<Arc<dyn MessagingClient>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connector_exposes_host() {
        let connector = MessagingConnector::new("flux.example.com", "bob");
        assert_eq!(connector.host(), "flux.example.com");
    }

    #[test]
    fn user_profile_deserializes_without_name() {
        let profile: UserProfile = serde_json::from_str(r#"{"login":"bob"}"#).unwrap();
        assert_eq!(profile, UserProfile::new("bob"));
    }

    #[test]
    fn messaging_ports_are_object_safe() {
        fn _client(_: &dyn MessagingClient) {}
        fn _provider(_: &dyn MessagingClientProvider) {}
        fn _assert_send_sync<T: Send + Sync + ?Sized>() {}
        _assert_send_sync::<Arc<dyn MessagingClient>>();
        _assert_send_sync::<Arc<dyn MessagingClientProvider>>();
    }
}
