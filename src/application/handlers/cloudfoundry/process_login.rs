//! ProcessLoginHandler - opens a platform session for the caller.
//!
//! Only the Flux precondition applies here: the session being created is
//! the thing every other handler requires. The store is written on success
//! only, so a failed attempt leaves any earlier session in place.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

use crate::domain::foundation::UserId;
use crate::ports::{MessagingClientProvider, PlatformConnector, SessionStore};

use super::{context, CloudFoundryError};

/// Credentials from the login form. Both are optional; empty values are
/// treated as absent.
#[derive(Debug, Clone)]
pub struct ProcessLoginCommand {
    pub user_id: UserId,
    pub login: Option<String>,
    pub password: Option<SecretString>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessLoginResult {
    pub user: Option<String>,
}

pub struct ProcessLoginHandler {
    connector: Arc<dyn PlatformConnector>,
    api_url: String,
    store: Arc<dyn SessionStore>,
    messaging: Arc<dyn MessagingClientProvider>,
}

impl ProcessLoginHandler {
    pub fn new(
        connector: Arc<dyn PlatformConnector>,
        api_url: impl Into<String>,
        store: Arc<dyn SessionStore>,
        messaging: Arc<dyn MessagingClientProvider>,
    ) -> Self {
        Self {
            connector,
            api_url: api_url.into(),
            store,
            messaging,
        }
    }

    pub async fn handle(&self, cmd: ProcessLoginCommand) -> Result<ProcessLoginResult, CloudFoundryError> {
        let messaging = context::messaging_client(self.messaging.as_ref(), &cmd.user_id).await?;

        let login = cmd.login.as_deref().filter(|l| !l.is_empty());
        let password = cmd.password.as_ref().filter(|p| !p.expose_secret().is_empty());

        let session = self.connector.connect(&self.api_url);
        if let Err(err) = session.login(messaging.as_ref(), login, password).await {
            tracing::warn!(user_id = %cmd.user_id, error = %err, "Cloud Foundry login failed");
            return Err(err.into());
        }

        let user = session.user().await;
        self.store.put(&cmd.user_id, session).await;
        tracing::info!(user_id = %cmd.user_id, cf_user = ?user, "Logged in to Cloud Foundry");

        Ok(ProcessLoginResult { user })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::cloudfoundry::test_support::{Fixture, RecordingSession, API_URL};
    use crate::ports::{PlatformError, PlatformSession};

    fn handler(fixture: &Fixture) -> ProcessLoginHandler {
        ProcessLoginHandler::new(
            fixture.connector(),
            API_URL,
            fixture.store.clone(),
            fixture.flux.clone(),
        )
    }

    fn command(fixture: &Fixture, login: Option<&str>, password: Option<&str>) -> ProcessLoginCommand {
        ProcessLoginCommand {
            user_id: fixture.user.clone(),
            login: login.map(str::to_string),
            password: password.map(|p| SecretString::new(p.to_string())),
        }
    }

    /// Connector handing out one pre-built session.
    struct FixedConnector(Arc<RecordingSession>);

    impl PlatformConnector for FixedConnector {
        fn connect(&self, _api_url: &str) -> Arc<dyn PlatformSession> {
            self.0.clone()
        }
    }

    #[tokio::test]
    async fn valid_credentials_store_a_logged_in_session() {
        let fixture = Fixture::new().await;

        let result = handler(&fixture)
            .handle(command(&fixture, Some("bob"), Some("pw")))
            .await
            .unwrap();

        assert_eq!(result.user.as_deref(), Some("bob"));
        assert!(fixture.session().await.is_logged_in().await);
    }

    #[tokio::test]
    async fn bad_credentials_leave_the_store_untouched() {
        let fixture = Fixture::new().await;

        let result = handler(&fixture)
            .handle(command(&fixture, Some("bob"), Some("wrong")))
            .await;

        assert!(matches!(
            result,
            Err(CloudFoundryError::Platform(PlatformError::LoginFailed(_)))
        ));
        assert!(fixture.store.is_empty().await);
    }

    #[tokio::test]
    async fn failed_login_keeps_the_previous_session() {
        let fixture = Fixture::logged_in().await;
        let before = fixture.session().await;

        let _ = handler(&fixture)
            .handle(command(&fixture, Some("bob"), Some("wrong")))
            .await;

        assert!(Arc::ptr_eq(&before, &fixture.session().await));
    }

    #[tokio::test]
    async fn requires_flux_but_not_a_platform_session() {
        let fixture = Fixture::new().await;
        fixture.flux.sign_out(&fixture.user).await;

        let result = handler(&fixture)
            .handle(command(&fixture, Some("bob"), Some("pw")))
            .await;

        assert_eq!(result.unwrap_err(), CloudFoundryError::MessagingUnavailable);
    }

    #[tokio::test]
    async fn empty_credentials_are_passed_as_absent() {
        let fixture = Fixture::new().await;
        let recorder = Arc::new(RecordingSession::logged_in());
        let handler = ProcessLoginHandler::new(
            Arc::new(FixedConnector(recorder.clone())),
            API_URL,
            fixture.store.clone(),
            fixture.flux.clone(),
        );

        handler
            .handle(command(&fixture, Some(""), Some("")))
            .await
            .unwrap();

        assert_eq!(recorder.calls(), vec!["login:-:-"]);
    }

    #[tokio::test]
    async fn platform_outage_is_a_collaborator_failure() {
        let fixture = Fixture::new().await;
        fixture
            .platform
            .fail_with(PlatformError::unavailable("maintenance"))
            .await;

        let err = handler(&fixture)
            .handle(command(&fixture, Some("bob"), Some("pw")))
            .await
            .unwrap_err();

        assert!(err.is_collaborator_failure());
        assert!(fixture.store.is_empty().await);
    }
}
