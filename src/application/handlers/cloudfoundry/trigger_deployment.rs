//! TriggerDeploymentHandler - pushes one Flux project to a space.

use std::sync::Arc;

use crate::domain::deployment::{DeploymentConfig, OrgSpace};
use crate::domain::foundation::{UserId, ValidationError};
use crate::ports::{MessagingClientProvider, SessionStore};

use super::{CloudFoundryError, DeployContext};

/// Command to push `project` to `space` (`"org/space"`).
#[derive(Debug, Clone)]
pub struct TriggerDeploymentCommand {
    pub user_id: UserId,
    pub project: String,
    pub space: String,
}

/// Result of a successful push.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerDeploymentResult {
    pub project: String,
    pub org_space: OrgSpace,
}

pub struct TriggerDeploymentHandler {
    store: Arc<dyn SessionStore>,
    messaging: Arc<dyn MessagingClientProvider>,
}

impl TriggerDeploymentHandler {
    pub fn new(store: Arc<dyn SessionStore>, messaging: Arc<dyn MessagingClientProvider>) -> Self {
        Self { store, messaging }
    }

    pub async fn handle(
        &self,
        cmd: TriggerDeploymentCommand,
    ) -> Result<TriggerDeploymentResult, CloudFoundryError> {
        // 1. Preconditions
        let ctx = DeployContext::resolve(self.store.as_ref(), self.messaging.as_ref(), &cmd.user_id).await?;

        // 2. Validate input
        let project = cmd.project.trim();
        if project.is_empty() {
            return Err(ValidationError::empty_field("project").into());
        }
        let org_space = OrgSpace::parse(cmd.space.trim())?;
        if !ctx.messaging.projects().await?.iter().any(|p| p == project) {
            return Err(CloudFoundryError::UnknownProject(project.to_string()));
        }

        // 3. Remember the space, then push
        let config = DeploymentConfig::new(project).with_org_space(org_space.clone());
        ctx.session.set_space(org_space.clone()).await;

        tracing::info!(
            user_id = %cmd.user_id,
            project,
            space = %org_space,
            "Pushing project"
        );
        ctx.session.push(&ctx.messaging.connector(), &config).await?;
        tracing::info!(user_id = %cmd.user_id, project, "Push finished");

        Ok(TriggerDeploymentResult {
            project: project.to_string(),
            org_space,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::cloudfoundry::test_support::{space, Fixture, RecordingSession};
    use crate::ports::PlatformError;

    fn handler(fixture: &Fixture) -> TriggerDeploymentHandler {
        TriggerDeploymentHandler::new(fixture.store.clone(), fixture.flux.clone())
    }

    fn command(fixture: &Fixture, project: &str, space: &str) -> TriggerDeploymentCommand {
        TriggerDeploymentCommand {
            user_id: fixture.user.clone(),
            project: project.to_string(),
            space: space.to_string(),
        }
    }

    #[tokio::test]
    async fn pushes_project_and_updates_default_space() {
        let fixture = Fixture::logged_in().await;

        let result = handler(&fixture)
            .handle(command(&fixture, "app1", "org1/space2"))
            .await
            .unwrap();

        assert_eq!(result.project, "app1");
        assert_eq!(result.org_space, space("org1/space2"));
        assert_eq!(fixture.session().await.space().await, Some(space("org1/space2")));

        let pushes = fixture.platform.pushes().await;
        assert_eq!(pushes.len(), 1);
        assert_eq!(pushes[0].project, "app1");
        assert_eq!(pushes[0].org_space, space("org1/space2"));
    }

    #[tokio::test]
    async fn sets_space_before_pushing() {
        let fixture = Fixture::new().await;
        let recorder = Arc::new(RecordingSession::logged_in());
        fixture.store.put(&fixture.user, recorder.clone()).await;

        handler(&fixture)
            .handle(command(&fixture, "app1", "org1/space1"))
            .await
            .unwrap();

        assert_eq!(
            recorder.calls(),
            vec!["set_space:org1/space1", "push:app1:org1/space1"]
        );
    }

    #[tokio::test]
    async fn malformed_space_is_a_validation_error_and_nothing_is_pushed() {
        let fixture = Fixture::new().await;
        let recorder = Arc::new(RecordingSession::logged_in());
        fixture.store.put(&fixture.user, recorder.clone()).await;

        let result = handler(&fixture).handle(command(&fixture, "app1", "org1")).await;

        assert!(matches!(result, Err(CloudFoundryError::Validation(_))));
        assert!(recorder.calls().is_empty());
    }

    #[tokio::test]
    async fn empty_project_is_a_validation_error() {
        let fixture = Fixture::logged_in().await;

        let result = handler(&fixture).handle(command(&fixture, "  ", "org1/space1")).await;

        assert_eq!(
            result.unwrap_err(),
            CloudFoundryError::Validation(ValidationError::empty_field("project"))
        );
    }

    #[tokio::test]
    async fn unknown_project_is_rejected() {
        let fixture = Fixture::logged_in().await;

        let result = handler(&fixture)
            .handle(command(&fixture, "someone-elses-app", "org1/space1"))
            .await;

        assert_eq!(
            result.unwrap_err(),
            CloudFoundryError::UnknownProject("someone-elses-app".to_string())
        );
        assert!(fixture.platform.pushes().await.is_empty());
    }

    #[tokio::test]
    async fn push_failure_propagates_after_space_was_set() {
        let fixture = Fixture::new().await;
        let recorder = Arc::new(RecordingSession {
            logged_in: true,
            push_error: Some(PlatformError::push_failed("app1", "staging failed")),
            ..Default::default()
        });
        fixture.store.put(&fixture.user, recorder.clone()).await;

        let result = handler(&fixture).handle(command(&fixture, "app1", "org1/space1")).await;

        assert!(matches!(
            result,
            Err(CloudFoundryError::Platform(PlatformError::PushFailed { .. }))
        ));
        assert_eq!(recorder.calls()[0], "set_space:org1/space1");
    }

    #[tokio::test]
    async fn requires_login() {
        let fixture = Fixture::new().await;

        let result = handler(&fixture).handle(command(&fixture, "app1", "org1/space1")).await;

        assert_eq!(result.unwrap_err(), CloudFoundryError::NotLoggedIn);
    }
}
