//! ShowDeployablesHandler - lists the user's Flux projects with their
//! deployment state and the spaces they can be pushed to.

use std::sync::Arc;

use crate::domain::deployment::{DeploymentConfig, OrgSpace};
use crate::domain::foundation::UserId;
use crate::ports::{MessagingClientProvider, SessionStore};

use super::{CloudFoundryError, DeployContext};

/// Shown on the deploy page when the user has no Flux projects.
pub const NOTHING_TO_DEPLOY: &str = "Nothing to deploy: You don't have any Flux projects!";

#[derive(Debug, Clone)]
pub struct ShowDeployablesQuery {
    pub user_id: UserId,
}

/// Everything the deploy page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployablesView {
    pub user: Option<String>,
    pub projects: Vec<String>,
    pub spaces: Vec<OrgSpace>,
    pub default_space: Option<OrgSpace>,
    pub deployments: Vec<DeploymentConfig>,
    /// Informational only; an empty project list is not a failure.
    pub error_message: Option<String>,
}

pub struct ShowDeployablesHandler {
    store: Arc<dyn SessionStore>,
    messaging: Arc<dyn MessagingClientProvider>,
}

impl ShowDeployablesHandler {
    pub fn new(store: Arc<dyn SessionStore>, messaging: Arc<dyn MessagingClientProvider>) -> Self {
        Self { store, messaging }
    }

    pub async fn handle(&self, query: ShowDeployablesQuery) -> Result<DeployablesView, CloudFoundryError> {
        let ctx = DeployContext::resolve(self.store.as_ref(), self.messaging.as_ref(), &query.user_id).await?;
        let connector = ctx.messaging.connector();

        let default_space = ctx.session.space().await;
        let projects = ctx.messaging.projects().await?;
        let spaces = ctx.session.spaces(&connector).await?;
        let user = ctx.session.user().await;

        tracing::debug!(
            user_id = %query.user_id,
            projects = projects.len(),
            spaces = spaces.len(),
            "Listing deployable projects"
        );

        let mut deployments = Vec::with_capacity(projects.len());
        for project in &projects {
            deployments.push(ctx.session.deployment_config(&connector, project).await?);
        }

        let error_message = projects.is_empty().then(|| NOTHING_TO_DEPLOY.to_string());

        Ok(DeployablesView {
            user,
            projects,
            spaces,
            default_space,
            deployments,
            error_message,
        })
    }
}
