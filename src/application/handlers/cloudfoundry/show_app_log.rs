//! ShowAppLogHandler - everything the app-log page needs to follow a
//! deployed project's log over Flux.

use std::sync::Arc;

use secrecy::SecretString;

use crate::domain::deployment::OrgSpace;
use crate::domain::foundation::{UserId, ValidationError};
use crate::ports::{MessagingClientProvider, SessionStore};

use super::{CloudFoundryError, DeployContext};

#[derive(Debug, Clone)]
pub struct ShowAppLogQuery {
    pub user_id: UserId,
    pub space: String,
    pub project: String,
}

#[derive(Debug, Clone)]
pub struct AppLogView {
    pub org: String,
    pub space: String,
    pub app: String,
    pub routes: Vec<String>,
    pub flux_user: String,
    pub flux_host: String,
    /// Handed to the page so it can open its own Flux connection.
    pub flux_token: SecretString,
}

pub struct ShowAppLogHandler {
    store: Arc<dyn SessionStore>,
    messaging: Arc<dyn MessagingClientProvider>,
}

impl ShowAppLogHandler {
    pub fn new(store: Arc<dyn SessionStore>, messaging: Arc<dyn MessagingClientProvider>) -> Self {
        Self { store, messaging }
    }

    pub async fn handle(&self, query: ShowAppLogQuery) -> Result<AppLogView, CloudFoundryError> {
        let ctx = DeployContext::resolve(self.store.as_ref(), self.messaging.as_ref(), &query.user_id).await?;

        let org_space = OrgSpace::parse(query.space.trim())?;
        let project = query.project.trim();
        if project.is_empty() {
            return Err(ValidationError::empty_field("project").into());
        }

        let connector = ctx.messaging.connector();
        let config = ctx.session.deployment_config(&connector, project).await?;
        let profile = ctx.messaging.user_profile().await?;
        let flux_token = ctx.messaging.access_token().await?;

        Ok(AppLogView {
            org: org_space.org().to_string(),
            space: org_space.space().to_string(),
            app: project.to_string(),
            routes: config.routes,
            flux_user: profile.login,
            flux_host: connector.host().to_string(),
            flux_token,
        })
    }
}
