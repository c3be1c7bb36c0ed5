//! ShowProfileHandler - the user's platform account and spaces.

use std::sync::Arc;

use crate::domain::deployment::OrgSpace;
use crate::domain::foundation::UserId;
use crate::ports::{MessagingClientProvider, SessionStore};

use super::{CloudFoundryError, DeployContext};

#[derive(Debug, Clone)]
pub struct ShowProfileQuery {
    pub user_id: UserId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub space: Option<OrgSpace>,
    pub user: Option<String>,
    pub spaces: Vec<OrgSpace>,
}

pub struct ShowProfileHandler {
    store: Arc<dyn SessionStore>,
    messaging: Arc<dyn MessagingClientProvider>,
}

impl ShowProfileHandler {
    pub fn new(store: Arc<dyn SessionStore>, messaging: Arc<dyn MessagingClientProvider>) -> Self {
        Self { store, messaging }
    }

    pub async fn handle(&self, query: ShowProfileQuery) -> Result<ProfileView, CloudFoundryError> {
        let ctx = DeployContext::resolve(self.store.as_ref(), self.messaging.as_ref(), &query.user_id).await?;

        Ok(ProfileView {
            space: ctx.session.space().await,
            user: ctx.session.user().await,
            spaces: ctx.session.spaces(&ctx.messaging.connector()).await?,
        })
    }
}
