//! HTTP DTOs for the deploy controller.
//!
//! Views are rendered as `{ "view": <name>, "model": { ... } }`; model keys
//! are the attribute names the pages read.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::application::handlers::cloudfoundry::{AppLogView, DeployablesView, ProfileView};
use crate::domain::deployment::{DeploymentConfig, OrgSpace};

pub const DEPLOY_VIEW: &str = "cloudfoundry/deploy";
pub const PROFILE_VIEW: &str = "cloudfoundry";
pub const LOGIN_VIEW: &str = "cloudfoundry/login";
pub const APP_LOG_VIEW: &str = "cloudfoundry/app-log";

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Form posted to `deploy.do`. Missing fields fail validation in the handler.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeployForm {
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub space: Option<String>,
}

/// Query of `processLogin`.
#[derive(Debug, Default, Deserialize)]
pub struct LoginCredentials {
    #[serde(default)]
    pub cf_login: Option<String>,
    #[serde(default)]
    pub cf_password: Option<SecretString>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginPageQuery {
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppLogQuery {
    #[serde(default)]
    pub space: Option<String>,
    #[serde(default)]
    pub project: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A named view and its model.
#[derive(Debug, Clone, Serialize)]
pub struct ViewResponse<M> {
    pub view: &'static str,
    pub model: M,
}

impl<M: Serialize> ViewResponse<M> {
    pub fn new(view: &'static str, model: M) -> Self {
        Self { view, model }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployModel {
    pub user: Option<String>,
    pub projects: Vec<String>,
    pub spaces: Vec<String>,
    pub default_space: Option<String>,
    pub deployments: Vec<DeploymentConfig>,
    #[serde(rename = "error_message", skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl From<DeployablesView> for DeployModel {
    fn from(view: DeployablesView) -> Self {
        Self {
            user: view.user,
            projects: view.projects,
            spaces: space_names(&view.spaces),
            default_space: view.default_space.as_ref().map(ToString::to_string),
            deployments: view.deployments,
            error_message: view.error_message,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileModel {
    pub space: Option<String>,
    pub user: Option<String>,
    pub spaces: Vec<String>,
}

impl From<ProfileView> for ProfileModel {
    fn from(view: ProfileView) -> Self {
        Self {
            space: view.space.as_ref().map(ToString::to_string),
            user: view.user,
            spaces: space_names(&view.spaces),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppLogModel {
    pub org: String,
    pub space: String,
    pub app: String,
    pub routes: Vec<String>,
    pub flux_user: String,
    pub flux_host: String,
    #[serde(serialize_with = "expose_token")]
    pub flux_token: SecretString,
}

impl From<AppLogView> for AppLogModel {
    fn from(view: AppLogView) -> Self {
        Self {
            org: view.org,
            space: view.space,
            app: view.app,
            routes: view.routes,
            flux_user: view.flux_user,
            flux_host: view.flux_host,
            flux_token: view.flux_token,
        }
    }
}

// The app-log page opens its own Flux connection with this token.
fn expose_token<S: serde::Serializer>(token: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(token.expose_secret())
}

fn space_names(spaces: &[OrgSpace]) -> Vec<String> {
    spaces.iter().map(ToString::to_string).collect()
}
