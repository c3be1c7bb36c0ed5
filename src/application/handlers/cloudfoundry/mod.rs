//! Deploy controller handlers.
//!
//! One handler per route. Every handler except login resolves its
//! preconditions through [`DeployContext`] before touching a collaborator.

mod context;
mod error;
mod process_login;
mod show_app_log;
mod show_deployables;
mod show_profile;
mod trigger_deployment;

#[cfg(test)]
mod test_support;

pub use context::DeployContext;
pub use error::{CloudFoundryError, Recovery};
pub use process_login::{ProcessLoginCommand, ProcessLoginHandler, ProcessLoginResult};
pub use show_app_log::{AppLogView, ShowAppLogHandler, ShowAppLogQuery};
pub use show_deployables::{
    DeployablesView, ShowDeployablesHandler, ShowDeployablesQuery, NOTHING_TO_DEPLOY,
};
pub use show_profile::{ProfileView, ShowProfileHandler, ShowProfileQuery};
pub use trigger_deployment::{
    TriggerDeploymentCommand, TriggerDeploymentHandler, TriggerDeploymentResult,
};
