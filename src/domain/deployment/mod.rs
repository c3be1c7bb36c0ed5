//! Deployment domain - what gets pushed where.
//!
//! - `OrgSpace` - validated `"org/space"` deployment target
//! - `DeploymentConfig` - how one Flux project maps to a platform app

mod config;
mod org_space;

pub use config::DeploymentConfig;
pub use org_space::OrgSpace;
