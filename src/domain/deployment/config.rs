//! Deployment configuration for one project.

use serde::{Deserialize, Serialize};

use super::OrgSpace;

/// How a Flux project maps to a platform app.
///
/// Built fresh for every request from what the platform reports; the
/// deployer never persists it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentConfig {
    /// Flux project name, which doubles as the app name.
    pub project: String,

    /// Target space, if the project has one.
    #[serde(rename = "cfOrgSpace")]
    pub org_space: Option<OrgSpace>,

    /// Hostnames mapped to the app once it is deployed.
    #[serde(default)]
    pub routes: Vec<String>,
}

impl DeploymentConfig {
    /// Creates a config for a project with no target and no routes.
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            org_space: None,
            routes: Vec::new(),
        }
    }

    /// Sets the target space.
    pub fn with_org_space(mut self, org_space: OrgSpace) -> Self {
        self.org_space = Some(org_space);
        self
    }

    /// Sets the routes.
    pub fn with_routes(mut self, routes: Vec<String>) -> Self {
        self.routes = routes;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_config_has_no_target_or_routes() {
        let config = DeploymentConfig::new("app1");
        assert_eq!(config.project, "app1");
        assert!(config.org_space.is_none());
        assert!(config.routes.is_empty());
    }

    #[test]
    fn builders_set_target_and_routes() {
        let config = DeploymentConfig::new("app1")
            .with_org_space(OrgSpace::parse("org1/space1").unwrap())
            .with_routes(vec!["app1.cfapps.io".to_string()]);

        assert_eq!(config.org_space.unwrap().to_string(), "org1/space1");
        assert_eq!(config.routes, vec!["app1.cfapps.io"]);
    }

    #[test]
    fn serializes_with_view_field_names() {
        let config = DeploymentConfig::new("app1")
            .with_org_space(OrgSpace::parse("org1/space1").unwrap());

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["project"], "app1");
        assert_eq!(json["cfOrgSpace"], "org1/space1");
        assert_eq!(json["routes"], serde_json::json!([]));
    }
}
