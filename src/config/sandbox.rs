//! Sandbox configuration
//!
//! Seed data for the in-memory platform and Flux directory the bundled
//! binary runs against.

use serde::Deserialize;

use super::auth::parse_pairs;
use super::error::ValidationError;
use crate::domain::deployment::OrgSpace;

/// Sandbox seed data
#[derive(Debug, Clone, Deserialize)]
pub struct SandboxConfig {
    /// Comma-separated `org/space` targets
    #[serde(default = "default_spaces")]
    pub spaces: String,

    /// Comma-separated `login:password` platform accounts
    pub accounts: Option<String>,

    /// Comma-separated Flux project names every user gets
    #[serde(default)]
    pub projects: Option<String>,

    /// Host reported for the Flux socket transport
    #[serde(default = "default_flux_host")]
    pub flux_host: String,

    /// Domain deployed apps get routes under
    #[serde(default = "default_app_domain")]
    pub app_domain: String,
}

impl SandboxConfig {
    pub fn spaces_list(&self) -> Result<Vec<OrgSpace>, ValidationError> {
        self.spaces
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| OrgSpace::parse(s).map_err(|_| ValidationError::InvalidSandboxSpace(s.to_string())))
            .collect()
    }

    pub fn account_pairs(&self) -> Result<Vec<(String, String)>, ValidationError> {
        parse_pairs(self.accounts.as_deref(), ValidationError::InvalidSandboxAccount)
    }

    pub fn projects_list(&self) -> Vec<String> {
        self.projects
            .as_deref()
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.spaces_list()?;
        self.account_pairs()?;
        Ok(())
    }
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            spaces: default_spaces(),
            accounts: None,
            projects: None,
            flux_host: default_flux_host(),
            app_domain: default_app_domain(),
        }
    }
}

fn default_spaces() -> String {
    "sandbox/development".to_string()
}

fn default_flux_host() -> String {
    "localhost:3000".to_string()
}

fn default_app_domain() -> String {
    "cfapps.io".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SandboxConfig::default();
        assert_eq!(config.spaces_list().unwrap()[0].to_string(), "sandbox/development");
        assert!(config.account_pairs().unwrap().is_empty());
        assert!(config.projects_list().is_empty());
    }

    #[test]
    fn test_rejects_bad_space() {
        let config = SandboxConfig {
            spaces: "good/space, bad".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidSandboxSpace("bad".to_string()))
        );
    }

    #[test]
    fn test_projects_list() {
        let config = SandboxConfig {
            projects: Some("app1, app2".to_string()),
            ..Default::default()
        };
        assert_eq!(config.projects_list(), vec!["app1", "app2"]);
    }
}
