//! Cloud Foundry platform configuration

use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Platform API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CloudFoundryConfig {
    /// Base URL new platform sessions are bound to
    #[serde(default = "default_url")]
    pub url: String,
}

impl CloudFoundryConfig {
    /// Validate platform configuration
    ///
    /// In production, requires HTTPS for the API URL.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let is_https = self.url.starts_with("https://");
        if !is_https && !self.url.starts_with("http://") {
            return Err(ValidationError::InvalidPlatformUrl);
        }
        if *environment == Environment::Production && !is_https {
            return Err(ValidationError::PlatformUrlMustBeHttps);
        }
        Ok(())
    }
}

impl Default for CloudFoundryConfig {
    fn default() -> Self {
        Self { url: default_url() }
    }
}

fn default_url() -> String {
    "https://api.run.pivotal.io/".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_url() {
        assert_eq!(CloudFoundryConfig::default().url, "https://api.run.pivotal.io/");
    }

    #[test]
    fn test_rejects_non_http_url() {
        let config = CloudFoundryConfig {
            url: "ftp://api.example.com".to_string(),
        };
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::InvalidPlatformUrl)
        );
    }

    #[test]
    fn test_http_allowed_outside_production() {
        let config = CloudFoundryConfig {
            url: "http://localhost:9000/".to_string(),
        };
        assert!(config.validate(&Environment::Development).is_ok());
        assert_eq!(
            config.validate(&Environment::Production),
            Err(ValidationError::PlatformUrlMustBeHttps)
        );
    }
}
