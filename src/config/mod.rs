//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CF_DEPLOYER` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use flux_cf_deployer::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Deploying through {}", config.cloudfoundry.url);
//! ```

mod auth;
mod cloudfoundry;
mod error;
mod sandbox;
mod server;
mod sessions;

pub use auth::AuthConfig;
pub use cloudfoundry::CloudFoundryConfig;
pub use error::{ConfigError, ValidationError};
pub use sandbox::SandboxConfig;
pub use server::{Environment, LogFormat, ServerConfig};
pub use sessions::SessionStoreConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// development configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Cloud Foundry API base URL
    #[serde(default)]
    pub cloudfoundry: CloudFoundryConfig,

    /// Platform session store bounds
    #[serde(default)]
    pub sessions: SessionStoreConfig,

    /// Bearer token table
    #[serde(default)]
    pub auth: AuthConfig,

    /// Sandbox seed data
    #[serde(default)]
    pub sandbox: SandboxConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CF_DEPLOYER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CF_DEPLOYER__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `CF_DEPLOYER__CLOUDFOUNDRY__URL=...` -> `cloudfoundry.url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CF_DEPLOYER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.cloudfoundry.validate(&self.server.environment)?;
        self.sessions.validate()?;
        self.auth.validate()?;
        self.sandbox.validate()?;
        Ok(())
    }
}
