//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Cloud Foundry URL must be an http(s) URL")]
    InvalidPlatformUrl,

    #[error("Cloud Foundry URL must use HTTPS in production")]
    PlatformUrlMustBeHttps,

    #[error("Session store capacity must be greater than zero")]
    InvalidSessionCapacity,

    #[error("Auth tokens must be comma-separated 'token:user_id' pairs")]
    InvalidAuthToken,

    #[error("Sandbox accounts must be comma-separated 'login:password' pairs")]
    InvalidSandboxAccount,

    #[error("Invalid sandbox space '{0}', expected 'org/space'")]
    InvalidSandboxSpace(String),
}
