//! Static token table validator.
//!
//! Maps opaque bearer tokens to identities. The bundled binary loads the
//! table from `CF_DEPLOYER__AUTH__TOKENS`; tests build it directly.
//!
//! # Example
//!
//! ```ignore
//! use flux_cf_deployer::adapters::auth::StaticTokenValidator;
//!
//! let validator = StaticTokenValidator::new().with_test_user("token-1", "bob");
//! let user = validator.validate("token-1").await?;
//! assert_eq!(user.id.as_str(), "bob");
//! ```

use std::collections::HashMap;

use async_trait::async_trait;

use crate::config::{AuthConfig, ValidationError};
use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::TokenValidator;

/// Token validator backed by a fixed table.
///
/// Tokens not in the table return `InvalidToken`.
#[derive(Debug, Default, Clone)]
pub struct StaticTokenValidator {
    tokens: HashMap<String, AuthenticatedUser>,
}

impl StaticTokenValidator {
    /// Creates an empty validator that rejects every token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the table from the configured `token:user_id` pairs.
    pub fn from_config(config: &AuthConfig) -> Result<Self, ValidationError> {
        let mut validator = Self::new();
        for (token, user_id) in config.token_pairs()? {
            let user_id = UserId::new(user_id).map_err(|_| ValidationError::InvalidAuthToken)?;
            let user = AuthenticatedUser::new(user_id, None);
            validator.tokens.insert(token, user);
        }
        Ok(validator)
    }

    /// Adds a valid token that maps to a user.
    pub fn with_user(mut self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.tokens.insert(token.into(), user);
        self
    }

    /// Adds a valid token for a user with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `user_id` is empty.
    pub fn with_test_user(self, token: impl Into<String>, user_id: impl Into<String>) -> Self {
        let user_id = user_id.into();
        let user = AuthenticatedUser::new(
            UserId::new(&user_id).expect("test user id must not be empty"),
            Some(format!("Test User {}", user_id)),
        );
        self.with_user(token, user)
    }

    /// Returns the number of registered tokens.
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}

#[async_trait]
impl TokenValidator for StaticTokenValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        self.tokens
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}
