//! Authentication configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Bearer token configuration for the static token validator
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    /// Comma-separated `token:user_id` pairs
    pub tokens: Option<String>,
}

impl AuthConfig {
    /// Parse the configured token table.
    pub fn token_pairs(&self) -> Result<Vec<(String, String)>, ValidationError> {
        parse_pairs(self.tokens.as_deref(), ValidationError::InvalidAuthToken)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.token_pairs().map(|_| ())
    }
}

/// Parses `a:b, c:d` into pairs, rejecting entries with an empty side.
pub(super) fn parse_pairs(
    raw: Option<&str>,
    error: ValidationError,
) -> Result<Vec<(String, String)>, ValidationError> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.split_once(':') {
            Some((left, right)) if !left.trim().is_empty() && !right.trim().is_empty() => {
                Ok((left.trim().to_string(), right.trim().to_string()))
            }
            _ => Err(error.clone()),
        })
        .collect()
}
