//! Authentication types for the domain layer.
//!
//! The deployer does not authenticate users itself. The surrounding
//! authentication layer validates a bearer token through the
//! `TokenValidator` port and hands the controller an `AuthenticatedUser`,
//! whose `id` keys the per-user platform session.

use super::UserId;
use thiserror::Error;

/// Authenticated principal resolved from a bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The unique user identifier from the auth layer.
    pub id: UserId,

    /// Display name if the auth layer knows one.
    pub display_name: Option<String>,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    pub fn new(id: UserId, display_name: Option<String>) -> Self {
        Self { id, display_name }
    }
}

/// Errors that can occur while resolving the caller's identity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or unknown.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The authentication service is unavailable.
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user_id() -> UserId {
        UserId::new("user-123").unwrap()
    }

    #[test]
    fn new_keeps_id_and_display_name() {
        let user = AuthenticatedUser::new(test_user_id(), Some("Alice".to_string()));
        assert_eq!(user.id.as_str(), "user-123");
        assert_eq!(user.display_name.as_deref(), Some("Alice"));
    }

    #[test]
    fn auth_error_service_unavailable_displays_message() {
        let err = AuthError::ServiceUnavailable("Connection refused".to_string());
        assert_eq!(err.to_string(), "Auth service unavailable: Connection refused");
    }
}
