//! Errors of the deploy controller and how the user recovers from them.

use thiserror::Error;

use crate::domain::foundation::ValidationError;
use crate::ports::{MessagingError, PlatformError};

const FALLBACK_MESSAGE: &str = "Unexpected error talking to Cloud Foundry";

/// Everything that can stop a deploy controller request.
///
/// None of these is fatal: each maps to a navigational step through
/// [`CloudFoundryError::recovery`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CloudFoundryError {
    /// No platform session, or the stored one reports logged-out.
    #[error("Not logged in to Cloud Foundry")]
    NotLoggedIn,

    /// The user has no Flux connection.
    #[error("Not signed in to Flux")]
    MessagingUnavailable,

    /// The requested project is not one of the user's Flux projects.
    #[error("Unknown Flux project '{0}'")]
    UnknownProject(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Messaging(#[from] MessagingError),
}

/// Where the user is sent after a failed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recovery {
    /// Plain login page.
    Login,
    /// Flux sign-in.
    MessagingSignIn,
    /// Login page showing why the request failed.
    LoginWithMessage(String),
}

impl CloudFoundryError {
    /// Navigational step for this error.
    pub fn recovery(&self) -> Recovery {
        match self {
            CloudFoundryError::NotLoggedIn => Recovery::Login,
            CloudFoundryError::MessagingUnavailable => Recovery::MessagingSignIn,
            other => Recovery::LoginWithMessage(other.user_message()),
        }
    }

    /// Human-readable, never empty.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            message
        }
    }

    /// True when the failure came from a collaborator rather than from
    /// a missing precondition or bad input.
    pub fn is_collaborator_failure(&self) -> bool {
        matches!(
            self,
            CloudFoundryError::Platform(_) | CloudFoundryError::Messaging(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preconditions_recover_without_message() {
        assert_eq!(CloudFoundryError::NotLoggedIn.recovery(), Recovery::Login);
        assert_eq!(
            CloudFoundryError::MessagingUnavailable.recovery(),
            Recovery::MessagingSignIn
        );
    }

    #[test]
    fn collaborator_errors_recover_with_their_message() {
        let err: CloudFoundryError = PlatformError::unavailable("deployer service down").into();
        assert_eq!(
            err.recovery(),
            Recovery::LoginWithMessage("Cloud Foundry unavailable: deployer service down".into())
        );
        assert!(err.is_collaborator_failure());
    }

    #[test]
    fn validation_errors_recover_with_message() {
        let err: CloudFoundryError = ValidationError::empty_field("project").into();
        assert_eq!(
            err.recovery(),
            Recovery::LoginWithMessage("Field 'project' cannot be empty".into())
        );
        assert!(!err.is_collaborator_failure());
    }

    #[test]
    fn user_message_is_never_empty() {
        let err: CloudFoundryError = PlatformError::Remote(String::new()).into();
        assert!(!err.user_message().is_empty());

        let err: CloudFoundryError = MessagingError::Remote("   ".into()).into();
        assert!(!err.user_message().trim().is_empty());
    }
}
