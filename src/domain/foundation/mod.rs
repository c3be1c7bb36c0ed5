//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, authentication types and validation errors
//! that the deployment domain and the ports build on.

mod auth;
mod errors;
mod ids;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::ValidationError;
pub use ids::UserId;
