//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the deploy controller and the outside world. Adapters implement these
//! ports; tests substitute their own doubles.
//!
//! ## Collaborator Ports
//!
//! - `PlatformSession` / `PlatformConnector` - Cloud Foundry session lifecycle
//! - `MessagingClient` / `MessagingClientProvider` - the user's Flux connection
//!
//! ## Infrastructure Ports
//!
//! - `SessionStore` - per-user platform sessions shared across requests
//! - `TokenValidator` - resolves the caller's identity from a bearer token

mod messaging_client;
mod platform_session;
mod session_store;
mod token_validator;

pub use messaging_client::{
    MessagingClient, MessagingClientProvider, MessagingConnector, MessagingError, UserProfile,
};
pub use platform_session::{PlatformConnector, PlatformError, PlatformSession};
pub use session_store::SessionStore;
pub use token_validator::TokenValidator;
