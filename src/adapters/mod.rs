//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the deploy controller to external systems:
//! - `auth` - bearer token validation
//! - `cloudfoundry` - platform sessions (in-memory sandbox)
//! - `flux` - per-user Flux connections (in-memory sandbox)
//! - `http` - axum routes, DTOs and middleware
//! - `session_store` - per-user platform session storage

pub mod auth;
pub mod cloudfoundry;
pub mod flux;
pub mod http;
pub mod session_store;
