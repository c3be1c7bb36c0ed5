//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (identifiers, auth types, errors)
//! - `deployment` - Deployment targets and per-project deployment configs

pub mod deployment;
pub mod foundation;
