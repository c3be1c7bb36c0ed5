//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates the deploy controller's use cases and
//! coordinates between ports. Handlers never see HTTP: they return view
//! data or a `CloudFoundryError` and leave navigation to the adapter.

pub mod handlers;

pub use handlers::cloudfoundry::{CloudFoundryError, Recovery};
