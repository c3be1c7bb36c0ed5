//! Flux messaging adapters.
//!
//! - `in_memory` - sandbox Flux directory with per-user clients

mod in_memory;

pub use in_memory::{InMemoryFluxClient, InMemoryFluxDirectory};
