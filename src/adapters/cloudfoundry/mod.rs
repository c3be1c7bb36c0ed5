//! Cloud Foundry platform adapters.
//!
//! - `in_memory` - sandbox platform used by the bundled binary and tests

mod in_memory;

pub use in_memory::{InMemoryPlatform, InMemoryPlatformConnector, InMemoryPlatformSession, PushRecord};
