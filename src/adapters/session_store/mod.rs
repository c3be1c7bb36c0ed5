//! Session store adapters.
//!
//! - `in_memory` - process-local store, optionally bounded

mod in_memory;

pub use in_memory::InMemorySessionStore;
