//! Authentication adapters.
//!
//! Implementations of the `TokenValidator` port:
//!
//! - `static_tokens` - fixed token table, loaded from configuration

mod static_tokens;

pub use static_tokens::StaticTokenValidator;
