//! Session store port - per-user platform sessions.
//!
//! The only state shared between requests. An entry exists only after a
//! successful login; a missing entry and an entry whose session reports
//! logged-out both mean the user must (re-)authenticate.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::foundation::UserId;
use crate::ports::PlatformSession;

/// Maps identities to their platform sessions.
///
/// # Contract
///
/// - `get` is a pure lookup and never fails
/// - `put` inserts or replaces; a later `get` for the same identity
///   returns the new session
/// - Concurrent access from different identities never corrupts another
///   identity's entry; for the same identity the last writer wins
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, user_id: &UserId) -> Option<Arc<dyn PlatformSession>>;

    async fn put(&self, user_id: &UserId, session: Arc<dyn PlatformSession>);

    /// Number of identities with a stored session.
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn SessionStore) {}
        fn _assert_send_sync<T: Send + Sync + ?Sized>() {}
        _assert_send_sync::<Arc<dyn SessionStore>>();
    }
}
