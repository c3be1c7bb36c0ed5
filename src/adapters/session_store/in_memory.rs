//! In-memory session store.
//!
//! Sessions live until the process restarts. Without a bound the map
//! grows with every identity that ever logged in, so the store accepts a
//! capacity: putting a new identity into a full store evicts the identity
//! whose session was put least recently.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::UserId;
use crate::ports::{PlatformSession, SessionStore};

struct Entry {
    session: Arc<dyn PlatformSession>,
    /// Monotonic put counter, used to find the eviction candidate.
    stamp: u64,
}

#[derive(Default)]
struct Inner {
    entries: HashMap<UserId, Entry>,
    /// Stamp -> identity, oldest first. Mirrors `entries` one to one.
    order: BTreeMap<u64, UserId>,
    next_stamp: u64,
}

/// Process-wide `UserId -> PlatformSession` map.
#[derive(Default)]
pub struct InMemorySessionStore {
    inner: RwLock<Inner>,
    max_sessions: Option<usize>,
}

impl InMemorySessionStore {
    /// Creates an unbounded store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding at most `max_sessions` identities.
    ///
    /// A capacity of zero is treated as one; configuration validation
    /// rejects zero before it gets here.
    pub fn with_capacity_limit(max_sessions: usize) -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
            max_sessions: Some(max_sessions.max(1)),
        }
    }

    pub fn max_sessions(&self) -> Option<usize> {
        self.max_sessions
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, user_id: &UserId) -> Option<Arc<dyn PlatformSession>> {
        self.inner
            .read()
            .await
            .entries
            .get(user_id)
            .map(|entry| entry.session.clone())
    }

    async fn put(&self, user_id: &UserId, session: Arc<dyn PlatformSession>) {
        let mut inner = self.inner.write().await;

        if let Some(previous) = inner.entries.get(user_id).map(|entry| entry.stamp) {
            inner.order.remove(&previous);
        } else if let Some(max) = self.max_sessions {
            if inner.entries.len() >= max {
                if let Some((_, evicted)) = inner.order.pop_first() {
                    inner.entries.remove(&evicted);
                    tracing::info!(user_id = %evicted, "Evicted platform session, store at capacity");
                }
            }
        }

        let stamp = inner.next_stamp;
        inner.next_stamp += 1;
        inner.order.insert(stamp, user_id.clone());
        inner
            .entries
            .insert(user_id.clone(), Entry { session, stamp });
    }

    async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }
}
