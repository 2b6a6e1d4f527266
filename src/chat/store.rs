//! Session storage.
//!
//! Every session sits behind its own mutex, so read-modify-write on one id is
//! serialized while different ids never share a lock.

use moka::sync::Cache;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::info;

use super::session::{ConversationSession, Turn};
use crate::config::{SessionConfig, HISTORY_CAP};

pub trait SessionStore: Send + Sync {
    /// Snapshot of a session, without creating it.
    fn get(&self, id: &str) -> Option<ConversationSession>;

    /// Run `f` on the session (created on first use) under its lock.
    fn update<R>(&self, id: &str, f: impl FnOnce(&mut ConversationSession) -> R) -> R;

    fn append(&self, id: &str, turn: Turn) {
        self.update(id, |session| session.push(turn));
    }

    /// Returns whether the session existed.
    fn evict(&self, id: &str) -> bool;

    fn len(&self) -> u64;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn lock(session: &Mutex<ConversationSession>) -> MutexGuard<'_, ConversationSession> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Sessions in a moka cache with idle TTL and a capacity bound.
#[derive(Clone)]
pub struct InMemorySessionStore {
    cache: Cache<String, Arc<Mutex<ConversationSession>>>,
    history_cap: usize,
}

impl InMemorySessionStore {
    pub fn new(config: &SessionConfig, history_cap: usize) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.max_sessions)
            .time_to_idle(config.ttl)
            .build();
        Self { cache, history_cap }
    }

    fn entry(&self, id: &str) -> Arc<Mutex<ConversationSession>> {
        self.cache.get_with(id.to_string(), || {
            info!(session_id = id, "Session created");
            Arc::new(Mutex::new(ConversationSession::with_capacity(id, self.history_cap)))
        })
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new(&SessionConfig::default(), HISTORY_CAP)
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, id: &str) -> Option<ConversationSession> {
        self.cache.get(id).map(|session| lock(&session).clone())
    }

    fn update<R>(&self, id: &str, f: impl FnOnce(&mut ConversationSession) -> R) -> R {
        let session = self.entry(id);
        let mut guard = lock(&session);
        let result = f(&mut *guard);

        // Evicted while held: put it back unless a fresh session took the id
        let restored = self
            .cache
            .entry(id.to_string())
            .or_insert_with(|| Arc::clone(&session));
        if restored.is_fresh() {
            info!(session_id = id, "Session restored after concurrent eviction");
        }
        result
    }

    fn evict(&self, id: &str) -> bool {
        let existed = self.cache.remove(id).is_some();
        if existed {
            info!(session_id = id, "Session evicted");
        }
        existed
    }

    fn len(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }
}
