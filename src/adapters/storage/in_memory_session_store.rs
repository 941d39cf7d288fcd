//! In-Memory Session Store Adapter
//!
//! Keeps every live debate session in a process-local map. Nothing survives a
//! restart. Sessions a browser abandons without ending are dropped by the idle
//! sweeper once they have been quiet for the configured span.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::session::{ConversationEntry, Session, SessionError};
use crate::ports::SessionStore;

/// In-memory storage for debate sessions
#[derive(Debug, Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, Session>>>,
}

impl InMemorySessionStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Drops every session with no activity within `max_idle`.
    ///
    /// Returns how many sessions were removed.
    pub async fn evict_idle(&self, max_idle: Duration) -> usize {
        let cutoff = Timestamp::ago(max_idle);
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_idle_since(&cutoff));
        let evicted = before - sessions.len();

        if evicted > 0 {
            tracing::info!(evicted, remaining = sessions.len(), "Evicted idle sessions");
        }
        evicted
    }

    /// Runs `evict_idle` every `every` until the returned task is aborted.
    pub fn spawn_idle_sweeper(&self, max_idle: Duration, every: Duration) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut ticker = interval(every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                store.evict_idle(max_idle).await;
            }
        })
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get_or_create(&self, id: Option<SessionId>) -> Session {
        let mut sessions = self.sessions.write().await;

        if let Some(existing) = id.and_then(|id| sessions.get_mut(&id)) {
            existing.touch();
            return existing.clone();
        }

        let session = Session::new(SessionId::new());
        sessions.insert(*session.id(), session.clone());
        tracing::info!(session_id = %session.id(), "Session created");
        session
    }

    async fn find(&self, id: &SessionId) -> Option<Session> {
        self.sessions.read().await.get(id).cloned()
    }

    async fn append_entry(
        &self,
        id: &SessionId,
        entry: ConversationEntry,
    ) -> Result<Session, SessionError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(id).ok_or(SessionError::NotFound(*id))?;
        session.append(entry);
        Ok(session.clone())
    }

    async fn end(&self, id: &SessionId) -> Result<(), SessionError> {
        let removed = self.sessions.write().await.remove(id);
        match removed {
            Some(session) => {
                tracing::info!(session_id = %id, entries = session.len(), "Session ended");
                Ok(())
            }
            None => Err(SessionError::NotFound(*id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scenario::ScenarioId;

    fn entry(user: &str, ai: &str) -> ConversationEntry {
        ConversationEntry::new(ScenarioId::MuseumDay, user, ai)
    }

    #[tokio::test]
    async fn get_or_create_without_id_creates_new_session() {
        let store = InMemorySessionStore::new();

        let a = store.get_or_create(None).await;
        let b = store.get_or_create(None).await;

        assert_ne!(a.id(), b.id());
        assert!(store.find(a.id()).await.is_some());
        assert!(store.find(b.id()).await.is_some());
    }

    #[tokio::test]
    async fn get_or_create_is_idempotent_for_live_id() {
        let store = InMemorySessionStore::new();
        let first = store.get_or_create(None).await;

        let again = store.get_or_create(Some(*first.id())).await;

        assert_eq!(again.id(), first.id());
        assert!(!again.last_seen().is_before(first.last_seen()));
    }

    #[tokio::test]
    async fn get_or_create_with_unknown_id_issues_fresh_id() {
        let store = InMemorySessionStore::new();
        let stale = SessionId::new();

        let session = store.get_or_create(Some(stale)).await;

        assert_ne!(*session.id(), stale);
        assert!(store.find(&stale).await.is_none());
    }

    #[tokio::test]
    async fn append_entry_keeps_order() {
        let store = InMemorySessionStore::new();
        let id = *store.get_or_create(None).await.id();

        store.append_entry(&id, entry("one", "1")).await.unwrap();
        store.append_entry(&id, entry("two", "2")).await.unwrap();
        let session = store.append_entry(&id, entry("three", "3")).await.unwrap();

        let users: Vec<&str> = session.history().iter().map(|e| e.user()).collect();
        assert_eq!(users, vec!["one", "two", "three"]);
        assert_eq!(store.find(&id).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn append_entry_to_unknown_session_fails() {
        let store = InMemorySessionStore::new();
        let id = SessionId::new();

        let result = store.append_entry(&id, entry("x", "y")).await;

        assert_eq!(result.unwrap_err(), SessionError::NotFound(id));
    }

    #[tokio::test]
    async fn sessions_do_not_share_history() {
        let store = InMemorySessionStore::new();
        let a = *store.get_or_create(None).await.id();
        let b = *store.get_or_create(None).await.id();

        store.append_entry(&a, entry("only in a", "fa")).await.unwrap();

        assert_eq!(store.find(&a).await.unwrap().len(), 1);
        assert!(store.find(&b).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn end_removes_session() {
        let store = InMemorySessionStore::new();
        let id = *store.get_or_create(None).await.id();

        store.end(&id).await.unwrap();

        assert!(store.find(&id).await.is_none());
        assert_eq!(store.end(&id).await.unwrap_err(), SessionError::NotFound(id));
    }

    #[tokio::test]
    async fn idle_session_is_evicted() {
        let store = InMemorySessionStore::new();
        let id = *store.get_or_create(None).await.id();
        tokio::time::sleep(Duration::from_millis(20)).await;

        let evicted = store.evict_idle(Duration::from_millis(5)).await;

        assert_eq!(evicted, 1);
        assert!(store.find(&id).await.is_none());
    }

    #[tokio::test]
    async fn recently_active_session_survives_eviction() {
        let store = InMemorySessionStore::new();
        let quiet = *store.get_or_create(None).await.id();
        let active = *store.get_or_create(None).await.id();
        tokio::time::sleep(Duration::from_millis(50)).await;

        store.append_entry(&active, entry("still here", "ok")).await.unwrap();
        let evicted = store.evict_idle(Duration::from_millis(25)).await;

        assert_eq!(evicted, 1);
        assert!(store.find(&quiet).await.is_none());
        assert_eq!(store.find(&active).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn resuming_counts_as_activity() {
        let store = InMemorySessionStore::new();
        let id = *store.get_or_create(None).await.id();
        tokio::time::sleep(Duration::from_millis(50)).await;

        store.get_or_create(Some(id)).await;
        store.evict_idle(Duration::from_millis(25)).await;

        assert!(store.find(&id).await.is_some());
    }

    #[tokio::test]
    async fn sweeper_removes_expired_sessions() {
        let store = InMemorySessionStore::new();
        let id = *store.get_or_create(None).await.id();

        let sweeper = store.spawn_idle_sweeper(Duration::from_millis(10), Duration::from_millis(10));
        tokio::time::sleep(Duration::from_millis(100)).await;
        sweeper.abort();

        assert!(store.find(&id).await.is_none());
    }
}
