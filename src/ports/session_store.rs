//! Session store port.
//!
//! Defines the contract for holding per-browser debate sessions. Sessions live
//! only as long as the process (or until ended) and are never shared.
//!
//! # Design
//!
//! - **Isolated**: A session is reachable only through its own id
//! - **Append-only history**: Entries are added at the end, never removed
//! - **Idempotent creation**: `get_or_create` with a live id returns that session

use crate::domain::foundation::SessionId;
use crate::domain::session::{ConversationEntry, Session, SessionError};
use async_trait::async_trait;

/// Store port for ephemeral debate sessions.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the live session for `id`, or creates a fresh one.
    ///
    /// A missing or unknown id yields a new session with a new id.
    async fn get_or_create(&self, id: Option<SessionId>) -> Session;

    /// Find a session by its ID.
    ///
    /// Returns `None` if not found.
    async fn find(&self, id: &SessionId) -> Option<Session>;

    /// Append an exchange to a session's history.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the session has ended or never existed
    async fn append_entry(
        &self,
        id: &SessionId,
        entry: ConversationEntry,
    ) -> Result<Session, SessionError>;

    /// End a session, discarding its history.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the session doesn't exist
    async fn end(&self, id: &SessionId) -> Result<(), SessionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn session_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn SessionStore) {}
    }
}
