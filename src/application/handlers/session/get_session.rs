//! GetSessionHandler - Query handler for retrieving a session's history.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::session::{Session, SessionError};
use crate::ports::SessionStore;

/// Query to get a session by ID.
#[derive(Debug, Clone)]
pub struct GetSessionQuery {
    pub session_id: SessionId,
}

/// Handler for retrieving sessions.
pub struct GetSessionHandler {
    store: Arc<dyn SessionStore>,
}

impl GetSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetSessionQuery) -> Result<Session, SessionError> {
        self.store
            .find(&query.session_id)
            .await
            .ok_or_else(|| SessionError::not_found(query.session_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionStore;

    #[tokio::test]
    async fn returns_live_session() {
        let store = Arc::new(InMemorySessionStore::new());
        let id = *store.get_or_create(None).await.id();
        let handler = GetSessionHandler::new(store);

        let session = handler.handle(GetSessionQuery { session_id: id }).await.unwrap();

        assert_eq!(*session.id(), id);
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let handler = GetSessionHandler::new(Arc::new(InMemorySessionStore::new()));
        let id = SessionId::new();

        let err = handler.handle(GetSessionQuery { session_id: id }).await.unwrap_err();

        assert_eq!(err, SessionError::NotFound(id));
    }
}
