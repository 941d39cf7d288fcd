//! EndSessionHandler - Command handler that tears a session down.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::session::SessionError;
use crate::ports::SessionStore;

/// Command to end a session and drop its history.
#[derive(Debug, Clone)]
pub struct EndSessionCommand {
    pub session_id: SessionId,
}

/// Handler for ending sessions.
pub struct EndSessionHandler {
    store: Arc<dyn SessionStore>,
}

impl EndSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: EndSessionCommand) -> Result<(), SessionError> {
        self.store.end(&cmd.session_id).await
    }
}
