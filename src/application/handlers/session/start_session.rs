//! StartSessionHandler - Command handler for get-or-create of a debate session.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::session::Session;
use crate::ports::SessionStore;

/// Command to resume a session, or start one when none is live.
#[derive(Debug, Clone, Default)]
pub struct StartSessionCommand {
    /// Id the client already holds, if any.
    pub session_id: Option<SessionId>,
}

/// Handler for starting or resuming sessions.
pub struct StartSessionHandler {
    store: Arc<dyn SessionStore>,
}

impl StartSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: StartSessionCommand) -> Session {
        self.store.get_or_create(cmd.session_id).await
    }
}
