//! Session aggregate entity.

use serde::Serialize;

use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::scenario::ScenarioId;

/// One recorded (opinion, AI feedback) pair.
///
/// Entries are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversationEntry {
    user: String,
    ai: String,
    scenario_id: ScenarioId,
    created_at: Timestamp,
}

impl ConversationEntry {
    /// Records a new exchange.
    pub fn new(scenario_id: ScenarioId, user: impl Into<String>, ai: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            ai: ai.into(),
            scenario_id,
            created_at: Timestamp::now(),
        }
    }

    /// The opinion the user submitted.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// The facilitator feedback returned for it.
    pub fn ai(&self) -> &str {
        &self.ai
    }

    pub fn scenario_id(&self) -> ScenarioId {
        self.scenario_id
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}

/// Session aggregate - isolated conversation state for one browsing session.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `history` only grows; entries keep submission order and are never
///   removed, replaced, or reordered
/// - `last_seen` never precedes `created_at`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    id: SessionId,
    history: Vec<ConversationEntry>,
    created_at: Timestamp,
    last_seen: Timestamp,
}

impl Session {
    /// Creates an empty session.
    pub fn new(id: SessionId) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            history: Vec::new(),
            created_at: now,
            last_seen: now,
        }
    }

    /// Returns the session ID.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Returns the history in submission order.
    pub fn history(&self) -> &[ConversationEntry] {
        &self.history
    }

    /// Returns the number of recorded exchanges.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Returns when the session was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Last time the owning browser resumed or wrote to the session.
    pub fn last_seen(&self) -> &Timestamp {
        &self.last_seen
    }

    /// Marks the session as active now.
    pub fn touch(&mut self) {
        self.last_seen = Timestamp::now();
    }

    /// True when the session has seen no activity since `cutoff`.
    pub fn is_idle_since(&self, cutoff: &Timestamp) -> bool {
        self.last_seen.is_before(cutoff)
    }

    /// Appends an exchange to the end of the history.
    pub fn append(&mut self, entry: ConversationEntry) {
        self.history.push(entry);
        self.touch();
    }
}
