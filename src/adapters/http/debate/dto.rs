//! HTTP DTOs for debate endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::domain::scenario::Scenario;
use crate::domain::session::{ConversationEntry, Session};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to resume or start a session.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StartSessionRequest {
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Request to submit an opinion.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitOpinionRequest {
    pub scenario_id: String,
    #[serde(default)]
    pub opinion: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Scenario as shown in the read-only panel.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResponse {
    pub id: String,
    pub display_name: String,
    pub description: String,
    pub options: Vec<String>,
    pub resources: Vec<String>,
}

impl From<&Scenario> for ScenarioResponse {
    fn from(scenario: &Scenario) -> Self {
        Self {
            id: scenario.id.to_string(),
            display_name: scenario.display_name.to_string(),
            description: scenario.description.to_string(),
            options: scenario.options.iter().map(|s| s.to_string()).collect(),
            resources: scenario.resources.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// All scenarios in selector order.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioListResponse {
    pub items: Vec<ScenarioResponse>,
}

/// One recorded exchange.
#[derive(Debug, Clone, Serialize)]
pub struct EntryResponse {
    pub user: String,
    pub ai: String,
    pub scenario_id: String,
    pub created_at: String,
}

impl From<&ConversationEntry> for EntryResponse {
    fn from(entry: &ConversationEntry) -> Self {
        Self {
            user: entry.user().to_string(),
            ai: entry.ai().to_string(),
            scenario_id: entry.scenario_id().to_string(),
            created_at: entry.created_at().to_rfc3339(),
        }
    }
}

fn history_of(session: &Session) -> Vec<EntryResponse> {
    session.history().iter().map(Into::into).collect()
}

/// Session with its full history in submission order.
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub session_id: String,
    pub history: Vec<EntryResponse>,
    pub created_at: String,
}

impl From<&Session> for SessionResponse {
    fn from(session: &Session) -> Self {
        Self {
            session_id: session.id().to_string(),
            history: history_of(session),
            created_at: session.created_at().to_rfc3339(),
        }
    }
}

/// Latest feedback plus the updated history.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitOpinionResponse {
    pub feedback: String,
    pub history: Vec<EntryResponse>,
}

impl SubmitOpinionResponse {
    pub fn new(feedback: String, session: &Session) -> Self {
        Self {
            feedback,
            history: history_of(session),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }
}
