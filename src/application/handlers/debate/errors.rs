//! Errors surfaced by the debate handlers.

use thiserror::Error;

use crate::domain::session::SessionError;
use crate::ports::AIError;

/// Outcome kinds a submission can end in other than success.
///
/// None of these is fatal: the caller shows a notice and the user may submit
/// again.
#[derive(Debug, Error)]
pub enum DebateError {
    /// Opinion text was empty; generation was not attempted.
    #[error("의견을 입력해주세요.")]
    EmptyOpinion,

    /// Scenario slug did not match the catalog.
    #[error("unknown scenario: {0}")]
    UnknownScenario(String),

    #[error(transparent)]
    Session(#[from] SessionError),

    /// The completion service failed; history is unchanged.
    #[error("OpenAI API 호출 중 오류가 발생했습니다: {0}")]
    Generation(#[from] AIError),
}

impl DebateError {
    /// Stable machine-readable code for API clients.
    pub fn code(&self) -> &'static str {
        match self {
            DebateError::EmptyOpinion => "VALIDATION_WARNING",
            DebateError::UnknownScenario(_) => "SCENARIO_NOT_FOUND",
            DebateError::Session(SessionError::NotFound(_)) => "SESSION_NOT_FOUND",
            DebateError::Session(SessionError::InvalidId(_)) => "BAD_REQUEST",
            DebateError::Generation(_) => "GENERATION_FAILED",
        }
    }
}
