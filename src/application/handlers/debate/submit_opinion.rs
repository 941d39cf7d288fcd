//! SubmitOpinionHandler - Command handler that turns an opinion into facilitator feedback.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::debate::{FacilitatorPrompt, MAX_OUTPUT_TOKENS, TEMPERATURE};
use crate::domain::foundation::SessionId;
use crate::domain::scenario::{scenario, ScenarioId};
use crate::domain::session::{ConversationEntry, Session, SessionError};
use crate::ports::{
    AIError, AIProvider, CompletionRequest, MessageRole, RequestMetadata, SessionStore,
};

use super::DebateError;

/// Command to submit an opinion on a scenario.
#[derive(Debug, Clone)]
pub struct SubmitOpinionCommand {
    pub session_id: SessionId,
    pub scenario_id: ScenarioId,
    pub opinion: String,
}

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct SubmitOpinionResult {
    /// Trimmed feedback text that was recorded.
    pub feedback: String,
    /// Session state after the append.
    pub session: Session,
}

/// Handler for opinion submissions.
pub struct SubmitOpinionHandler {
    ai_provider: Arc<dyn AIProvider>,
    store: Arc<dyn SessionStore>,
}

impl SubmitOpinionHandler {
    pub fn new(ai_provider: Arc<dyn AIProvider>, store: Arc<dyn SessionStore>) -> Self {
        Self { ai_provider, store }
    }

    pub async fn handle(&self, cmd: SubmitOpinionCommand) -> Result<SubmitOpinionResult, DebateError> {
        // 1. Reject empty opinions before touching the provider
        if cmd.opinion.is_empty() {
            return Err(DebateError::EmptyOpinion);
        }

        // 2. Session must be live
        if self.store.find(&cmd.session_id).await.is_none() {
            return Err(SessionError::not_found(cmd.session_id).into());
        }

        // 3. Generate feedback
        let prompt = FacilitatorPrompt::new(scenario(cmd.scenario_id), &cmd.opinion);
        let request = build_request(cmd.session_id, prompt);
        let trace_id = request.metadata.trace_id.clone();

        let response = self.ai_provider.complete(request).await.map_err(|e| {
            tracing::warn!(
                session_id = %cmd.session_id,
                scenario = %cmd.scenario_id,
                trace_id = %trace_id,
                error = %e,
                retryable = e.is_retryable(),
                "Feedback generation failed"
            );
            DebateError::Generation(e)
        })?;

        tracing::debug!(
            session_id = %cmd.session_id,
            trace_id = %trace_id,
            model = %response.model,
            total_tokens = response.usage.total_tokens,
            "Feedback generated"
        );
        if response.finish_reason.is_truncated() {
            tracing::warn!(
                session_id = %cmd.session_id,
                trace_id = %trace_id,
                finish_reason = ?response.finish_reason,
                "Feedback did not finish normally"
            );
        }

        // 4. A blank reply is a failed generation, not an exchange
        let feedback = response.content.trim().to_string();
        if feedback.is_empty() {
            tracing::warn!(
                session_id = %cmd.session_id,
                trace_id = %trace_id,
                "Provider returned blank feedback"
            );
            return Err(DebateError::Generation(AIError::parse("Empty response")));
        }

        // 5. Record the exchange
        let entry = ConversationEntry::new(cmd.scenario_id, cmd.opinion, feedback.clone());
        let session = self.store.append_entry(&cmd.session_id, entry).await?;

        Ok(SubmitOpinionResult { feedback, session })
    }
}

/// Builds the two-message completion request for a prompt.
fn build_request(session_id: SessionId, prompt: FacilitatorPrompt) -> CompletionRequest {
    CompletionRequest::new(RequestMetadata::new(session_id, Uuid::new_v4().to_string()))
        .with_message(MessageRole::System, prompt.system)
        .with_message(MessageRole::User, prompt.user)
        .with_max_tokens(MAX_OUTPUT_TOKENS)
        .with_temperature(TEMPERATURE)
}
