//! HTTP handlers for scenario, session, and opinion endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::{
    DebateError, EndSessionCommand, EndSessionHandler, GetSessionHandler, GetSessionQuery,
    StartSessionCommand, StartSessionHandler, SubmitOpinionCommand, SubmitOpinionHandler,
};
use crate::domain::foundation::SessionId;
use crate::domain::scenario::{all_scenarios, scenario, ScenarioId};
use crate::domain::session::SessionError;
use crate::ports::{AIProvider, SessionStore};

use super::dto::{
    ErrorResponse, ScenarioListResponse, ScenarioResponse, SessionResponse, StartSessionRequest,
    SubmitOpinionRequest, SubmitOpinionResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

/// Application state for debate endpoints.
#[derive(Clone)]
pub struct DebateAppState {
    start_handler: Arc<StartSessionHandler>,
    get_handler: Arc<GetSessionHandler>,
    end_handler: Arc<EndSessionHandler>,
    submit_handler: Arc<SubmitOpinionHandler>,
}

impl DebateAppState {
    /// Wires every handler against one provider and one session store.
    pub fn new(ai_provider: Arc<dyn AIProvider>, store: Arc<dyn SessionStore>) -> Self {
        Self {
            start_handler: Arc::new(StartSessionHandler::new(store.clone())),
            get_handler: Arc::new(GetSessionHandler::new(store.clone())),
            end_handler: Arc::new(EndSessionHandler::new(store.clone())),
            submit_handler: Arc::new(SubmitOpinionHandler::new(ai_provider, store)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Scenario handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/scenarios - List all scenarios
pub async fn list_scenarios() -> Json<ScenarioListResponse> {
    Json(ScenarioListResponse {
        items: all_scenarios().iter().map(ScenarioResponse::from).collect(),
    })
}

/// GET /api/scenarios/:id - Get one scenario
pub async fn get_scenario(Path(scenario_id): Path<String>) -> Response {
    match scenario_id.parse::<ScenarioId>() {
        Ok(id) => (StatusCode::OK, Json(ScenarioResponse::from(scenario(id)))).into_response(),
        Err(_) => handle_debate_error(DebateError::UnknownScenario(scenario_id)),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Session handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/sessions - Resume a live session or start a new one
pub async fn start_session(
    State(state): State<DebateAppState>,
    body: Option<Json<StartSessionRequest>>,
) -> Response {
    let req = body.map(|Json(req)| req).unwrap_or_default();

    let session_id = match req.session_id.as_deref().map(parse_session_id).transpose() {
        Ok(id) => id,
        Err(e) => return handle_debate_error(e),
    };

    let session = state
        .start_handler
        .handle(StartSessionCommand { session_id })
        .await;

    let status = if Some(*session.id()) == session_id {
        StatusCode::OK
    } else {
        StatusCode::CREATED
    };
    (status, Json(SessionResponse::from(&session))).into_response()
}

/// GET /api/sessions/:id - Get session history
pub async fn get_session(
    State(state): State<DebateAppState>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(e) => return handle_debate_error(e),
    };

    match state.get_handler.handle(GetSessionQuery { session_id }).await {
        Ok(session) => (StatusCode::OK, Json(SessionResponse::from(&session))).into_response(),
        Err(e) => handle_debate_error(e.into()),
    }
}

/// DELETE /api/sessions/:id - End a session
pub async fn end_session(
    State(state): State<DebateAppState>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(e) => return handle_debate_error(e),
    };

    match state.end_handler.handle(EndSessionCommand { session_id }).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_debate_error(e.into()),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Opinion handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/sessions/:id/opinions - Submit an opinion for feedback
pub async fn submit_opinion(
    State(state): State<DebateAppState>,
    Path(session_id): Path<String>,
    Json(req): Json<SubmitOpinionRequest>,
) -> Response {
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(e) => return handle_debate_error(e),
    };
    let scenario_id = match req.scenario_id.parse::<ScenarioId>() {
        Ok(id) => id,
        Err(_) => return handle_debate_error(DebateError::UnknownScenario(req.scenario_id)),
    };

    let cmd = SubmitOpinionCommand {
        session_id,
        scenario_id,
        opinion: req.opinion,
    };

    match state.submit_handler.handle(cmd).await {
        Ok(result) => {
            let response = SubmitOpinionResponse::new(result.feedback, &result.session);
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_debate_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn parse_session_id(raw: &str) -> Result<SessionId, DebateError> {
    raw.parse::<SessionId>()
        .map_err(|_| SessionError::invalid_id(raw).into())
}

fn handle_debate_error(error: DebateError) -> Response {
    let status = match &error {
        DebateError::EmptyOpinion => StatusCode::UNPROCESSABLE_ENTITY,
        DebateError::UnknownScenario(_) => StatusCode::NOT_FOUND,
        DebateError::Session(SessionError::NotFound(_)) => StatusCode::NOT_FOUND,
        DebateError::Session(SessionError::InvalidId(_)) => StatusCode::BAD_REQUEST,
        DebateError::Generation(_) => StatusCode::BAD_GATEWAY,
    };

    (status, Json(ErrorResponse::new(error.code(), error.to_string()))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::AIError;

    #[test]
    fn empty_opinion_maps_to_422() {
        let response = handle_debate_error(DebateError::EmptyOpinion);
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn generation_failure_maps_to_502() {
        let response = handle_debate_error(DebateError::Generation(AIError::network("reset")));
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn session_not_found_maps_to_404() {
        let error = DebateError::from(SessionError::NotFound(SessionId::new()));
        assert_eq!(handle_debate_error(error).status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn unknown_scenario_maps_to_404() {
        let error = DebateError::UnknownScenario("trolley".into());
        assert_eq!(handle_debate_error(error).status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn malformed_session_id_maps_to_400() {
        let error = parse_session_id("nope").unwrap_err();
        assert_eq!(handle_debate_error(error).status(), StatusCode::BAD_REQUEST);
    }
}
