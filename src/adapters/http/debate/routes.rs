//! Route configuration for debate endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    end_session, get_scenario, get_session, list_scenarios, start_session, submit_opinion,
    DebateAppState,
};

/// Creates the debate API router.
///
/// Routes:
/// - `GET /api/scenarios` - List all scenarios
/// - `GET /api/scenarios/:id` - Get one scenario
/// - `POST /api/sessions` - Resume or start a session
/// - `GET /api/sessions/:id` - Get session history
/// - `DELETE /api/sessions/:id` - End a session
/// - `POST /api/sessions/:id/opinions` - Submit an opinion for feedback
pub fn debate_router() -> Router<DebateAppState> {
    Router::new()
        .route("/api/scenarios", get(list_scenarios))
        .route("/api/scenarios/:id", get(get_scenario))
        .route("/api/sessions", post(start_session))
        .route("/api/sessions/:id", get(get_session).delete(end_session))
        .route("/api/sessions/:id/opinions", post(submit_opinion))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::adapters::storage::InMemorySessionStore;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        let state = DebateAppState::new(
            Arc::new(MockAIProvider::new()),
            Arc::new(InMemorySessionStore::new()),
        );
        debate_router().with_state(state)
    }

    #[tokio::test]
    async fn debate_router_mounts_scenario_list() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/scenarios")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn debate_router_mounts_session_start() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/sessions")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
    }
}
