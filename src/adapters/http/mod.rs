//! HTTP adapters - REST API and browser page.
//!
//! `build_router` assembles the full application with the cross-cutting
//! tower layers; the per-area routers stay usable on their own for tests.

pub mod debate;
pub mod page;

pub use debate::{debate_router, DebateAppState};
pub use page::page_router;

use std::time::Duration;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Assembles the complete application router.
pub fn build_router(state: DebateAppState, server: &ServerConfig) -> Router {
    Router::new()
        .merge(page_router())
        .merge(debate_router())
        .with_state(state)
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(TimeoutLayer::new(Duration::from_secs(server.request_timeout_secs)))
        .layer(TraceLayer::new_for_http())
}

/// Restricts origins when configured; otherwise any origin is allowed.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if allowed.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(allowed)
    }
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

    #[tokio::test]
    async fn full_router_serves_page_and_api() {
        let state = DebateAppState::new(
            Arc::new(MockAIProvider::new()),
            Arc::new(InMemorySessionStore::new()),
        );
        let app = build_router(state, &ServerConfig::default());

        for uri in ["/", "/health", "/api/scenarios", "/api/scenarios/museum-day"] {
            let response = app
                .clone()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{}", uri);
        }
    }

    #[tokio::test]
    async fn configured_origin_is_echoed() {
        let state = DebateAppState::new(
            Arc::new(MockAIProvider::new()),
            Arc::new(InMemorySessionStore::new()),
        );
        let server = ServerConfig {
            cors_origins: Some("http://localhost:5173, bad\norigin".to_string()),
            ..Default::default()
        };
        let app = build_router(state, &server);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header("origin", "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "http://localhost:5173"
        );
    }
}
