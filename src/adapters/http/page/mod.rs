//! Browser page and liveness probe.
//!
//! The page is a single self-contained HTML document compiled into the
//! binary. It keeps its session id in `sessionStorage` and ends the session
//! with a keepalive `DELETE` when the page is hidden for good.

use axum::{response::Html, routing::get, Json, Router};
use serde_json::{json, Value};

const INDEX_HTML: &str = include_str!("index.html");

/// GET / - Discussion page
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /health - Liveness probe
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Creates the page router. Stateless, so it merges into any app state.
pub fn page_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn index_serves_html_page() {
        let app: Router = page_router();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));
    }

    #[test]
    fn page_contains_core_widgets() {
        assert!(INDEX_HTML.contains("id=\"scenario-select\""));
        assert!(INDEX_HTML.contains("id=\"opinion\""));
        assert!(INDEX_HTML.contains("의견 제출"));
        assert!(INDEX_HTML.contains("대화 기록"));
    }

    #[test]
    fn page_ends_its_session_on_pagehide() {
        assert!(INDEX_HTML.contains(r#"addEventListener("pagehide", endSession)"#));
        assert!(INDEX_HTML.contains(r#"method: "DELETE", keepalive: true"#));
    }

    #[test]
    fn page_restarts_only_for_missing_session() {
        assert!(INDEX_HTML.contains(r#"res.status === 404 && body.code === "SESSION_NOT_FOUND""#));
        assert!(!INDEX_HTML.contains("if (res.status === 404) {"));
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let app: Router = page_router();

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
