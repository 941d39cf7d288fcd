//! dilemma-debate server entry point.
//!
//! Startup order:
//! 1. Load and validate configuration.
//! 2. Initialise tracing (JSON in production, human-readable otherwise).
//! 3. Wire the OpenAI provider and the in-memory session store, with its idle sweeper.
//! 4. Serve the router until SIGINT or SIGTERM.

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use dilemma_debate::adapters::ai::OpenAIProvider;
use dilemma_debate::adapters::http::{build_router, DebateAppState};
use dilemma_debate::adapters::storage::InMemorySessionStore;
use dilemma_debate::config::AppConfig;
use dilemma_debate::ports::AIProvider;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── 1. Configuration ───────────────────────────────────────────────────
    let config = AppConfig::load()?;
    config.validate()?;

    // ── 2. Tracing ─────────────────────────────────────────────────────────
    init_tracing(&config);
    info!(version = env!("CARGO_PKG_VERSION"), "dilemma-debate starting");

    // ── 3. Adapters ────────────────────────────────────────────────────────
    if !config.ai.has_api_key() {
        warn!("OPENAI_API_KEY is not set; every feedback request will fail with an authentication error");
    }

    let provider = OpenAIProvider::new(config.ai.to_openai_config())?;
    let info = provider.provider_info();
    info!(provider = %info.name, model = %info.model, "AI provider ready");

    let store = InMemorySessionStore::new();
    let sweeper = store.spawn_idle_sweeper(
        config.server.session_idle(),
        config.server.session_sweep_interval(),
    );
    info!(idle_secs = config.server.session_idle_secs, "Session sweeper started");

    let state = DebateAppState::new(Arc::new(provider), Arc::new(store));

    // ── 4. HTTP server with graceful shutdown ──────────────────────────────
    let app = build_router(state, &config.server);
    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    sweeper.abort();
    info!("dilemma-debate stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match config.server.log_level.parse::<EnvFilter>() {
            Ok(filter) => filter,
            Err(e) => {
                eprintln!(
                    "WARN: log level '{}' is not a valid tracing filter ({}); falling back to 'info'",
                    config.server.log_level, e
                );
                EnvFilter::new("info")
            }
        },
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true);

    if config.is_production() {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

/// Resolves when SIGINT (Ctrl-C) or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to install CTRL+C signal handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => warn!(error = %e, "failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    info!("shutdown signal received; starting graceful shutdown");
}
