//! HTTP server implementation using Axum.

use axum::extract::DefaultBodyLimit;
use axum::{
    Router,
    routing::{get, post},
};
use faqdesk_agent::Agent;
use faqdesk_core::config::{DialogueConfig, FaqDeskConfig, GatewayConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared state for the gateway server.
#[derive(Clone)]
pub struct AppState {
    pub gateway_config: GatewayConfig,
    pub dialogue_config: DialogueConfig,
    /// Static client files; `index.html` here overrides the built-in page.
    pub public_dir: PathBuf,
    pub start_time: std::time::Instant,
    /// Knowledge base, conversation store, and dialogue policy.
    pub agent: Arc<Agent>,
}

impl AppState {
    pub fn new(config: &FaqDeskConfig, agent: Arc<Agent>) -> Self {
        Self {
            gateway_config: config.gateway.clone(),
            dialogue_config: config.dialogue.clone(),
            public_dir: PathBuf::from(&config.gateway.public_dir),
            start_time: std::time::Instant::now(),
            agent,
        }
    }
}

/// Build the Axum router with all routes.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.gateway_config.max_body_bytes;
    let shared = Arc::new(state);

    let api = Router::new()
        .route("/api/faqs", get(super::routes::list_faqs))
        .route("/api/chat", post(super::routes::chat))
        .route("/health", get(super::routes::health_check))
        .route("/public/{*path}", get(super::routes::public_file));

    // SPA fallback: every other GET gets the chat page, anything else 404s
    api.fallback(super::routes::fallback)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(
            CorsLayer::new()
                .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
                .allow_headers(Any)
                .allow_origin(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}

/// Start the HTTP server and serve until Ctrl-C.
pub async fn start(config: &FaqDeskConfig) -> anyhow::Result<()> {
    let agent = Arc::new(Agent::from_config(config));
    tracing::info!(
        "🤖 Agent ready ({} entries, threshold={}, handoff after {})",
        agent.knowledge().len(),
        config.dialogue.confidence_threshold,
        config.dialogue.handoff_after
    );

    let state = AppState::new(config, agent);
    let app = build_router(state);

    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("🌐 Gateway server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("👋 Gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("⚠️ Could not listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}
