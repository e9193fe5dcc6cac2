//! API route handlers for the gateway.

use axum::body::{Body, Bytes};
use axum::extract::{Path, State};
use axum::http::{Method, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use std::sync::Arc;

use faqdesk_core::types::{ChatRequest, ChatResponse, FaqSummary};

use super::assets;
use super::server::AppState;

/// Health check endpoint.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "faqdesk-gateway",
        "version": env!("CARGO_PKG_VERSION"),
        "entries": state.agent.knowledge().len(),
        "conversations": state.agent.conversations().len(),
        "uptime_secs": state.start_time.elapsed().as_secs(),
    }))
}

/// Every knowledge-base question, in stored order.
pub async fn list_faqs(State(state): State<Arc<AppState>>) -> Json<Vec<FaqSummary>> {
    Json(state.agent.list_faqs())
}

/// One chat turn. The body is read raw so that missing or wrong content
/// types and invalid JSON still produce a normal reply.
pub async fn chat(State(state): State<Arc<AppState>>, body: Bytes) -> Json<ChatResponse> {
    let request = ChatRequest::from_slice(&body);
    Json(state.agent.chat(request))
}

/// Serve a file from the public directory.
pub async fn public_file(
    State(state): State<Arc<AppState>>,
    Path(path): Path<String>,
) -> Response {
    let Some(file) = assets::resolve_within(&state.public_dir, &path) else {
        tracing::warn!("⚠️ Rejected static path outside public dir: {path}");
        return (StatusCode::FORBIDDEN, "Forbidden").into_response();
    };

    let is_file = tokio::fs::metadata(&file)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false);
    if !is_file {
        return (StatusCode::NOT_FOUND, "Not found").into_response();
    }

    match tokio::fs::read(&file).await {
        Ok(content) => Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, assets::content_type(&file))
            .body(Body::from(content))
            .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response()),
        Err(e) => {
            tracing::warn!("⚠️ Failed to read {}: {e}", file.display());
            (StatusCode::INTERNAL_SERVER_ERROR, "Read error").into_response()
        }
    }
}

/// The chat client: `public_dir/index.html` when present, otherwise the
/// built-in page.
pub async fn index_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let custom = state.public_dir.join("index.html");
    match tokio::fs::read_to_string(&custom).await {
        Ok(html) => Html(html),
        Err(_) => Html(assets::builtin_index_html(&state.dialogue_config.handoff_notice)),
    }
}

/// Unmatched paths: the chat page for `GET`/`HEAD`, 404 for everything else.
pub async fn fallback(method: Method, state: State<Arc<AppState>>) -> Response {
    if method == Method::GET || method == Method::HEAD {
        index_page(state).await.into_response()
    } else {
        (StatusCode::NOT_FOUND, "Not found").into_response()
    }
}
