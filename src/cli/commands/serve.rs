//! HTTP transport for the MCP server.
//!
//! Two ways in:
//! - `GET /sse` opens an event stream whose first `endpoint` event names the URL
//!   to POST to (`/sse?sessionId=...`). Responses to those POSTs arrive on the
//!   stream as `message` events and the POST itself gets `202 Accepted`.
//! - Plain POSTs to `/mcp` (or `/message` without a session) are answered in the
//!   response body. Notifications get `202 Accepted` with no body.

use crate::cli::Output;
use crate::config::Settings;
use crate::mcp::McpServer;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::sse::{Event, KeepAlive, Sse},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use futures::stream::{self, Stream, StreamExt};
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info, warn};
use uuid::Uuid;

type Sessions = Arc<Mutex<HashMap<String, mpsc::UnboundedSender<String>>>>;

/// Shared state of the HTTP transport.
#[derive(Clone)]
pub struct HttpState {
    server: Arc<McpServer>,
    sessions: Sessions,
}

/// One event on an SSE session stream.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SseFrame {
    event: &'static str,
    data: String,
}

/// Removes its session when the stream holding it is dropped.
struct SessionGuard {
    id: String,
    sessions: Sessions,
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        lock(&self.sessions).remove(&self.id);
        info!("SSE session {} closed", self.id);
    }
}

fn lock(sessions: &Sessions) -> MutexGuard<'_, HashMap<String, mpsc::UnboundedSender<String>>> {
    sessions.lock().unwrap_or_else(PoisonError::into_inner)
}

impl HttpState {
    pub fn new(server: Arc<McpServer>) -> Self {
        Self {
            server,
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Register a session and return its id plus the frames to stream to the client.
    fn open_session(&self) -> (String, impl Stream<Item = SseFrame> + Send + 'static) {
        let id = Uuid::new_v4().to_string();
        let (tx, rx) = mpsc::unbounded_channel();
        lock(&self.sessions).insert(id.clone(), tx);

        let guard = SessionGuard {
            id: id.clone(),
            sessions: self.sessions.clone(),
        };
        let endpoint = SseFrame {
            event: "endpoint",
            data: format!("/sse?sessionId={}", id),
        };
        let messages = stream::unfold((rx, guard), |(mut rx, guard)| async move {
            let data = rx.recv().await?;
            Some((SseFrame { event: "message", data }, (rx, guard)))
        });

        (id, stream::once(async move { endpoint }).chain(messages))
    }

    fn sender(&self, session_id: &str) -> Option<mpsc::UnboundedSender<String>> {
        lock(&self.sessions).get(session_id).cloned()
    }
}

#[derive(Debug, Default, Deserialize)]
struct SessionQuery {
    #[serde(rename = "sessionId")]
    session_id: Option<String>,
}

/// Build the HTTP router around a shared server.
pub fn router(server: Arc<McpServer>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/sse", get(sse_connect).post(message))
        .route("/message", post(message))
        .route("/mcp", post(plain_message))
        .layer(cors)
        .with_state(HttpState::new(server))
}

/// Run the HTTP server.
pub async fn run_serve(host: &str, port: u16, settings: Settings) -> anyhow::Result<()> {
    let server = Arc::new(McpServer::new(&settings));
    let app = router(server);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("HTTP transport bound to {}", addr);

    Output::header("tubescout MCP Server");
    println!();
    Output::success(&format!("Listening on http://{}", addr));
    println!();
    println!("Endpoints:");
    Output::kv("Health", "GET  /health");
    Output::kv("SSE stream", "GET  /sse");
    Output::kv("SSE messages", "POST /sse?sessionId=... (or /message)");
    Output::kv("JSON-RPC", "POST /mcp");
    println!();
    Output::info("Press Ctrl+C to stop the server.");

    axum::serve(listener, app).await?;

    Ok(())
}

async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "server": "tubescout",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn sse_connect(
    State(state): State<HttpState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let (id, frames) = state.open_session();
    info!("SSE session {} opened", id);

    let events = frames.map(|frame| {
        Ok::<_, Infallible>(Event::default().event(frame.event).data(frame.data))
    });
    Sse::new(events).keep_alive(KeepAlive::default())
}

async fn plain_message(State(state): State<HttpState>, body: String) -> Response {
    match state.server.handle_message(&body).await {
        Some(response) => Json(response).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

async fn message(
    State(state): State<HttpState>,
    Query(query): Query<SessionQuery>,
    body: String,
) -> Response {
    let Some(session_id) = query.session_id else {
        return plain_message(State(state), body).await;
    };
    let Some(sender) = state.sender(&session_id) else {
        warn!("No SSE session {}", session_id);
        return (StatusCode::NOT_FOUND, "Session not found").into_response();
    };

    if let Some(response) = state.server.handle_message(&body).await {
        let payload = match serde_json::to_string(&response) {
            Ok(payload) => payload,
            Err(e) => return (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
        };
        if sender.send(payload).is_err() {
            return (StatusCode::NOT_FOUND, "Session not found").into_response();
        }
        debug!("Queued response on session {}", session_id);
    }

    StatusCode::ACCEPTED.into_response()
}
