use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::sse::{Event as SseEvent, KeepAlive, Sse},
    response::{IntoResponse, Json},
};
use futures::stream::Stream;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::{info, warn};

use super::state::AppState;
use crate::error::Error;
use crate::events::EventPublisher;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ControlResponse {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct SetLanguageRequest {
    pub language: String,
}

#[derive(Debug, Serialize)]
pub struct LanguageResponse {
    pub language: String,
}

#[derive(Debug, Serialize)]
pub struct AvailableResponse {
    pub available: bool,
}

#[derive(Debug, Deserialize)]
pub struct EventStreamParams {
    /// Comma-separated event names to register interest in; needed for the
    /// gated high-frequency events (volume, raw audio)
    pub events: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub error: String,
}

fn error_response(err: Error) -> axum::response::Response {
    let status = match &err {
        Error::AlreadyListening => StatusCode::CONFLICT,
        Error::PermissionDenied => StatusCode::FORBIDDEN,
        Error::NotAvailable => StatusCode::SERVICE_UNAVAILABLE,
        Error::Language(_) => StatusCode::BAD_REQUEST,
        Error::Generic(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(ErrorResponse {
            code: err.code().to_string(),
            error: err.to_string(),
        }),
    )
        .into_response()
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /speech/start
/// Begin a listen session
pub async fn start_listening(State(state): State<AppState>) -> impl IntoResponse {
    match state.controller.start_listening().await {
        Ok(message) => (
            StatusCode::OK,
            Json(ControlResponse {
                status: "listening".to_string(),
                message,
            }),
        )
            .into_response(),
        Err(e) => {
            warn!("start listening refused: {}", e);
            error_response(e)
        }
    }
}

/// POST /speech/stop
/// End the active listen session (no-op when idle)
pub async fn stop_listening(State(state): State<AppState>) -> impl IntoResponse {
    match state.controller.stop_listening().await {
        Ok(message) => (
            StatusCode::OK,
            Json(ControlResponse {
                status: "idle".to_string(),
                message,
            }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

/// POST /speech/destroy
/// Release the recognizer handle and clear listener counts
pub async fn destroy(State(state): State<AppState>) -> impl IntoResponse {
    match state.controller.destroy().await {
        Ok(message) => (
            StatusCode::OK,
            Json(ControlResponse {
                status: "destroyed".to_string(),
                message,
            }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

/// GET /speech/status
/// Session controller snapshot
pub async fn get_status(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.controller.stats()))
}

/// GET /speech/available
/// Whether the platform offers a recognition engine
pub async fn get_available(State(state): State<AppState>) -> impl IntoResponse {
    let available = state.controller.is_available().await;
    (StatusCode::OK, Json(AvailableResponse { available }))
}

/// GET /speech/language
/// The active recognition language tag
pub async fn get_language(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(LanguageResponse {
            language: state.controller.language().to_string(),
        }),
    )
}

/// PUT /speech/language
/// Switch the recognition language, rebuilding the engine handle
pub async fn set_language(
    State(state): State<AppState>,
    Json(req): Json<SetLanguageRequest>,
) -> impl IntoResponse {
    match state.controller.set_language(&req.language).await {
        Ok(_) => (
            StatusCode::OK,
            Json(LanguageResponse {
                language: req.language,
            }),
        )
            .into_response(),
        Err(e) => {
            warn!("set language failed: {}", e);
            error_response(e)
        }
    }
}

/// GET /speech/languages
/// Supported recognition language tags
pub async fn get_languages(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.controller.supported_languages()))
}

/// GET /speech/events
/// Server-sent event stream of recognition events. Each frame's event name
/// is the `onSpeech*` constant, the data is the JSON payload.
pub async fn event_stream(
    State(state): State<AppState>,
    Query(params): Query<EventStreamParams>,
) -> Sse<impl Stream<Item = Result<SseEvent, Infallible>>> {
    let publisher = state.controller.publisher();

    let mut registered = 0;
    if let Some(names) = &params.events {
        for name in names.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            publisher.add_listener(name);
            registered += 1;
        }
    }
    info!(registered, "event stream client connected");

    let guard = ListenerGuard {
        publisher: Arc::clone(&publisher),
        registered,
    };
    let rx = publisher.subscribe();

    let stream = futures::stream::unfold((rx, guard), |(mut rx, guard)| async move {
        loop {
            match rx.recv().await {
                Ok(event) => {
                    let frame = SseEvent::default()
                        .event(event.name())
                        .data(event.payload().to_string());
                    return Some((Ok(frame), (rx, guard)));
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(skipped, "event stream lagged");
                    continue;
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}

/// Releases this client's listener registrations when the stream ends.
struct ListenerGuard {
    publisher: Arc<EventPublisher>,
    registered: usize,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if self.registered > 0 {
            self.publisher.remove_listeners(self.registered);
        }
    }
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
