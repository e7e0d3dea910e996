use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Session control
        .route("/speech/start", post(handlers::start_listening))
        .route("/speech/stop", post(handlers::stop_listening))
        .route("/speech/destroy", post(handlers::destroy))
        // Session queries
        .route("/speech/status", get(handlers::get_status))
        .route("/speech/available", get(handlers::get_available))
        // Language configuration
        .route(
            "/speech/language",
            get(handlers::get_language).put(handlers::set_language),
        )
        .route("/speech/languages", get(handlers::get_languages))
        // Recognition event stream
        .route("/speech/events", get(handlers::event_stream))
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
