//! HTTP API server for external control
//!
//! This module exposes the recognition session over REST plus SSE:
//! - POST /speech/start | /speech/stop | /speech/destroy - Session control
//! - GET /speech/status - Session snapshot
//! - GET /speech/available - Engine availability
//! - GET/PUT /speech/language, GET /speech/languages - Language configuration
//! - GET /speech/events - Server-sent recognition event stream
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
