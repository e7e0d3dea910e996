//! Recognition session management
//!
//! This module provides the `RecognitionController` abstraction that manages:
//! - The single owned recognizer engine handle
//! - The Idle/Listening session state machine
//! - Republishing engine callbacks as named events
//! - Language configuration and handle rebuilds
//! - Session statistics

mod config;
mod controller;
mod stats;

pub use config::SessionConfig;
pub use controller::RecognitionController;
pub use stats::{SessionState, SessionStats};
