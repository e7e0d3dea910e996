use std::sync::Arc;

use crate::session::RecognitionController;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// The one recognition session controller this service exposes
    pub controller: Arc<RecognitionController>,
}

impl AppState {
    pub fn new(controller: Arc<RecognitionController>) -> Self {
        Self { controller }
    }
}
