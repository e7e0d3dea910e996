use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::events::ErrorPayload;

/// Session state visible to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Idle,
    Listening,
}

/// Snapshot of a recognition session controller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStats {
    /// Whether a listen session is currently active
    pub is_listening: bool,

    /// Active recognition language tag
    pub language: String,

    /// When the last listen session started, if any
    pub started_at: Option<DateTime<Utc>>,

    /// Number of final result events published
    pub results_count: usize,

    /// Number of partial result events published
    pub partials_count: usize,

    /// Last mid-session engine error, if any
    pub last_error: Option<ErrorPayload>,
}
