use serde::{Deserialize, Serialize};

/// Configuration for a recognition session controller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Unique session identifier, used in logs
    pub session_id: String,

    /// Recognition language tag (`xx` or `xx-YY`); platform default when unset
    pub language: Option<String>,

    /// Maximum number of ranked hypotheses per result
    pub max_results: u32,

    /// Whether interim results should be delivered
    pub partial_results: bool,

    /// Rebuild the engine handle on every start, not only on language change.
    /// Some platform engines misbehave when reused; off by default.
    pub recreate_on_start: bool,

    /// Capacity of the broadcast event channel
    pub event_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_id: format!("speech-{}", uuid::Uuid::new_v4()),
            language: None,
            max_results: 5,
            partial_results: true,
            recreate_on_start: false,
            event_capacity: 64,
        }
    }
}
