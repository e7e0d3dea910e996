use serde_json::{Map, Value};
use tokio::sync::mpsc;

use crate::error::Result;
use crate::language::LanguageTag;

/// One candidate transcription as ranked by the platform engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Hypothesis {
    /// Transcribed text
    pub text: String,
    /// Confidence score (0.0 to 1.0), if the engine reports one
    pub confidence: Option<f32>,
}

impl Hypothesis {
    pub fn new(text: impl Into<String>, confidence: Option<f32>) -> Self {
        Self {
            text: text.into(),
            confidence,
        }
    }
}

/// Raw notification from the platform engine, one variant per native
/// callback. The session controller republishes these as named events.
#[derive(Debug, Clone)]
pub enum RecognizerNotice {
    /// Engine is ready to receive speech
    ReadyForSpeech,
    /// User started speaking
    BeginOfSpeech,
    /// Input volume sample (RMS dB)
    RmsChanged(f32),
    /// Raw captured audio, as handed over by the engine
    BufferReceived(Vec<u8>),
    /// User stopped speaking; final results may still follow
    EndOfSpeech,
    /// Mid-session engine failure (see [`codes`])
    Error(i32),
    /// Final transcriptions, best first
    Results(Vec<Hypothesis>),
    /// Interim transcriptions, best first
    PartialResults(Vec<Hypothesis>),
    /// Engine-specific event passed through untyped
    Event {
        event_type: i32,
        params: Map<String, Value>,
    },
}

/// Configuration handed to the backend when (re)building its engine handle.
#[derive(Debug, Clone)]
pub struct RecognizerConfig {
    /// Recognition locale
    pub language: LanguageTag,
    /// Maximum number of ranked hypotheses per result
    pub max_results: u32,
    /// Whether interim results should be delivered
    pub partial_results: bool,
    /// Capacity of the notice channel returned by `start_listening`
    pub notice_buffer: usize,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            language: LanguageTag::default(),
            max_results: 5,
            partial_results: true,
            notice_buffer: 64,
        }
    }
}

/// Speech-recognition engine seam.
///
/// Implementations wrap one platform engine handle. The session controller
/// guarantees all calls are serialized; implementations do not need their
/// own locking around the handle.
#[async_trait::async_trait]
pub trait RecognizerBackend: Send + Sync {
    /// Rebuild the engine handle with the given configuration.
    ///
    /// Called before the first session and again on every language change.
    /// Any in-flight session is abandoned.
    async fn initialize(&mut self, config: &RecognizerConfig) -> Result<()>;

    /// Begin one listen session.
    ///
    /// Returns a channel receiver carrying engine notices until the session
    /// ends; the channel closes when the engine goes quiet.
    async fn start_listening(&mut self) -> Result<mpsc::Receiver<RecognizerNotice>>;

    /// Ask the engine to stop capturing and finish up.
    async fn stop_listening(&mut self) -> Result<()>;

    /// Release the engine handle. Must be idempotent.
    async fn destroy(&mut self);

    /// Whether the platform offers a recognition engine at all.
    fn is_available(&self) -> bool;

    /// Whether microphone/recording permission has been granted.
    fn has_permission(&self) -> bool;

    /// Backend name for logging.
    fn name(&self) -> &str;
}

/// Numeric mid-session error codes, matching the platform table.
pub mod codes {
    pub const NETWORK_TIMEOUT: i32 = 1;
    pub const NETWORK: i32 = 2;
    pub const AUDIO: i32 = 3;
    pub const SERVER: i32 = 4;
    pub const CLIENT: i32 = 5;
    pub const SPEECH_TIMEOUT: i32 = 6;
    pub const NO_MATCH: i32 = 7;
    pub const RECOGNIZER_BUSY: i32 = 8;
    pub const INSUFFICIENT_PERMISSIONS: i32 = 9;

    /// Human-readable message for a mid-session error code.
    pub fn message(code: i32) -> String {
        match code {
            NETWORK_TIMEOUT => "Network operation timed out".to_string(),
            NETWORK => "Network error".to_string(),
            AUDIO => "Audio recording error".to_string(),
            SERVER => "Server error".to_string(),
            CLIENT => "Client error".to_string(),
            SPEECH_TIMEOUT => "Speech timeout".to_string(),
            NO_MATCH => "No speech match found".to_string(),
            RECOGNIZER_BUSY => "Recognizer is busy".to_string(),
            INSUFFICIENT_PERMISSIONS => "Insufficient permissions".to_string(),
            other => format!("Unknown error: {other}"),
        }
    }
}
