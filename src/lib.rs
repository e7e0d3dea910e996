pub mod config;
pub mod error;
pub mod events;
pub mod http;
pub mod language;
pub mod recognizer;
pub mod session;

pub use config::Config;
pub use error::{Error, Result};
pub use events::{
    names, AudioBufferPayload, ErrorPayload, EventPublisher, ListenerRegistry,
    PlatformEventPayload, ResultsPayload, SpeechEvent, Transcription, TranscriptionList,
    VolumePayload,
};
pub use http::{create_router, AppState};
pub use language::{supported_languages, LanguageTag, FALLBACK_LANGUAGES};
pub use recognizer::{
    codes, BackendKind, Hypothesis, MockRecognizer, RecognizerBackend, RecognizerConfig,
    RecognizerFactory, RecognizerNotice,
};
pub use session::{RecognitionController, SessionConfig, SessionState, SessionStats};
