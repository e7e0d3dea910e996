use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::config::SessionConfig;
use super::stats::{SessionState, SessionStats};
use crate::error::{Error, Result};
use crate::events::{
    AudioBufferPayload, ErrorPayload, EventPublisher, PlatformEventPayload, ResultsPayload,
    SpeechEvent, VolumePayload,
};
use crate::language::{self, LanguageTag};
use crate::recognizer::{codes, RecognizerBackend, RecognizerConfig, RecognizerNotice};

/// Owns the single recognizer handle and serializes every operation that
/// touches it.
///
/// The finite-state machine is Idle → start → Listening → (end-of-speech |
/// error | stop) → Idle. All mutating operations queue on one `tokio::Mutex`
/// over the backend, so two live engine handles can never exist and a start
/// issued during a language change waits instead of interleaving.
pub struct RecognitionController {
    config: SessionConfig,
    inner: tokio::sync::Mutex<Inner>,
    publisher: Arc<EventPublisher>,
    is_listening: Arc<AtomicBool>,
    language: Mutex<LanguageTag>,
    metrics: Arc<SessionMetrics>,
}

struct Inner {
    backend: Box<dyn RecognizerBackend>,
    /// Whether the engine handle has been built since creation/destroy
    initialized: bool,
    /// Relay task republishing notices from the active session
    relay: Option<JoinHandle<()>>,
}

/// Counters shared with the relay task.
#[derive(Default)]
struct SessionMetrics {
    results: AtomicUsize,
    partials: AtomicUsize,
    started_at: Mutex<Option<DateTime<Utc>>>,
    last_error: Mutex<Option<ErrorPayload>>,
}

impl RecognitionController {
    /// Create a controller around the given backend.
    ///
    /// Fails with `LanguageError` when the configured language tag is
    /// malformed.
    pub fn new(config: SessionConfig, backend: Box<dyn RecognizerBackend>) -> Result<Self> {
        let language = match &config.language {
            Some(tag) => tag.parse()?,
            None => LanguageTag::default(),
        };

        let publisher = Arc::new(EventPublisher::new(config.event_capacity));

        Ok(Self {
            config,
            inner: tokio::sync::Mutex::new(Inner {
                backend,
                initialized: false,
                relay: None,
            }),
            publisher,
            is_listening: Arc::new(AtomicBool::new(false)),
            language: Mutex::new(language),
            metrics: Arc::new(SessionMetrics::default()),
        })
    }

    /// The event publisher callers subscribe through.
    pub fn publisher(&self) -> Arc<EventPublisher> {
        Arc::clone(&self.publisher)
    }

    /// Begin a listen session.
    ///
    /// Resolves once the engine request is issued, not once speech is
    /// captured; results arrive as events.
    pub async fn start_listening(&self) -> Result<String> {
        let mut inner = self.inner.lock().await;

        if !inner.backend.has_permission() {
            return Err(Error::PermissionDenied);
        }
        if !inner.backend.is_available() {
            return Err(Error::NotAvailable);
        }
        if self.is_listening.load(Ordering::SeqCst) {
            debug!(session = %self.config.session_id, "start refused, already listening");
            return Err(Error::AlreadyListening);
        }

        if self.config.recreate_on_start || !inner.initialized {
            inner.backend.initialize(&self.recognizer_config()).await?;
            inner.initialized = true;
        }

        let notices = inner.backend.start_listening().await?;
        self.is_listening.store(true, Ordering::SeqCst);
        *lock(&self.metrics.started_at) = Some(Utc::now());

        // A previous session's relay may still be parked here; it has
        // already drained its channel or belongs to an abandoned session.
        if let Some(relay) = inner.relay.take() {
            relay.abort();
        }
        inner.relay = Some(tokio::spawn(relay_notices(
            notices,
            Arc::clone(&self.publisher),
            Arc::clone(&self.is_listening),
            Arc::clone(&self.metrics),
        )));

        info!(session = %self.config.session_id, backend = inner.backend.name(), "started listening");
        Ok("Started listening".to_string())
    }

    /// End the active listen session; no-op success when idle.
    pub async fn stop_listening(&self) -> Result<String> {
        let mut inner = self.inner.lock().await;

        if !self.is_listening.load(Ordering::SeqCst) {
            debug!(session = %self.config.session_id, "stop requested while idle");
            return Ok("Not listening".to_string());
        }

        inner.backend.stop_listening().await?;
        self.is_listening.store(false, Ordering::SeqCst);

        info!(session = %self.config.session_id, "stopped listening");
        Ok("Stopped listening".to_string())
    }

    /// Release the engine handle and forget all listener counts. Idempotent.
    pub async fn destroy(&self) -> Result<String> {
        let mut inner = self.inner.lock().await;

        inner.backend.destroy().await;
        inner.initialized = false;
        if let Some(relay) = inner.relay.take() {
            relay.abort();
        }
        self.is_listening.store(false, Ordering::SeqCst);
        self.publisher.clear_listeners();

        info!(session = %self.config.session_id, "speech recognizer destroyed");
        Ok("Speech recognizer destroyed".to_string())
    }

    /// Switch the recognition language, rebuilding the engine handle.
    ///
    /// Any active session is abandoned; the event relay stays attached to
    /// the controller and serves the next session unchanged.
    pub async fn set_language(&self, tag: &str) -> Result<bool> {
        let parsed: LanguageTag = tag.parse()?;
        let mut inner = self.inner.lock().await;

        if self.is_listening.swap(false, Ordering::SeqCst) {
            warn!(session = %self.config.session_id, "language change during active session");
            if let Some(relay) = inner.relay.take() {
                relay.abort();
            }
        }

        *lock(&self.language) = parsed;

        inner
            .backend
            .initialize(&self.recognizer_config())
            .await
            .map_err(|e| Error::Language(e.to_string()))?;
        inner.initialized = true;

        info!(session = %self.config.session_id, language = tag, "recognition language set");
        Ok(true)
    }

    /// The active recognition language tag.
    pub fn language(&self) -> LanguageTag {
        lock(&self.language).clone()
    }

    /// Whether the platform offers a recognition engine.
    pub async fn is_available(&self) -> bool {
        self.inner.lock().await.backend.is_available()
    }

    /// Languages the recognition service can be asked for; falls back to a
    /// static list when the platform has no authoritative one.
    pub fn supported_languages(&self) -> Vec<String> {
        language::supported_languages()
    }

    pub fn state(&self) -> SessionState {
        if self.is_listening.load(Ordering::SeqCst) {
            SessionState::Listening
        } else {
            SessionState::Idle
        }
    }

    /// Current controller snapshot.
    pub fn stats(&self) -> SessionStats {
        SessionStats {
            is_listening: self.is_listening.load(Ordering::SeqCst),
            language: self.language().to_string(),
            started_at: *lock(&self.metrics.started_at),
            results_count: self.metrics.results.load(Ordering::SeqCst),
            partials_count: self.metrics.partials.load(Ordering::SeqCst),
            last_error: lock(&self.metrics.last_error).clone(),
        }
    }

    fn recognizer_config(&self) -> RecognizerConfig {
        RecognizerConfig {
            language: self.language(),
            max_results: self.config.max_results,
            partial_results: self.config.partial_results,
            ..RecognizerConfig::default()
        }
    }
}

/// Republish raw engine notices as named events until the session's notice
/// channel closes. End-of-speech, final results, and errors force the
/// session back to Idle.
async fn relay_notices(
    mut notices: mpsc::Receiver<RecognizerNotice>,
    publisher: Arc<EventPublisher>,
    is_listening: Arc<AtomicBool>,
    metrics: Arc<SessionMetrics>,
) {
    while let Some(notice) = notices.recv().await {
        let event = match notice {
            RecognizerNotice::ReadyForSpeech => SpeechEvent::Start,
            RecognizerNotice::BeginOfSpeech => SpeechEvent::Begin,
            RecognizerNotice::RmsChanged(value) => SpeechEvent::VolumeChanged(VolumePayload {
                value: f64::from(value),
            }),
            RecognizerNotice::BufferReceived(bytes) => {
                SpeechEvent::AudioBuffer(AudioBufferPayload::from_bytes(&bytes))
            }
            RecognizerNotice::EndOfSpeech => {
                is_listening.store(false, Ordering::SeqCst);
                SpeechEvent::End
            }
            RecognizerNotice::Error(code) => {
                is_listening.store(false, Ordering::SeqCst);
                let payload = ErrorPayload {
                    code,
                    message: codes::message(code),
                };
                *lock(&metrics.last_error) = Some(payload.clone());
                warn!(code, message = %payload.message, "recognition error");
                SpeechEvent::Error(payload)
            }
            RecognizerNotice::Results(hypotheses) => {
                is_listening.store(false, Ordering::SeqCst);
                metrics.results.fetch_add(1, Ordering::SeqCst);
                SpeechEvent::Results(ResultsPayload::from_hypotheses(hypotheses))
            }
            RecognizerNotice::PartialResults(hypotheses) => {
                metrics.partials.fetch_add(1, Ordering::SeqCst);
                SpeechEvent::PartialResults(ResultsPayload::from_hypotheses(hypotheses))
            }
            RecognizerNotice::Event { event_type, params } => {
                SpeechEvent::Platform(PlatformEventPayload { event_type, params })
            }
        };

        publisher.publish(event);
    }

    debug!("notice relay finished");
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
