//! Scripted recognizer backend for development and tests.
//!
//! Replays a fixed set of hypotheses as a realistic notice sequence
//! (ready, begin, per-word volume/partials, end, final results) without
//! touching any platform API.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::sleep;
use tracing::debug;

use super::backend::{Hypothesis, RecognizerBackend, RecognizerConfig, RecognizerNotice};
use crate::error::{Error, Result};

pub struct MockRecognizer {
    /// Ranked hypotheses for the single scripted utterance
    script: Vec<Hypothesis>,
    /// When set, the session fails with this code instead of producing results
    error: Option<i32>,
    available: bool,
    permission: bool,
    /// Delay between scripted words
    word_delay: Duration,
    config: Option<RecognizerConfig>,
    init_count: Arc<AtomicUsize>,
    /// Cancel flag of the currently running replay task, if any
    active: Option<Arc<AtomicBool>>,
}

impl MockRecognizer {
    pub fn new() -> Self {
        Self {
            script: Vec::new(),
            error: None,
            available: true,
            permission: true,
            word_delay: Duration::from_millis(5),
            config: None,
            init_count: Arc::new(AtomicUsize::new(0)),
            active: None,
        }
    }

    /// Backend replaying a short demo utterance, used by the binary when no
    /// native bridge is configured.
    pub fn demo() -> Self {
        Self::new().with_script(vec![Hypothesis::new(
            "hello world this is a demo of speech recognition",
            Some(0.92),
        )])
    }

    /// Ranked hypotheses the session will produce, best first.
    pub fn with_script(mut self, script: Vec<Hypothesis>) -> Self {
        self.script = script;
        self
    }

    /// Fail the session with the given mid-session error code.
    pub fn with_error(mut self, code: i32) -> Self {
        self.error = Some(code);
        self
    }

    pub fn with_word_delay(mut self, delay: Duration) -> Self {
        self.word_delay = delay;
        self
    }

    /// Simulate a platform with no recognition engine.
    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    /// Simulate missing microphone permission.
    pub fn without_permission(mut self) -> Self {
        self.permission = false;
        self
    }

    /// Counter of `initialize` calls, observable after the backend is boxed.
    pub fn init_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.init_count)
    }

    fn cancel_active(&mut self) {
        if let Some(cancel) = self.active.take() {
            cancel.store(true, Ordering::SeqCst);
        }
    }
}

impl Default for MockRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl RecognizerBackend for MockRecognizer {
    async fn initialize(&mut self, config: &RecognizerConfig) -> Result<()> {
        self.cancel_active();
        self.config = Some(config.clone());
        self.init_count.fetch_add(1, Ordering::SeqCst);
        debug!(language = %config.language, "mock recognizer initialized");
        Ok(())
    }

    async fn start_listening(&mut self) -> Result<mpsc::Receiver<RecognizerNotice>> {
        let config = self
            .config
            .clone()
            .ok_or_else(|| Error::generic("recognizer not initialized"))?;

        let (tx, rx) = mpsc::channel(config.notice_buffer);
        let cancel = Arc::new(AtomicBool::new(false));
        self.active = Some(Arc::clone(&cancel));

        let mut script = self.script.clone();
        script.truncate(config.max_results as usize);
        let error = self.error;
        let word_delay = self.word_delay;
        let partial_results = config.partial_results;

        tokio::spawn(async move {
            replay(tx, script, error, word_delay, partial_results, cancel).await;
        });

        Ok(rx)
    }

    async fn stop_listening(&mut self) -> Result<()> {
        self.cancel_active();
        Ok(())
    }

    async fn destroy(&mut self) {
        self.cancel_active();
        self.config = None;
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn has_permission(&self) -> bool {
        self.permission
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Replay one utterance as the notice sequence a platform engine would emit.
async fn replay(
    tx: mpsc::Sender<RecognizerNotice>,
    script: Vec<Hypothesis>,
    error: Option<i32>,
    word_delay: Duration,
    partial_results: bool,
    cancel: Arc<AtomicBool>,
) {
    if tx.send(RecognizerNotice::ReadyForSpeech).await.is_err() {
        return;
    }
    let _ = tx.send(RecognizerNotice::BeginOfSpeech).await;

    if let Some(code) = error {
        sleep(word_delay).await;
        let _ = tx.send(RecognizerNotice::Error(code)).await;
        return;
    }

    let top = script
        .first()
        .map(|h| h.text.clone())
        .unwrap_or_default();

    let mut spoken = String::new();
    for word in top.split_whitespace() {
        sleep(word_delay).await;
        if cancel.load(Ordering::SeqCst) {
            let _ = tx.send(RecognizerNotice::EndOfSpeech).await;
            return;
        }

        if !spoken.is_empty() {
            spoken.push(' ');
        }
        spoken.push_str(word);

        let rms = 2.0 + (word.len() as f32) * 0.5;
        let _ = tx.send(RecognizerNotice::RmsChanged(rms)).await;

        if partial_results {
            let partial = vec![Hypothesis::new(spoken.clone(), None)];
            let _ = tx.send(RecognizerNotice::PartialResults(partial)).await;
        }
    }

    // A token chunk of captured audio, like the engine's buffer callback
    let _ = tx
        .send(RecognizerNotice::BufferReceived(vec![0u8; 32]))
        .await;
    let _ = tx.send(RecognizerNotice::EndOfSpeech).await;
    let _ = tx.send(RecognizerNotice::Results(script)).await;
}
