use std::sync::{Mutex, PoisonError};

use tokio::sync::broadcast;
use tracing::trace;

use super::event::SpeechEvent;
use super::registry::ListenerRegistry;

/// Republishes recognition events to all broadcast subscribers.
///
/// High-frequency events (volume, raw audio) are dropped before formatting
/// unless the listener registry reports at least one subscriber for them.
pub struct EventPublisher {
    tx: broadcast::Sender<SpeechEvent>,
    registry: Mutex<ListenerRegistry>,
}

impl EventPublisher {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self {
            tx,
            registry: Mutex::new(ListenerRegistry::new()),
        }
    }

    /// Subscribe to the event stream.
    pub fn subscribe(&self) -> broadcast::Receiver<SpeechEvent> {
        self.tx.subscribe()
    }

    /// Record one more external subscriber for the named event.
    pub fn add_listener(&self, event_name: &str) {
        self.registry().add_listener(event_name);
    }

    /// Drop `count` subscribers from every tracked event.
    pub fn remove_listeners(&self, count: usize) {
        self.registry().remove_listeners(count);
    }

    pub fn listener_count(&self, event_name: &str) -> usize {
        self.registry().count(event_name)
    }

    /// Forget all subscriber counts (module teardown).
    pub fn clear_listeners(&self) {
        self.registry().clear();
    }

    /// Publish one event. Events nobody receives are discarded.
    pub fn publish(&self, event: SpeechEvent) {
        match &event {
            SpeechEvent::VolumeChanged(_) | SpeechEvent::AudioBuffer(_) => {
                if !self.registry().watched(event.name()) {
                    trace!(event = event.name(), "skipped, no listeners");
                    return;
                }
            }
            _ => {}
        }

        // Err just means no live receivers right now
        let _ = self.tx.send(event);
    }

    fn registry(&self) -> std::sync::MutexGuard<'_, ListenerRegistry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
