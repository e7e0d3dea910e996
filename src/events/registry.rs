use std::collections::HashMap;

/// Reference counts of external subscriptions per event name.
///
/// Only used to skip formatting high-frequency payloads (volume, raw audio)
/// when nobody is watching; correctness never depends on it.
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    counts: HashMap<String, usize>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one more subscriber for the named event.
    pub fn add_listener(&mut self, event_name: &str) {
        *self.counts.entry(event_name.to_string()).or_insert(0) += 1;
    }

    /// Drop `count` subscribers from every tracked event, floored at zero.
    /// Entries that reach zero are removed.
    pub fn remove_listeners(&mut self, count: usize) {
        self.counts.retain(|_, current| {
            *current = current.saturating_sub(count);
            *current > 0
        });
    }

    /// Whether anyone subscribed to the named event.
    pub fn watched(&self, event_name: &str) -> bool {
        self.count(event_name) > 0
    }

    pub fn count(&self, event_name: &str) -> usize {
        self.counts.get(event_name).copied().unwrap_or(0)
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
