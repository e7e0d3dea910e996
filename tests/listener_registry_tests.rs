// Unit tests for the listener reference-count registry.

use speechbridge::{names, ListenerRegistry};

#[test]
fn add_listener_increments_per_event_counts() {
    let mut registry = ListenerRegistry::new();

    registry.add_listener(names::SPEECH_RESULTS);
    registry.add_listener(names::SPEECH_RESULTS);
    registry.add_listener(names::SPEECH_VOLUME_CHANGED);

    assert_eq!(registry.count(names::SPEECH_RESULTS), 2);
    assert_eq!(registry.count(names::SPEECH_VOLUME_CHANGED), 1);
    assert_eq!(registry.count(names::SPEECH_ERROR), 0);
    assert!(registry.watched(names::SPEECH_RESULTS));
    assert!(!registry.watched(names::SPEECH_ERROR));
}

#[test]
fn remove_listeners_decrements_every_tracked_event() {
    let mut registry = ListenerRegistry::new();

    registry.add_listener(names::SPEECH_RESULTS);
    registry.add_listener(names::SPEECH_RESULTS);
    registry.add_listener(names::SPEECH_RESULTS);
    registry.add_listener(names::SPEECH_PARTIAL_RESULTS);

    registry.remove_listeners(1);

    assert_eq!(registry.count(names::SPEECH_RESULTS), 2);
    // Reached zero, entry is gone
    assert_eq!(registry.count(names::SPEECH_PARTIAL_RESULTS), 0);
    assert!(!registry.watched(names::SPEECH_PARTIAL_RESULTS));
}

#[test]
fn remove_listeners_never_drives_counts_below_zero() {
    let mut registry = ListenerRegistry::new();

    registry.add_listener(names::SPEECH_VOLUME_CHANGED);
    registry.remove_listeners(100);

    assert_eq!(registry.count(names::SPEECH_VOLUME_CHANGED), 0);
    assert!(registry.is_empty());

    // Removing from an empty registry is harmless
    registry.remove_listeners(3);
    assert!(registry.is_empty());
}

#[test]
fn counts_equal_adds_minus_removes_floored_at_zero() {
    let mut registry = ListenerRegistry::new();

    let adds = 7usize;
    let removes = [2usize, 1, 5, 3];

    for _ in 0..adds {
        registry.add_listener(names::SPEECH_AUDIO_BUFFER);
    }

    let mut expected = adds;
    for n in removes {
        registry.remove_listeners(n);
        expected = expected.saturating_sub(n);
        assert_eq!(registry.count(names::SPEECH_AUDIO_BUFFER), expected);
    }
}

#[test]
fn clear_forgets_all_counts() {
    let mut registry = ListenerRegistry::new();

    for name in names::ALL {
        registry.add_listener(name);
    }
    assert!(!registry.is_empty());

    registry.clear();

    assert!(registry.is_empty());
    for name in names::ALL {
        assert_eq!(registry.count(name), 0);
    }
}
