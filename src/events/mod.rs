//! Event republishing.
//!
//! Raw recognizer notices are mapped to named [`SpeechEvent`]s with stable
//! payload shapes and fanned out over a broadcast channel. The
//! [`ListenerRegistry`] tracks how many external subscribers each event
//! name has, so costly payloads can be skipped when nobody is watching.

pub mod event;
pub mod payload;
pub mod publisher;
pub mod registry;

pub use event::{names, SpeechEvent};
pub use payload::{
    AudioBufferPayload, ErrorPayload, PlatformEventPayload, ResultsPayload, Transcription,
    TranscriptionList, VolumePayload,
};
pub use publisher::EventPublisher;
pub use registry::ListenerRegistry;
