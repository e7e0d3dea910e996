use serde_json::Value;

use super::payload::{
    AudioBufferPayload, ErrorPayload, PlatformEventPayload, ResultsPayload, VolumePayload,
};

/// Wire names of the published events.
pub mod names {
    pub const SPEECH_START: &str = "onSpeechStart";
    pub const SPEECH_BEGIN: &str = "onSpeechBegin";
    pub const SPEECH_END: &str = "onSpeechEnd";
    pub const SPEECH_ERROR: &str = "onSpeechError";
    pub const SPEECH_RESULTS: &str = "onSpeechResults";
    pub const SPEECH_PARTIAL_RESULTS: &str = "onSpeechPartialResults";
    pub const SPEECH_VOLUME_CHANGED: &str = "onSpeechVolumeChanged";
    pub const SPEECH_AUDIO_BUFFER: &str = "onSpeechAudioBuffer";
    pub const SPEECH_EVENT: &str = "onSpeechEvent";

    pub const ALL: [&str; 9] = [
        SPEECH_START,
        SPEECH_BEGIN,
        SPEECH_END,
        SPEECH_ERROR,
        SPEECH_RESULTS,
        SPEECH_PARTIAL_RESULTS,
        SPEECH_VOLUME_CHANGED,
        SPEECH_AUDIO_BUFFER,
        SPEECH_EVENT,
    ];
}

/// A named recognition event as delivered to subscribers.
#[derive(Debug, Clone)]
pub enum SpeechEvent {
    /// Engine ready to receive speech
    Start,
    /// User started speaking
    Begin,
    /// User stopped speaking
    End,
    /// Mid-session engine failure
    Error(ErrorPayload),
    /// Final ranked transcriptions
    Results(ResultsPayload),
    /// Interim ranked transcriptions
    PartialResults(ResultsPayload),
    /// Input volume sample
    VolumeChanged(VolumePayload),
    /// Raw captured audio chunk
    AudioBuffer(AudioBufferPayload),
    /// Engine-specific passthrough event
    Platform(PlatformEventPayload),
}

impl SpeechEvent {
    /// The event's wire name.
    pub fn name(&self) -> &'static str {
        match self {
            SpeechEvent::Start => names::SPEECH_START,
            SpeechEvent::Begin => names::SPEECH_BEGIN,
            SpeechEvent::End => names::SPEECH_END,
            SpeechEvent::Error(_) => names::SPEECH_ERROR,
            SpeechEvent::Results(_) => names::SPEECH_RESULTS,
            SpeechEvent::PartialResults(_) => names::SPEECH_PARTIAL_RESULTS,
            SpeechEvent::VolumeChanged(_) => names::SPEECH_VOLUME_CHANGED,
            SpeechEvent::AudioBuffer(_) => names::SPEECH_AUDIO_BUFFER,
            SpeechEvent::Platform(_) => names::SPEECH_EVENT,
        }
    }

    /// JSON payload; `null` for the payload-less lifecycle events.
    pub fn payload(&self) -> Value {
        match self {
            SpeechEvent::Start | SpeechEvent::Begin | SpeechEvent::End => Value::Null,
            SpeechEvent::Error(p) => serde_json::to_value(p).unwrap_or(Value::Null),
            SpeechEvent::Results(p) | SpeechEvent::PartialResults(p) => {
                serde_json::to_value(p).unwrap_or(Value::Null)
            }
            SpeechEvent::VolumeChanged(p) => serde_json::to_value(p).unwrap_or(Value::Null),
            SpeechEvent::AudioBuffer(p) => serde_json::to_value(p).unwrap_or(Value::Null),
            SpeechEvent::Platform(p) => serde_json::to_value(p).unwrap_or(Value::Null),
        }
    }
}
