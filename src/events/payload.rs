use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::recognizer::Hypothesis;

/// One candidate transcription in an event payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcription {
    /// Transcribed text
    pub text: String,
    /// Confidence score; 0.0 when the engine reported none
    #[serde(default)]
    pub confidence: f32,
}

/// Ranked transcription list, best first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptionList {
    pub transcriptions: Vec<Transcription>,
}

/// Payload of `onSpeechResults` and `onSpeechPartialResults`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsPayload {
    /// Top transcription, or empty when the engine produced none
    pub value: String,
    pub results: TranscriptionList,
}

impl ResultsPayload {
    /// Build the payload from engine hypotheses, preserving their ranking.
    pub fn from_hypotheses(hypotheses: Vec<Hypothesis>) -> Self {
        let value = hypotheses
            .first()
            .map(|h| h.text.clone())
            .unwrap_or_default();

        let transcriptions = hypotheses
            .into_iter()
            .map(|h| Transcription {
                text: h.text,
                confidence: h.confidence.unwrap_or(0.0),
            })
            .collect();

        Self {
            value,
            results: TranscriptionList { transcriptions },
        }
    }
}

/// Payload of `onSpeechError`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub code: i32,
    pub message: String,
}

/// Payload of `onSpeechVolumeChanged` (RMS dB sample).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumePayload {
    pub value: f64,
}

/// Payload of `onSpeechAudioBuffer`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioBufferPayload {
    /// Raw captured audio, base64-encoded
    pub buffer: String,
}

impl AudioBufferPayload {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            buffer: base64::engine::general_purpose::STANDARD.encode(bytes),
        }
    }
}

/// Payload of `onSpeechEvent`, an engine-specific passthrough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformEventPayload {
    #[serde(rename = "eventType")]
    pub event_type: i32,
    #[serde(flatten)]
    pub params: Map<String, Value>,
}
