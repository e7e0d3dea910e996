// Serde shape tests for the event payload contract.

use speechbridge::{
    names, AudioBufferPayload, ErrorPayload, Hypothesis, PlatformEventPayload, ResultsPayload,
    SpeechEvent, Transcription, VolumePayload,
};

#[test]
fn results_payload_preserves_engine_ranking() {
    let payload = ResultsPayload::from_hypotheses(vec![
        Hypothesis::new("hello", Some(0.9)),
        Hypothesis::new("help", Some(0.4)),
    ]);

    assert_eq!(payload.value, "hello");
    assert_eq!(
        payload.results.transcriptions,
        vec![
            Transcription {
                text: "hello".to_string(),
                confidence: 0.9,
            },
            Transcription {
                text: "help".to_string(),
                confidence: 0.4,
            },
        ]
    );
}

#[test]
fn results_payload_defaults_missing_confidence_to_zero() {
    let payload = ResultsPayload::from_hypotheses(vec![Hypothesis::new("bonjour", None)]);

    assert_eq!(payload.value, "bonjour");
    assert_eq!(payload.results.transcriptions[0].confidence, 0.0);
}

#[test]
fn results_payload_with_no_hypotheses_has_empty_value() {
    let payload = ResultsPayload::from_hypotheses(Vec::new());

    assert_eq!(payload.value, "");
    assert!(payload.results.transcriptions.is_empty());
}

#[test]
fn results_payload_serializes_to_the_wire_shape() {
    let payload = ResultsPayload::from_hypotheses(vec![Hypothesis::new("hi", Some(0.5))]);
    let json = serde_json::to_value(&payload).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "value": "hi",
            "results": {
                "transcriptions": [{ "text": "hi", "confidence": 0.5 }]
            }
        })
    );
}

#[test]
fn transcription_confidence_defaults_on_deserialize() {
    let t: Transcription = serde_json::from_str(r#"{ "text": "hey" }"#).unwrap();
    assert_eq!(t.text, "hey");
    assert_eq!(t.confidence, 0.0);
}

#[test]
fn error_payload_carries_code_and_message() {
    let payload = ErrorPayload {
        code: 7,
        message: "No speech match found".to_string(),
    };
    let json = serde_json::to_value(&payload).unwrap();

    assert_eq!(
        json,
        serde_json::json!({ "code": 7, "message": "No speech match found" })
    );
}

#[test]
fn audio_buffer_payload_is_base64() {
    let payload = AudioBufferPayload::from_bytes(&[1, 2, 3]);
    assert_eq!(payload.buffer, "AQID");
}

#[test]
fn platform_event_payload_flattens_params() {
    let mut params = serde_json::Map::new();
    params.insert("reason".to_string(), serde_json::json!("language-switch"));

    let payload = PlatformEventPayload {
        event_type: 3,
        params,
    };
    let json = serde_json::to_value(&payload).unwrap();

    assert_eq!(
        json,
        serde_json::json!({ "eventType": 3, "reason": "language-switch" })
    );
}

#[test]
fn event_names_match_the_module_contract() {
    assert_eq!(SpeechEvent::Start.name(), "onSpeechStart");
    assert_eq!(SpeechEvent::Begin.name(), "onSpeechBegin");
    assert_eq!(SpeechEvent::End.name(), "onSpeechEnd");
    assert_eq!(
        SpeechEvent::VolumeChanged(VolumePayload { value: -2.0 }).name(),
        "onSpeechVolumeChanged"
    );
    assert_eq!(names::ALL.len(), 9);
}

#[test]
fn lifecycle_events_have_null_payloads() {
    assert!(SpeechEvent::Start.payload().is_null());
    assert!(SpeechEvent::Begin.payload().is_null());
    assert!(SpeechEvent::End.payload().is_null());

    let results = SpeechEvent::Results(ResultsPayload::from_hypotheses(vec![Hypothesis::new(
        "x",
        Some(1.0),
    )]));
    assert_eq!(results.payload()["value"], "x");
}
