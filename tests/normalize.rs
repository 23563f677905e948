//! Transcript normalization through the public API.

use notetaker::normalizer::{
    normalize, preview, JsonSegmentsStrategy, PlainTextStrategy, PreformattedStrategy,
    StructuredStrategy, TranscriptNormalizer, TranscriptPayload,
};
use serde_json::{json, Value};

#[test]
fn test_preformatted_passthrough() {
    assert_eq!(normalize("Alice: Hello there"), "Alice: Hello there");
    assert_eq!(normalize("  Alice: Hello there \n"), "Alice: Hello there");
}

#[test]
fn test_structured_sequence() {
    let payload = json!([{"speaker": "Bob", "text": " Hi "}, {"text": "No speaker"}]);
    assert_eq!(normalize(payload), "Bob: Hi\n\nSpeaker: No speaker");
}

#[test]
fn test_sequence_skips_unusable_entries() {
    let payload = json!([
        {"speaker": "Ann", "text": "   "},
        "stray string",
        42,
        {"speaker": "  ", "text": "kept"},
        {"speaker": "Cy"}
    ]);
    assert_eq!(normalize(payload), "Speaker: kept");
}

#[test]
fn test_stringified_structure_artifact() {
    assert_eq!(normalize("[{'speaker': 'Ann', 'text': 'Hello'}]"), "Ann: Hello");
    assert_eq!(
        normalize("[{'speaker': 'Ann', 'text': 'Hi'}, {'speaker': 'Bob', 'text': 'It\\'s me'}]"),
        "Ann: Hi\n\nBob: It's me"
    );
}

#[test]
fn test_python_repr_with_apostrophes() {
    let repr = r#"[{'speaker': 'Ann', 'text': 'Hello'}, {'speaker': 'Bob', 'text': "It's me"}, {'speaker': 'Ann', 'text': 'Bye'}]"#;
    assert_eq!(normalize(repr), "Ann: Hello\n\nBob: It's me\n\nAnn: Bye");
}

#[test]
fn test_json_text() {
    let text = r#"[{"speaker": "Ann", "text": "Hello"}, {"text": "Bye"}]"#;
    assert_eq!(normalize(text), "Ann: Hello\n\nSpeaker: Bye");
    assert_eq!(normalize("[]"), "");
}

#[test]
fn test_transcript_envelope() {
    let envelope = json!({"transcript": [{"speaker": "Ann", "text": "Hello"}]});
    assert_eq!(normalize(envelope.clone()), "Ann: Hello");
    assert_eq!(normalize(envelope.to_string()), "Ann: Hello");
}

#[test]
fn test_unexpected_types() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize(json!(42)), "42");
    assert_eq!(normalize(json!(false)), "false");
    assert_eq!(normalize(Value::Null), "");
    assert_eq!(normalize(json!({"words": 3})), r#"{"words":3}"#);
    assert_eq!(normalize("just words"), "just words");
}

#[test]
fn test_idempotent_on_output() {
    let inputs: Vec<TranscriptPayload> = vec![
        "Alice: Hello there".into(),
        "  plain words  ".into(),
        "".into(),
        "[{'speaker': 'Ann', 'text': 'Hello'}]".into(),
        json!([{"speaker": "Bob", "text": " Hi "}, {"text": "No speaker"}]).into(),
        json!(42).into(),
        json!({"a": 1}).into(),
        Value::Null.into(),
    ];

    for input in inputs {
        let once = normalize(input.clone());
        assert_eq!(normalize(once.clone()), once, "not idempotent for {:?}", input);
    }
}

#[test]
fn test_pipeline_without_quoted_pairs() {
    let normalizer = TranscriptNormalizer::with_strategies(vec![
        Box::new(PreformattedStrategy::new()),
        Box::new(JsonSegmentsStrategy::new()),
        Box::new(StructuredStrategy::new()),
        Box::new(PlainTextStrategy::new()),
    ]);

    let artifact = "[{'speaker': 'Ann', 'text': 'Hello'}]";
    assert_eq!(normalizer.run(&artifact.into()), artifact);
    assert_eq!(normalizer.run(&"Ann: Hi".into()), "Ann: Hi");
}

#[test]
fn test_empty_pipeline_still_coerces() {
    let normalizer = TranscriptNormalizer::with_strategies(Vec::new());
    assert_eq!(normalizer.run(&"  text  ".into()), "text");
    assert_eq!(normalizer.run(&json!(7).into()), "7");
}

#[test]
fn test_preview_of_normalized_text() {
    let long = json!([{"speaker": "Ann", "text": "ü".repeat(400)}]);
    let text = normalize(long);
    let cut = preview(&text, 300);

    assert_eq!(cut.chars().count(), 303);
    assert!(cut.starts_with("Ann: ü"));
    assert!(cut.ends_with("ü..."));
}
