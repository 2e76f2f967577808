use workshop::WorkshopError;
use workshop::ai::client::{ANTHROPIC_VERSION, build_request_body, parse_response_body};

#[test]
fn test_request_body_is_single_user_message() {
    let body = build_request_body("Respond to: hi", 150);

    assert_eq!(body["anthropic_version"], ANTHROPIC_VERSION);
    assert_eq!(body["max_tokens"], 150);
    assert_eq!(body["temperature"], 0.7);
    assert_eq!(body["top_p"], 0.9);

    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["role"], "user");
    assert_eq!(messages[0]["content"], "Respond to: hi");
}

#[test]
fn test_response_first_text_block_is_trimmed() {
    let raw = br#"{
        "id": "msg_01",
        "type": "message",
        "role": "assistant",
        "content": [
            { "type": "text", "text": "  Hello from Bedrock!\n" },
            { "type": "text", "text": "ignored" }
        ],
        "stop_reason": "end_turn"
    }"#;

    assert_eq!(parse_response_body(raw).unwrap(), "Hello from Bedrock!");
}

#[test]
fn test_response_shape_errors() {
    let cases: [&[u8]; 5] = [
        b"not json",
        br#"{"stop_reason":"end_turn"}"#,
        br#"{"content":[]}"#,
        br#"{"content":[{"type":"tool_use","id":"t1"}]}"#,
        br#"{"content":[{"type":"text","text":"   "}]}"#,
    ];

    for raw in cases {
        let err = parse_response_body(raw).unwrap_err();
        assert!(
            matches!(err, WorkshopError::InferenceError(_)),
            "Expected inference error for {}",
            String::from_utf8_lossy(raw)
        );
    }
}
