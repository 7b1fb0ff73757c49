//! Tests for request and chunk conversion.

use taleweaver_core::{GenerateRequest, Message, SamplingParams};
use taleweaver_error::GatewayErrorKind;
use taleweaver_interface::FinishReason;
use taleweaver_models::{
    ChatCompletionChunk, ChunkChoice, Delta,
    convert::{chunk_to_stream_chunk, to_chat_request},
};

#[test]
fn test_request_carries_roles_sampling_and_stream_flag() {
    let sampling = SamplingParams::new(1.2, 300, 0.8).unwrap();
    let request = GenerateRequest::new(
        vec![
            Message::system("rules"),
            Message::user("begin"),
            Message::assistant("once"),
        ],
        sampling,
    );

    let chat = to_chat_request(&request, "tiny-model").unwrap();

    assert_eq!(chat.model, "tiny-model");
    assert_eq!(chat.stream, Some(true));
    assert_eq!(chat.temperature, Some(1.2));
    assert_eq!(chat.max_tokens, Some(300));
    assert_eq!(chat.top_p, Some(0.8));
    let roles: Vec<_> = chat.messages.iter().map(|m| m.role.as_str()).collect();
    assert_eq!(roles, vec!["system", "user", "assistant"]);
    assert_eq!(chat.messages[2].content, "once");
}

#[test]
fn test_request_serializes_openai_shape() {
    let request = GenerateRequest::new(vec![Message::user("hi")], SamplingParams::default());
    let chat = to_chat_request(&request, "m").unwrap();

    let json = serde_json::to_value(&chat).unwrap();

    assert_eq!(json["stream"], true);
    assert_eq!(json["max_tokens"], 512);
    assert_eq!(json["messages"][0]["role"], "user");
    assert_eq!(json["messages"][0]["content"], "hi");
}

#[test]
fn test_empty_request_is_rejected() {
    let request = GenerateRequest::new(vec![], SamplingParams::default());

    let err = to_chat_request(&request, "m").unwrap_err();

    assert!(matches!(err.kind, GatewayErrorKind::InvalidRequest(_)));
}

#[test]
fn test_chunk_with_content_becomes_delta() {
    let chunk = ChatCompletionChunk {
        choices: vec![ChunkChoice {
            index: 0,
            delta: Delta {
                role: None,
                content: Some("潮水".into()),
            },
            finish_reason: None,
        }],
        ..Default::default()
    };

    let delta = chunk_to_stream_chunk(chunk);

    assert_eq!(delta.text(), "潮水");
    assert!(!delta.is_final());
}

#[test]
fn test_finish_reason_marks_final() {
    let chunk: ChatCompletionChunk = serde_json::from_str(
        r#"{"id":"x","choices":[{"index":0,"delta":{},"finish_reason":"length"}]}"#,
    )
    .unwrap();

    let delta = chunk_to_stream_chunk(chunk);

    assert_eq!(delta.text(), "");
    assert!(delta.is_final());
    assert_eq!(*delta.finish_reason(), Some(FinishReason::Length));
}

#[test]
fn test_chunk_without_choices_is_empty_delta() {
    let chunk: ChatCompletionChunk =
        serde_json::from_str(r#"{"id":"x","choices":[],"usage":{"total_tokens":3}}"#).unwrap();

    assert_eq!(chunk_to_stream_chunk(chunk).text(), "");
}
