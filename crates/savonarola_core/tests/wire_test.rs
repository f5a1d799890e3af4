// Wire-format tests against realistic provider payloads.

use savonarola_core::{
    ApiErrorBody, ChatCompletionRequestBuilder, ChatCompletionResponse, ChatMessage, FinishReason,
    ResponseFormat, Role, Severity,
};
use serde_json::json;

#[test]
fn request_serializes_in_wire_form() {
    let request = ChatCompletionRequestBuilder::default()
        .messages(vec![
            ChatMessage::system("Be helpful"),
            ChatMessage::user("Hola"),
        ])
        .temperature(Some(1.0))
        .top_p(Some(1.0))
        .user(Some("3f2c1a9e".to_string()))
        .response_format(Some(ResponseFormat::Text))
        .max_tokens(Some(1000))
        .build()
        .unwrap();

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(
        value,
        json!({
            "messages": [
                { "role": "system", "content": "Be helpful" },
                { "role": "user", "content": "Hola" },
            ],
            "temperature": 1.0,
            "top_p": 1.0,
            "user": "3f2c1a9e",
            "response_format": { "type": "text" },
            "max_tokens": 1000,
        })
    );
}

#[test]
fn unset_optionals_are_omitted_from_the_wire() {
    let request = ChatCompletionRequestBuilder::default()
        .messages(vec![ChatMessage::user("Hola")])
        .build()
        .unwrap();

    let value = serde_json::to_value(&request).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.keys().collect::<Vec<_>>(), ["messages"]);
}

#[test]
fn successful_completion_parses() {
    let body = json!({
        "id": "chatcmpl-8abc",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "gpt-4",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": "Hola, humano." },
            "finish_reason": "stop",
            "content_filter_results": {
                "hate": { "filtered": false, "severity": "safe" },
                "self_harm": { "filtered": false, "severity": "safe" },
                "sexual": { "filtered": false, "severity": "safe" },
                "violence": { "filtered": false, "severity": "safe" },
            },
        }],
        "usage": { "prompt_tokens": 40, "completion_tokens": 12, "total_tokens": 52 },
    });

    let response: ChatCompletionResponse = serde_json::from_value(body).unwrap();
    let choice = &response.choices[0];

    assert_eq!(choice.message.role, Some(Role::Assistant));
    assert_eq!(choice.message.content.as_deref(), Some("Hola, humano."));
    assert_eq!(
        choice.finish_reason.as_deref().map(FinishReason::parse),
        Some(FinishReason::Stop)
    );
    assert!(!choice.content_filter_results.unwrap().hate.filtered);
    assert_eq!(response.usage.unwrap().total_tokens, 52);
}

#[test]
fn filtered_completion_parses_with_null_content() {
    let body = json!({
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": null },
            "finish_reason": "content_filter",
            "content_filter_results": {
                "hate": { "filtered": true, "severity": "high" },
                "self_harm": { "filtered": false, "severity": "safe" },
                "sexual": { "filtered": false, "severity": "safe" },
                "violence": { "filtered": false, "severity": "safe" },
            },
        }],
    });

    let response: ChatCompletionResponse = serde_json::from_value(body).unwrap();
    let choice = &response.choices[0];

    assert_eq!(choice.message.content, None);
    assert_eq!(
        choice.finish_reason.as_deref().map(FinishReason::parse),
        Some(FinishReason::ContentFilter)
    );

    let results = choice.content_filter_results.unwrap();
    assert!(results.hate.filtered);
    assert_eq!(results.hate.severity, Severity::High);
}

#[test]
fn content_policy_error_payload_parses() {
    let body = json!({
        "error": {
            "code": "content_filter",
            "message": "The response was filtered due to the prompt triggering Azure OpenAI's content management policy.",
            "innererror": {
                "code": "ResponsibleAIPolicyViolation",
                "content_filter_result": {
                    "hate": { "filtered": false, "severity": "safe" },
                    "self_harm": { "filtered": false, "severity": "safe" },
                    "sexual": { "filtered": false, "severity": "safe" },
                    "violence": { "filtered": true, "severity": "medium" },
                },
            },
        },
    });

    let parsed: ApiErrorBody = serde_json::from_value(body).unwrap();
    assert!(parsed.error.is_content_filter());

    let results = parsed.error.content_filter_result().unwrap();
    assert!(results.violence.filtered);
    assert_eq!(results.violence.severity, Severity::Medium);
}

#[test]
fn content_filter_code_matches_case_insensitively() {
    let body = json!({ "error": { "code": "Content_Filter", "message": "filtered" } });
    let parsed: ApiErrorBody = serde_json::from_value(body).unwrap();

    assert!(parsed.error.is_content_filter());
    assert!(parsed.error.content_filter_result().is_none());
}

#[test]
fn unrelated_error_code_is_not_content_filter() {
    let body = json!({
        "error": { "code": "DeploymentNotFound", "message": "The API deployment does not exist." },
    });
    let parsed: ApiErrorBody = serde_json::from_value(body).unwrap();

    assert!(!parsed.error.is_content_filter());
}

#[test]
fn malformed_error_payload_fails_to_parse() {
    assert!(serde_json::from_str::<ApiErrorBody>("{\"message\": \"oops\"}").is_err());
    assert!(serde_json::from_str::<ApiErrorBody>("upstream exploded").is_err());
}

#[test]
fn finish_reason_maps_known_wire_strings() {
    assert_eq!(FinishReason::parse("stop"), FinishReason::Stop);
    assert_eq!(FinishReason::parse("length"), FinishReason::Length);
    assert_eq!(FinishReason::parse("content_filter"), FinishReason::ContentFilter);
    assert_eq!(FinishReason::parse("tool_calls"), FinishReason::Other);
}
