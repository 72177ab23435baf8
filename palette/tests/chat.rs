mod common;

use std::time::Duration;

use color_palette::api::{ChatCompletionRequest, ChatMessage, ResponseFormat};
use color_palette::{ChatClient, OpenAiClient, PaletteConfig, TransportError};

fn sample_request() -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: "gpt-4.1-nano-2025-04-14".to_string(),
        temperature: 0.2,
        response_format: ResponseFormat::JsonObject,
        messages: vec![ChatMessage::system("system"), ChatMessage::user("user")],
    }
}

fn client_for(base_url: &str) -> OpenAiClient {
    let config = PaletteConfig::new("sk-test-key")
        .expect("config")
        .with_base_url(base_url)
        .with_timeout(Duration::from_secs(5));
    OpenAiClient::new(config).expect("client")
}

#[test]
fn complete_posts_json_with_bearer_auth() {
    let (base_url, rx) = common::serve_once(200, &common::completion_body(r#"{"colors":[]}"#));
    let client = client_for(&base_url);

    let content = client.complete(&sample_request()).expect("complete");
    assert_eq!(content.as_deref(), Some(r#"{"colors":[]}"#));

    let recorded = rx
        .recv_timeout(Duration::from_secs(5))
        .expect("receive recorded request");
    assert_eq!(recorded.request_line, "POST /v1/chat/completions HTTP/1.1");
    assert_eq!(recorded.header("authorization"), Some("Bearer sk-test-key"));
    assert_eq!(recorded.body["model"], "gpt-4.1-nano-2025-04-14");
    assert_eq!(recorded.body["response_format"]["type"], "json_object");
    assert_eq!(recorded.body["messages"][0]["role"], "system");
    assert_eq!(recorded.body["messages"][1]["content"], "user");
}

#[test]
fn complete_returns_none_when_choice_has_no_content() {
    let body = r#"{"choices":[{"index":0,"message":{"role":"assistant","content":null}}]}"#;
    let (base_url, _rx) = common::serve_once(200, body);
    let client = client_for(&base_url);

    let content = client.complete(&sample_request()).expect("complete");
    assert_eq!(content, None);
}

#[test]
fn complete_surfaces_error_status_with_body() {
    let body = r#"{"error":{"message":"Incorrect API key provided"}}"#;
    let (base_url, _rx) = common::serve_once(401, body);
    let client = client_for(&base_url);

    let err = client
        .complete(&sample_request())
        .expect_err("unauthorized");
    match err {
        TransportError::Status { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("Incorrect API key"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn complete_reports_connection_failures_as_http_errors() {
    // Nothing listens on the discard port.
    let client = client_for("http://127.0.0.1:9/v1");

    let err = client
        .complete(&sample_request())
        .expect_err("connection refused");
    assert!(matches!(err, TransportError::Http(_)));
}
