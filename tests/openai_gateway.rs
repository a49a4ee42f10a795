//! reqwest 기반 게이트웨이를 로컬 mock HTTP 서버로 검증한다.

use std::time::Duration;

use reviewer::domain::task::DOCUMENTATION_SENTINEL;
use reviewer::{OpenAiGateway, Reviewer, ReviewerConfig, ReviewerError};
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// 요청 하나를 받아 고정 응답을 보내고, 받은 원문 요청을 돌려주는 서버.
async fn serve_once(status_line: &'static str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let body = body.to_string();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        request
    });

    (format!("http://127.0.0.1:{port}/v1"), handle)
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let Some(header_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
            continue;
        };
        let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
        let content_length = headers
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(0);
        if buf.len() >= header_end + 4 + content_length {
            break;
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn request_body(raw: &str) -> Value {
    let (_, body) = raw.split_once("\r\n\r\n").unwrap();
    serde_json::from_str(body).unwrap()
}

fn reviewer_for(base_url: &str) -> Reviewer {
    let config = ReviewerConfig::new("sk-test", "test-model", 64).unwrap();
    let gateway = OpenAiGateway::new(base_url, "sk-test", Duration::from_secs(5)).unwrap();
    Reviewer::new(config, Box::new(gateway))
}

#[tokio::test]
async fn optimize_posts_merged_payload_and_returns_first_choice() {
    let (base, server) = serve_once(
        "200 OK",
        r#"{"choices":[{"text":"function add(a,b){return a+b;}","index":0}]}"#,
    )
    .await;

    let out = reviewer_for(&base)
        .optimize_code("function add(a,b){return a+b}")
        .await
        .unwrap();
    assert_eq!(out, "function add(a,b){return a+b;}");

    let raw = server.await.unwrap();
    assert!(raw.starts_with("POST /v1/completions "), "{raw}");
    assert!(raw.to_lowercase().contains("authorization: bearer sk-test"));

    let body = request_body(&raw);
    let prompt = body["prompt"].as_str().unwrap();
    assert!(prompt.contains("Optimize the following code"));
    assert!(prompt.contains("function add(a,b){return a+b}"));
    assert_eq!(body["model"], "test-model");
    assert_eq!(body["max_tokens"], 64);
    assert_eq!(body["temperature"], 0.5);
    assert_eq!(body["echo"], false);
    assert!(body.get("logprobs").is_none());
}

#[tokio::test]
async fn document_request_carries_stop_sequence() {
    let (base, server) = serve_once("200 OK", r#"{"choices":[{"text":" * Adds.\n "}]}"#).await;

    let out = reviewer_for(&base)
        .generate_documentation("const add = (a, b) => a + b;")
        .await
        .unwrap();
    assert!(out.starts_with("/**"));
    assert!(out.ends_with("*/"));

    let body = request_body(&server.await.unwrap());
    assert_eq!(body["stop"], serde_json::json!(["*/"]));
    assert_eq!(body["n"], 1);
    assert_eq!(body["temperature"], 0.3);
}

#[tokio::test]
async fn document_with_no_choices_returns_sentinel() {
    let (base, server) = serve_once("200 OK", r#"{"choices":[]}"#).await;

    let out = reviewer_for(&base).generate_documentation("x").await.unwrap();
    assert_eq!(out, DOCUMENTATION_SENTINEL);
    server.await.unwrap();
}

#[tokio::test]
async fn other_tasks_reject_empty_choices() {
    let (base, server) = serve_once("200 OK", r#"{"choices":[]}"#).await;

    let err = reviewer_for(&base).security_analysis("x").await.unwrap_err();
    assert!(matches!(err, ReviewerError::EmptyCompletion { .. }), "{err}");
    server.await.unwrap();
}

#[tokio::test]
async fn legacy_review_targets_engine_route_with_minimal_body() {
    let (base, server) = serve_once("200 OK", r#"{"choices":[{"text":"looks fine"}]}"#).await;

    let out = reviewer_for(&base).submit_code_legacy("let a = 1").await.unwrap();
    assert_eq!(out, "looks fine");

    let raw = server.await.unwrap();
    assert!(raw.starts_with("POST /v1/engines/test-model/completions "), "{raw}");
    let body = request_body(&raw);
    let keys: Vec<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys.len(), 2);
    assert!(keys.contains(&"prompt"));
    assert!(keys.contains(&"max_tokens"));
}

#[tokio::test]
async fn api_error_message_is_unwrapped_and_labelled() {
    let (base, server) = serve_once(
        "401 Unauthorized",
        r#"{"error":{"message":"boom","type":"invalid_request_error"}}"#,
    )
    .await;

    let err = reviewer_for(&base).submit_code("x").await.unwrap_err();
    assert_eq!(err.to_string(), "OpenAI API error: boom");
    match err {
        ReviewerError::Api { status, .. } => assert_eq!(status, Some(401)),
        other => panic!("unexpected error: {other}"),
    }
    server.await.unwrap();
}

#[tokio::test]
async fn error_body_without_message_is_tolerated() {
    let (base, server) = serve_once("500 Internal Server Error", "{}").await;

    let err = reviewer_for(&base).generate_tests("x").await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "OpenAI API error: request failed with status 500"
    );
    server.await.unwrap();
}

#[tokio::test]
async fn malformed_success_body_is_an_api_error() {
    let (base, server) = serve_once("200 OK", "not json").await;

    let err = reviewer_for(&base).optimize_code("x").await.unwrap_err();
    let msg = err.to_string();
    assert!(msg.starts_with("OpenAI API error:"), "{msg}");
    assert!(msg.contains("invalid JSON"));
    server.await.unwrap();
}

#[tokio::test]
async fn models_are_returned_in_order() {
    let (base, server) = serve_once(
        "200 OK",
        r#"{"object":"list","data":[
            {"id":"gpt-3.5-turbo-instruct","object":"model","created":1692901427,"owned_by":"system"},
            {"id":"davinci-002","object":"model","created":1692634301,"owned_by":"system"}
        ]}"#,
    )
    .await;

    let models = reviewer_for(&base).current_models().await.unwrap();
    let ids: Vec<&str> = models.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["gpt-3.5-turbo-instruct", "davinci-002"]);
    assert_eq!(models[0].created, 1692901427);

    let raw = server.await.unwrap();
    assert!(raw.starts_with("GET /v1/models "), "{raw}");
}

#[tokio::test]
async fn connection_failure_is_labelled() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let err = reviewer_for(&format!("http://127.0.0.1:{port}/v1"))
        .submit_code_assistance_mode("x")
        .await
        .unwrap_err();
    assert!(err.to_string().starts_with("OpenAI API error:"), "{err}");
}

#[tokio::test]
async fn models_failure_is_labelled() {
    let (base, server) = serve_once(
        "403 Forbidden",
        r#"{"error":{"message":"boom","type":"insufficient_permissions"}}"#,
    )
    .await;

    let err = reviewer_for(&base).current_models().await.unwrap_err();
    assert_eq!(err.to_string(), "OpenAI API error: boom");
    match err {
        ReviewerError::Api { status, task, .. } => {
            assert_eq!(status, Some(403));
            assert!(task.is_none());
        }
        other => panic!("unexpected error: {other}"),
    }
    server.await.unwrap();
}
