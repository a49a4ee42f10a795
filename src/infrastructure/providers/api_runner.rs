//! 완성 API 호출 공용 유틸리티.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::application::error::GatewayError;

/// API 호출용 기본 HTTP 클라이언트를 생성한다.
pub fn build_api_client(timeout: Duration) -> Client {
    // TLS 설정 실패 등 예외 상황에서는 기본 클라이언트로 폴백한다.
    Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// JSON 응답을 기대하는 요청을 전송하고 실패/파싱 오류를 `GatewayError`로 표준화한다.
pub async fn send_json(action: &str, request: RequestBuilder) -> Result<Value, GatewayError> {
    let response = request
        .send()
        .await
        .map_err(|err| GatewayError::new(format!("failed to {action}: {err}")))?;

    let status = response.status();
    let body = response.text().await.map_err(|err| {
        GatewayError::with_status(
            status.as_u16(),
            Some(format!("failed to read {action} response body: {err}")),
        )
    })?;

    if !status.is_success() {
        return Err(GatewayError::with_status(
            status.as_u16(),
            extract_error_message(&body),
        ));
    }

    serde_json::from_str(&body).map_err(|err| {
        GatewayError::with_status(
            status.as_u16(),
            Some(format!("invalid JSON response while {action}: {err}")),
        )
    })
}

/// 응답 JSON을 기대 타입으로 변환한다.
pub fn decode<T: DeserializeOwned>(action: &str, value: Value) -> Result<T, GatewayError> {
    serde_json::from_value(value)
        .map_err(|err| GatewayError::new(format!("malformed response while {action}: {err}")))
}

/// 오류 응답 본문에서 메시지를 추출한다.
/// `{"error":{"message":..}}` 우선, JSON이 아니면 본문 텍스트, 메시지가 없으면 `None`.
pub fn extract_error_message(body: &str) -> Option<String> {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        return value
            .pointer("/error/message")
            .and_then(Value::as_str)
            .or_else(|| value.get("message").and_then(Value::as_str))
            .or_else(|| value.get("error").and_then(Value::as_str))
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string);
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
