//! 리뷰 클라이언트 오류 분류.

use std::fmt;

use thiserror::Error;

use crate::domain::task::TaskKind;

/// 외부 완성/모델 엔드포인트 호출 실패.
/// 메시지 필드가 없는 응답도 수용해야 하므로 모든 필드가 선택값이다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GatewayError {
    pub status: Option<u16>,
    pub message: Option<String>,
}

impl GatewayError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: Some(message.into()),
        }
    }

    pub fn with_status(status: u16, message: Option<String>) -> Self {
        Self {
            status: Some(status),
            message,
        }
    }

    /// 메시지가 없으면 상태 코드 또는 기본 문구로 대체한다.
    pub fn describe(&self) -> String {
        match (&self.message, self.status) {
            (Some(message), _) if !message.trim().is_empty() => message.clone(),
            (_, Some(status)) => format!("request failed with status {status}"),
            _ => "unknown error".to_string(),
        }
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl std::error::Error for GatewayError {}

#[derive(Debug, Error)]
pub enum ReviewerError {
    /// 자격 증명 누락 등 시작 시점 설정 오류
    #[error("configuration error: {0}")]
    Config(String),

    /// 완성/모델 엔드포인트 호출 실패
    #[error("OpenAI API error: {message}")]
    Api {
        task: Option<TaskKind>,
        status: Option<u16>,
        message: String,
    },

    #[error("empty completion for {task} task")]
    EmptyCompletion { task: TaskKind },

    /// 외부 프로세스(git) 실행 실패
    #[error("process error: {0}")]
    Process(String),
}

impl ReviewerError {
    pub fn api(task: Option<TaskKind>, err: GatewayError) -> Self {
        Self::Api {
            task,
            status: err.status,
            message: err.describe(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_is_prefixed_and_keeps_message() {
        let err = ReviewerError::api(Some(TaskKind::Optimize), GatewayError::new("boom"));
        assert_eq!(err.to_string(), "OpenAI API error: boom");
        assert!(matches!(
            err,
            ReviewerError::Api {
                task: Some(TaskKind::Optimize),
                status: None,
                ..
            }
        ));
    }

    #[test]
    fn missing_message_is_tolerated() {
        let err = ReviewerError::api(None, GatewayError::default());
        assert_eq!(err.to_string(), "OpenAI API error: unknown error");

        let err = ReviewerError::api(None, GatewayError::with_status(502, None));
        assert_eq!(err.to_string(), "OpenAI API error: request failed with status 502");
    }
}
