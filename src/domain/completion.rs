//! 완성 요청/응답 값 객체와 응답 후처리 규칙.

use serde::{Deserialize, Serialize};

use crate::domain::sampling::SamplingOptions;

pub const DOC_BLOCK_OPEN: &str = "/**";
pub const DOC_BLOCK_CLOSE: &str = "*/";

/// 현재 경로(`/completions`) 요청 본문. 호출마다 새로 구성한다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionPayload {
    pub prompt: String,
    pub model: String,
    pub max_tokens: u32,
    #[serde(flatten)]
    pub sampling: SamplingOptions,
}

/// 레거시 경로(`/engines/{model}/completions`) 요청 본문.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegacyCompletionPayload {
    pub prompt: String,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompletionChoice {
    #[serde(default)]
    pub text: Option<String>,
}

impl CompletionResponse {
    /// 첫 번째 choice의 텍스트만 사용한다.
    pub fn first_text(&self) -> Option<&str> {
        self.choices.first().and_then(|c| c.text.as_deref())
    }

    /// 단일 텍스트 응답을 만든다(테스트/스텁용).
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            choices: vec![CompletionChoice {
                text: Some(text.into()),
            }],
        }
    }
}

/// 모델 목록 엔드포인트 항목.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub id: String,
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub owned_by: String,
}

/// 문서화 결과를 `/** ... */` 블록으로 감싼다.
/// 앞뒤 공백을 무시하고 판정하므로 여러 번 적용해도 결과가 같다.
pub fn wrap_doc_block(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    if !text.trim_start().starts_with(DOC_BLOCK_OPEN) {
        out.push_str(DOC_BLOCK_OPEN);
        out.push('\n');
    }
    out.push_str(text);
    if !text.trim_end().ends_with(DOC_BLOCK_CLOSE) {
        out.push('\n');
        out.push_str(DOC_BLOCK_CLOSE);
    }
    out
}
