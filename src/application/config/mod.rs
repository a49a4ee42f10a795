//! 애플리케이션이 사용하는 설정 스키마(순수 데이터)와 검증된 런타임 설정.
//!
//! 주의: 파일/환경변수/프로세스 접근은 `infrastructure`에서만 수행한다.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::application::error::ReviewerError;
use crate::domain::sampling::SamplingOptions;

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo-instruct";
pub const DEFAULT_MAX_TOKENS: u32 = 150;
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_CI_REMOTE: &str = "origin";
pub const DEFAULT_CI_BASE_BRANCH: &str = "develop";
pub const DEFAULT_CI_DIFF_OUTPUT: &str = "pr.diff";
pub const DEFAULT_CI_EXCLUDES: [&str; 3] = ["package-lock.json", "tsconfig.json", "dist/"];

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// 완성 엔드포인트 연결 설정
    #[serde(default)]
    pub openai: OpenAiConfig,
    /// 클라이언트 기본 샘플링 옵션(미지정 필드는 기본 테이블 값)
    #[serde(default)]
    pub sampling: SamplingOptions,
    /// CI 리뷰(git diff) 설정
    #[serde(default)]
    pub ci: CiConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct OpenAiConfig {
    /// 인증 키(직접값, 권장하지 않음)
    pub api_key: Option<String>,
    /// 인증 키를 읽을 환경변수 이름
    pub api_key_env: Option<String>,
    pub model: Option<String>,
    pub max_tokens: Option<u32>,
    /// API base URL override(선택)
    pub api_base: Option<String>,
    /// 요청 타임아웃(초)
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct CiConfig {
    pub remote: Option<String>,
    pub base_branch: Option<String>,
    /// diff에서 제외할 경로
    pub exclude: Option<Vec<String>>,
    /// diff 사본을 저장할 파일 경로
    pub diff_output: Option<String>,
}

impl Config {
    /// 후순위(나중 파일) 값으로 덮어쓰는 병합 규칙.
    pub fn merge_from(&mut self, other: Config) {
        self.openai.merge_from(other.openai);
        self.sampling.merge_from(other.sampling);
        self.ci.merge_from(other.ci);
    }

    pub fn model(&self) -> String {
        self.openai
            .model
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL.to_string())
    }

    pub fn max_tokens(&self) -> u32 {
        self.openai.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS)
    }

    pub fn api_base(&self) -> String {
        self.openai
            .api_base
            .clone()
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
    }

    pub fn api_key_env(&self) -> String {
        self.openai
            .api_key_env
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_KEY_ENV)
            .to_string()
    }

    pub fn timeout_secs(&self) -> u64 {
        self.openai.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }

    /// 기본 테이블 위에 설정 파일의 샘플링 값을 덮어쓴다.
    pub fn effective_sampling(&self) -> SamplingOptions {
        SamplingOptions::client_defaults().merged(self.sampling.clone())
    }
}

impl OpenAiConfig {
    pub fn merge_from(&mut self, other: OpenAiConfig) {
        if other.api_key.is_some() {
            self.api_key = other.api_key;
        }
        if other.api_key_env.is_some() {
            self.api_key_env = other.api_key_env;
        }
        if other.model.is_some() {
            self.model = other.model;
        }
        if other.max_tokens.is_some() {
            self.max_tokens = other.max_tokens;
        }
        if other.api_base.is_some() {
            self.api_base = other.api_base;
        }
        if other.timeout_secs.is_some() {
            self.timeout_secs = other.timeout_secs;
        }
    }
}

impl CiConfig {
    pub fn remote(&self) -> String {
        self.remote
            .clone()
            .unwrap_or_else(|| DEFAULT_CI_REMOTE.to_string())
    }

    pub fn base_branch(&self) -> String {
        self.base_branch
            .clone()
            .unwrap_or_else(|| DEFAULT_CI_BASE_BRANCH.to_string())
    }

    pub fn excludes(&self) -> Vec<String> {
        self.exclude.clone().unwrap_or_else(|| {
            DEFAULT_CI_EXCLUDES
                .iter()
                .map(|s| s.to_string())
                .collect()
        })
    }

    pub fn diff_output(&self) -> String {
        self.diff_output
            .clone()
            .unwrap_or_else(|| DEFAULT_CI_DIFF_OUTPUT.to_string())
    }

    pub fn merge_from(&mut self, other: CiConfig) {
        if other.remote.is_some() {
            self.remote = other.remote;
        }
        if other.base_branch.is_some() {
            self.base_branch = other.base_branch;
        }
        if other.exclude.is_some() {
            self.exclude = other.exclude;
        }
        if other.diff_output.is_some() {
            self.diff_output = other.diff_output;
        }
    }
}

/// 리뷰 클라이언트 한 인스턴스가 소유하는 불변 설정.
#[derive(Clone)]
pub struct ReviewerConfig {
    api_key: String,
    model: String,
    max_tokens: u32,
    sampling: SamplingOptions,
}

impl ReviewerConfig {
    /// 자격 증명/모델/토큰 수를 검증해 설정을 만든다.
    /// 샘플링 옵션은 기본 테이블로 시작한다.
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        max_tokens: u32,
    ) -> Result<Self, ReviewerError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ReviewerError::Config("API key is empty".to_string()));
        }
        let model = model.into();
        if model.trim().is_empty() {
            return Err(ReviewerError::Config("model identifier is empty".to_string()));
        }
        if max_tokens == 0 {
            return Err(ReviewerError::Config(
                "max_tokens must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            api_key,
            model,
            max_tokens,
            sampling: SamplingOptions::client_defaults(),
        })
    }

    /// 기본 모델/토큰 수로 설정을 만든다.
    pub fn with_defaults(api_key: impl Into<String>) -> Result<Self, ReviewerError> {
        Self::new(api_key, DEFAULT_MODEL, DEFAULT_MAX_TOKENS)
    }

    pub fn with_sampling(mut self, sampling: SamplingOptions) -> Self {
        self.sampling = sampling;
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    pub fn sampling(&self) -> &SamplingOptions {
        &self.sampling
    }
}

impl fmt::Debug for ReviewerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReviewerConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("sampling", &self.sampling)
            .finish()
    }
}
