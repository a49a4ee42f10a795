//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use anyhow::Result;
use async_trait::async_trait;

use crate::application::config::{Config, ReviewerConfig};
use crate::application::error::{GatewayError, ReviewerError};
use crate::domain::completion::{
    CompletionPayload, CompletionResponse, LegacyCompletionPayload, ModelInfo,
};
use crate::domain::options::{DiffSpec, TaskInput};

/// 설정 로딩/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<Config>;
    fn inspect_pretty_json(&self) -> Result<String>;
}

/// API key 해석 결과(값과 출처 라벨).
#[derive(Debug, Clone, Default)]
pub struct ApiKeyResolution {
    pub api_key: Option<String>,
    pub source: Option<String>,
}

/// 설정/환경에서 API key를 찾는 포트.
pub trait ApiKeyResolver: Send + Sync {
    fn resolve(&self, config: &Config) -> ApiKeyResolution;
}

/// 완성 엔드포인트 호출 포트.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// 현재 경로: 모델/샘플링 옵션을 포함한 `/completions` 호출
    async fn create_completion(
        &self,
        payload: &CompletionPayload,
    ) -> Result<CompletionResponse, GatewayError>;
    /// 레거시 경로: 엔진 단위 `/engines/{engine}/completions` 호출
    async fn create_engine_completion(
        &self,
        engine: &str,
        payload: &LegacyCompletionPayload,
    ) -> Result<CompletionResponse, GatewayError>;
    /// 사용 가능한 모델 목록 조회
    async fn list_models(&self) -> Result<Vec<ModelInfo>, GatewayError>;
}

/// 설정에 맞는 완성 게이트웨이를 생성하는 팩토리 포트.
pub trait GatewayFactory: Send + Sync {
    fn build(
        &self,
        config: &Config,
        reviewer: &ReviewerConfig,
    ) -> Result<Box<dyn CompletionGateway>>;
}

/// 리뷰 대상 diff를 계산하는 포트(git 등 외부 프로세스).
#[async_trait]
pub trait DiffSource: Send + Sync {
    async fn compute_diff(&self) -> Result<String, ReviewerError>;
}

/// diff 사양에 맞는 DiffSource를 생성하는 팩토리 포트.
pub trait DiffSourceFactory: Send + Sync {
    fn build(&self, spec: &DiffSpec) -> Box<dyn DiffSource>;
}

/// 리뷰 입력 텍스트(인라인/파일/stdin)를 읽는 포트.
#[async_trait]
pub trait InputReader: Send + Sync {
    async fn read(&self, input: &TaskInput) -> Result<String>;
}

/// 콘솔/로그 출력 추상화 포트.
pub trait Reporter: Send + Sync {
    fn section(&self, name: &str);
    fn kv(&self, key: &str, value: &str);
    fn status(&self, scope: &str, message: &str);
    fn raw(&self, line: &str);
}
