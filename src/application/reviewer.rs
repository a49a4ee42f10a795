//! 작업 종류별 요청 조립/응답 해석을 담당하는 리뷰 클라이언트.

use tracing::{debug, warn};

use crate::application::config::ReviewerConfig;
use crate::application::error::{GatewayError, ReviewerError};
use crate::application::ports::CompletionGateway;
use crate::domain::completion::{
    CompletionPayload, CompletionResponse, LegacyCompletionPayload, ModelInfo,
};
use crate::domain::history::HistorySource;
use crate::domain::prompt;
use crate::domain::task::{EmptyCompletionPolicy, TaskKind};

/// 불변 설정과 완성 게이트웨이를 묶은 클라이언트.
/// 호출 간 공유 상태는 설정뿐이다.
pub struct Reviewer {
    config: ReviewerConfig,
    gateway: Box<dyn CompletionGateway>,
}

impl Reviewer {
    pub fn new(config: ReviewerConfig, gateway: Box<dyn CompletionGateway>) -> Self {
        Self { config, gateway }
    }

    pub fn config(&self) -> &ReviewerConfig {
        &self.config
    }

    /// `{prompt, model, max_tokens}` ← 클라이언트 샘플링 ← 작업별 override 순으로 병합한다.
    pub fn build_payload(&self, kind: TaskKind, input: &str) -> CompletionPayload {
        self.payload_for_prompt(kind, kind.build_prompt(input))
    }

    /// 작업 종류 하나를 현재 경로로 실행한다.
    pub async fn run(&self, kind: TaskKind, input: &str) -> Result<String, ReviewerError> {
        let payload = self.build_payload(kind, input);
        self.execute(kind, payload).await
    }

    pub async fn submit_code(&self, code: &str) -> Result<String, ReviewerError> {
        self.run(TaskKind::Review, code).await
    }

    /// 엔진 단위 레거시 경로로 리뷰한다. 본문에는 prompt/max_tokens만 담는다.
    pub async fn submit_code_legacy(&self, code: &str) -> Result<String, ReviewerError> {
        let kind = TaskKind::Review;
        let payload = LegacyCompletionPayload {
            prompt: kind.build_prompt(code),
            max_tokens: self.config.max_tokens(),
        };
        debug!(
            task = %kind,
            engine = self.config.model(),
            prompt_len = payload.prompt.len(),
            "dispatching legacy engine completion"
        );

        let response = self
            .gateway
            .create_engine_completion(self.config.model(), &payload)
            .await
            .map_err(|err| self.api_failure(kind, err))?;
        unwrap_completion(kind, &response)
    }

    pub async fn submit_code_assistance_mode(&self, code: &str) -> Result<String, ReviewerError> {
        self.run(TaskKind::AssistedReview, code).await
    }

    pub async fn generate_documentation(&self, code: &str) -> Result<String, ReviewerError> {
        self.run(TaskKind::Document, code).await
    }

    pub async fn optimize_code(&self, code: &str) -> Result<String, ReviewerError> {
        self.run(TaskKind::Optimize, code).await
    }

    pub async fn generate_tests(&self, code: &str) -> Result<String, ReviewerError> {
        self.run(TaskKind::GenerateTests, code).await
    }

    pub async fn security_analysis(&self, code: &str) -> Result<String, ReviewerError> {
        self.run(TaskKind::SecurityAnalysis, code).await
    }

    pub async fn code_style_recommendations(&self, code: &str) -> Result<String, ReviewerError> {
        self.run(TaskKind::StyleRecommendations, code).await
    }

    /// 저장소 경로 또는 계산된 diff로 변경 이력 분석을 요청한다.
    /// 실제 이력 탐색은 하지 않는다.
    pub async fn historical_analysis(
        &self,
        source: &HistorySource,
    ) -> Result<String, ReviewerError> {
        let kind = TaskKind::HistoricalAnalysis;
        let payload = self.payload_for_prompt(kind, prompt::historical_analysis(source));
        self.execute(kind, payload).await
    }

    /// 모델 목록을 순서 그대로 반환한다.
    pub async fn current_models(&self) -> Result<Vec<ModelInfo>, ReviewerError> {
        self.gateway
            .list_models()
            .await
            .map_err(|err| ReviewerError::api(None, err))
    }

    fn payload_for_prompt(&self, kind: TaskKind, prompt: String) -> CompletionPayload {
        CompletionPayload {
            prompt,
            model: self.config.model().to_string(),
            max_tokens: self.config.max_tokens(),
            sampling: self.config.sampling().merged(kind.overrides()),
        }
    }

    async fn execute(
        &self,
        kind: TaskKind,
        payload: CompletionPayload,
    ) -> Result<String, ReviewerError> {
        debug!(
            task = %kind,
            model = %payload.model,
            prompt_len = payload.prompt.len(),
            "dispatching completion"
        );

        let response = self
            .gateway
            .create_completion(&payload)
            .await
            .map_err(|err| self.api_failure(kind, err))?;
        unwrap_completion(kind, &response)
    }

    fn api_failure(&self, kind: TaskKind, err: GatewayError) -> ReviewerError {
        if kind.advises_model_listing() {
            warn!(
                task = %kind,
                model = self.config.model(),
                "completion request failed; list available models with `reviewer models`"
            );
        }
        ReviewerError::api(Some(kind), err)
    }
}

/// 첫 choice 텍스트를 꺼내고, 없으면 작업별 빈 응답 정책을 적용한다.
fn unwrap_completion(kind: TaskKind, response: &CompletionResponse) -> Result<String, ReviewerError> {
    match response.first_text() {
        Some(text) => Ok(kind.post_process(text.to_string())),
        None => match kind.empty_completion_policy() {
            EmptyCompletionPolicy::Sentinel(sentinel) => Ok(sentinel.to_string()),
            EmptyCompletionPolicy::Fail => Err(ReviewerError::EmptyCompletion { task: kind }),
        },
    }
}
