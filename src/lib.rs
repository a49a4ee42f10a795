//! reviewer library root.
//! 코드 조각을 작업별 프롬프트로 감싸 완성 모델에 보내고 응답 텍스트를 돌려준다.
//! Clean Architecture + DDD 계층을 외부에 노출한다.

use anyhow::Result;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

pub use application::config::ReviewerConfig;
pub use application::error::{GatewayError, ReviewerError};
pub use application::reviewer::Reviewer;
pub use domain::history::HistorySource;
pub use domain::task::TaskKind;
pub use infrastructure::providers::OpenAiGateway;

use domain::options::TaskRunOptions;
use interface::cli::AppComposition;

/// 라이브러리 직접 호출용 실행 함수(설정 파일/환경변수 기반).
pub async fn run_task(options: TaskRunOptions) -> Result<String> {
    let composition = AppComposition::default();
    composition.run_task_usecase().execute(options).await
}

/// 설정 점검 JSON 출력용 함수.
pub fn inspect_config_pretty_json() -> Result<String> {
    let composition = AppComposition::default();
    composition.inspect_config_usecase().execute()
}
