//! 애플리케이션 조립(composition root) 모듈.

use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::application::usecases::list_models::ListModelsUseCase;
use crate::application::usecases::review_ci::ReviewOnCiUseCase;
use crate::application::usecases::run_task::RunTaskUseCase;
use crate::application::usecases::session::ReviewerAssembly;
use crate::infrastructure::adapters::{
    ConsoleReporter, EnvApiKeyResolver, GitDiffSourceFactory, JsonConfigRepository,
    OpenAiGatewayFactory, StdInputReader,
};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    config_repo: JsonConfigRepository,
    key_resolver: EnvApiKeyResolver,
    gateway_factory: OpenAiGatewayFactory,
    diff_factory: GitDiffSourceFactory,
    input_reader: StdInputReader,
    reporter: ConsoleReporter,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self {
            config_repo: JsonConfigRepository,
            key_resolver: EnvApiKeyResolver,
            gateway_factory: OpenAiGatewayFactory,
            diff_factory: GitDiffSourceFactory,
            input_reader: StdInputReader,
            reporter: ConsoleReporter::default(),
        }
    }
}

impl AppComposition {
    fn assembly(&self) -> ReviewerAssembly<'_> {
        ReviewerAssembly {
            config_repo: &self.config_repo,
            key_resolver: &self.key_resolver,
            gateway_factory: &self.gateway_factory,
        }
    }

    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            config_repo: &self.config_repo,
        }
    }

    /// 단일 작업 실행 유스케이스를 생성한다.
    pub fn run_task_usecase(&self) -> RunTaskUseCase<'_> {
        RunTaskUseCase {
            assembly: self.assembly(),
            input_reader: &self.input_reader,
        }
    }

    /// CI diff 리뷰 유스케이스를 생성한다.
    pub fn review_ci_usecase(&self) -> ReviewOnCiUseCase<'_> {
        ReviewOnCiUseCase {
            assembly: self.assembly(),
            diff_factory: &self.diff_factory,
            reporter: &self.reporter,
        }
    }

    /// 모델 목록 조회 유스케이스를 생성한다.
    pub fn list_models_usecase(&self) -> ListModelsUseCase<'_> {
        ListModelsUseCase {
            assembly: self.assembly(),
        }
    }
}
