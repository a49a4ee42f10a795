//! 사용 가능한 모델 목록 조회 유스케이스.

use anyhow::Result;

use crate::application::usecases::session::ReviewerAssembly;
use crate::domain::completion::ModelInfo;
use crate::domain::options::ClientOverrides;

pub struct ListModelsUseCase<'a> {
    pub assembly: ReviewerAssembly<'a>,
}

impl<'a> ListModelsUseCase<'a> {
    /// 엔드포인트가 돌려준 순서를 그대로 유지한다.
    pub async fn execute(&self, overrides: &ClientOverrides) -> Result<Vec<ModelInfo>> {
        let (_, reviewer) = self.assembly.build(overrides)?;
        Ok(reviewer.current_models().await?)
    }
}
