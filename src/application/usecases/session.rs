//! 설정 로딩 → 자격 증명 해석 → 게이트웨이 생성까지 리뷰 클라이언트 조립 단계.

use anyhow::{Context, Result};
use tracing::debug;

use crate::application::config::{Config, ReviewerConfig};
use crate::application::error::ReviewerError;
use crate::application::ports::{ApiKeyResolver, ConfigRepository, GatewayFactory};
use crate::application::reviewer::Reviewer;
use crate::domain::options::ClientOverrides;

/// 유스케이스들이 공유하는 클라이언트 조립기.
#[derive(Clone, Copy)]
pub struct ReviewerAssembly<'a> {
    pub config_repo: &'a dyn ConfigRepository,
    pub key_resolver: &'a dyn ApiKeyResolver,
    pub gateway_factory: &'a dyn GatewayFactory,
}

impl<'a> ReviewerAssembly<'a> {
    /// 자격 증명이 없으면 네트워크 호출 전에 설정 오류로 중단한다.
    pub fn build(&self, overrides: &ClientOverrides) -> Result<(Config, Reviewer)> {
        let config = self
            .config_repo
            .load()
            .context("failed to load configuration")?;

        let resolution = self.key_resolver.resolve(&config);
        let Some(api_key) = resolution.api_key else {
            return Err(
                ReviewerError::Config(format!("{} is not set", config.api_key_env())).into(),
            );
        };
        debug!(source = resolution.source.as_deref().unwrap_or("-"), "resolved API key");

        let model = overrides.model.clone().unwrap_or_else(|| config.model());
        let max_tokens = overrides.max_tokens.unwrap_or_else(|| config.max_tokens());
        let reviewer_config = ReviewerConfig::new(api_key, model, max_tokens)?
            .with_sampling(config.effective_sampling());

        let gateway = self
            .gateway_factory
            .build(&config, &reviewer_config)
            .context("failed to build completion client")?;

        Ok((config, Reviewer::new(reviewer_config, gateway)))
    }
}
