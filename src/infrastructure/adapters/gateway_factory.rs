//! 완성 게이트웨이 팩토리 포트 구현 어댑터.

use std::time::Duration;

use anyhow::Result;

use crate::application::config::{Config, ReviewerConfig};
use crate::application::ports::{CompletionGateway, GatewayFactory};
use crate::infrastructure::providers::OpenAiGateway;

pub struct OpenAiGatewayFactory;

impl GatewayFactory for OpenAiGatewayFactory {
    fn build(
        &self,
        config: &Config,
        reviewer: &ReviewerConfig,
    ) -> Result<Box<dyn CompletionGateway>> {
        let gateway = OpenAiGateway::new(
            &config.api_base(),
            reviewer.api_key(),
            Duration::from_secs(config.timeout_secs()),
        )?;
        Ok(Box::new(gateway))
    }
}
