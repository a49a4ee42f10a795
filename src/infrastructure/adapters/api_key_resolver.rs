//! API key 해석 포트 구현 어댑터.

use crate::application::config::Config;
use crate::application::ports::{ApiKeyResolution, ApiKeyResolver};
use crate::infrastructure::config::resolve_api_key;

/// inline 값 → 환경변수 순으로 키를 찾는다.
pub struct EnvApiKeyResolver;

impl ApiKeyResolver for EnvApiKeyResolver {
    fn resolve(&self, config: &Config) -> ApiKeyResolution {
        resolve_api_key(config)
    }
}
