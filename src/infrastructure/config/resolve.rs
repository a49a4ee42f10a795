//! 설정 값(api key/env)을 실제 런타임 값으로 해석하는 유틸리티.
//!
//! - 환경변수 접근은 인프라 계층에서만 수행한다.

use std::env;

use crate::application::config::Config;
use crate::application::ports::ApiKeyResolution;

/// API key를 해석한다. inline 값 우선, 없으면 `api_key_env` 환경변수를 읽는다.
pub fn resolve_api_key(config: &Config) -> ApiKeyResolution {
    resolve_api_key_with(config, |name| env::var(name).ok())
}

/// 환경 조회 함수를 주입받는 버전(테스트에서 프로세스 환경을 건드리지 않기 위함).
pub(crate) fn resolve_api_key_with(
    config: &Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> ApiKeyResolution {
    if let Some(key) = config
        .openai
        .api_key
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
    {
        return ApiKeyResolution {
            api_key: Some(key.to_string()),
            source: Some("inline".to_string()),
        };
    }

    let env_name = config.api_key_env();
    match lookup(&env_name).map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => ApiKeyResolution {
            api_key: Some(v),
            source: Some(format!("env:{env_name}")),
        },
        _ => ApiKeyResolution {
            api_key: None,
            source: Some(format!("env:{env_name} (missing)")),
        },
    }
}
