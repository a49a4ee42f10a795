//! 적용 설정 진단(inspection) 뷰 모델.

use serde::Serialize;

use super::loader::LoadedConfig;
use super::resolve::resolve_api_key;
use crate::application::config::Config;
use crate::domain::sampling::SamplingOptions;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    pub openai: OpenAiInspection,
    pub sampling: SamplingOptions,
    pub ci: CiInspection,
}

/// API key 값은 노출하지 않고 출처만 보여준다.
#[derive(Debug, Clone, Serialize)]
pub struct OpenAiInspection {
    pub model: String,
    pub max_tokens: u32,
    pub api_base: String,
    pub timeout_secs: u64,
    pub api_key_source: Option<String>,
    pub api_key_resolved: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CiInspection {
    pub remote: String,
    pub base_branch: String,
    pub exclude: Vec<String>,
    pub diff_output: String,
}

impl ConfigInspection {
    pub(crate) fn from_loaded(loaded: LoadedConfig) -> Self {
        let config: &Config = &loaded.config;
        let key = resolve_api_key(config);

        Self {
            searched_paths: loaded
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            loaded_paths: loaded
                .loaded_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            openai: OpenAiInspection {
                model: config.model(),
                max_tokens: config.max_tokens(),
                api_base: config.api_base(),
                timeout_secs: config.timeout_secs(),
                api_key_source: key.source,
                api_key_resolved: key.api_key.is_some(),
            },
            sampling: config.effective_sampling(),
            ci: CiInspection {
                remote: config.ci.remote(),
                base_branch: config.ci.base_branch(),
                exclude: config.ci.excludes(),
                diff_output: config.ci.diff_output(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_key_is_never_serialized() {
        let mut config = Config::default();
        config.openai.api_key = Some("sk-very-secret".to_string());
        let inspection = ConfigInspection::from_loaded(LoadedConfig {
            config,
            searched_paths: Vec::new(),
            loaded_paths: Vec::new(),
        });

        let json = serde_json::to_string(&inspection).unwrap();
        assert!(!json.contains("sk-very-secret"));
        assert!(inspection.openai.api_key_resolved);
        assert_eq!(inspection.openai.api_key_source.as_deref(), Some("inline"));
    }
}
