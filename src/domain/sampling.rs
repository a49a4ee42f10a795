//! 완성(completion) 요청 샘플링 옵션과 병합 규칙.

use serde::{Deserialize, Serialize};

/// 엔드포인트 수준 샘플링 파라미터.
/// `None` 필드는 요청 본문에서 생략된다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SamplingOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<f64>,
    /// 생성할 샘플 수
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_of: Option<u32>,
    /// 반환할 log-probability 개수(기본 null)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logprobs: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub echo: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
}

impl SamplingOptions {
    /// 클라이언트 기본 샘플링 옵션.
    pub fn client_defaults() -> Self {
        Self {
            temperature: Some(0.5),
            top_p: Some(1.0),
            frequency_penalty: Some(0.0),
            presence_penalty: Some(0.0),
            n: Some(1),
            best_of: Some(1),
            logprobs: None,
            echo: Some(false),
            stop: None,
        }
    }

    /// 후순위 값으로 덮어쓰는 병합 규칙(`None`은 기존 값을 지우지 않는다).
    pub fn merge_from(&mut self, other: SamplingOptions) {
        if other.temperature.is_some() {
            self.temperature = other.temperature;
        }
        if other.top_p.is_some() {
            self.top_p = other.top_p;
        }
        if other.frequency_penalty.is_some() {
            self.frequency_penalty = other.frequency_penalty;
        }
        if other.presence_penalty.is_some() {
            self.presence_penalty = other.presence_penalty;
        }
        if other.n.is_some() {
            self.n = other.n;
        }
        if other.best_of.is_some() {
            self.best_of = other.best_of;
        }
        if other.logprobs.is_some() {
            self.logprobs = other.logprobs;
        }
        if other.echo.is_some() {
            self.echo = other.echo;
        }
        if other.stop.is_some() {
            self.stop = other.stop;
        }
    }

    /// 복사본에 overrides를 병합해 반환한다.
    pub fn merged(&self, overrides: SamplingOptions) -> Self {
        let mut out = self.clone();
        out.merge_from(overrides);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_win_field_by_field() {
        let base = SamplingOptions::client_defaults();
        let merged = base.merged(SamplingOptions {
            temperature: Some(0.3),
            stop: Some(vec!["*/".to_string()]),
            ..Default::default()
        });

        assert_eq!(merged.temperature, Some(0.3));
        assert_eq!(merged.stop.as_deref(), Some(&["*/".to_string()][..]));
        assert_eq!(merged.top_p, Some(1.0));
        assert_eq!(merged.echo, Some(false));
    }

    #[test]
    fn none_never_clears_existing_value() {
        let mut base = SamplingOptions::client_defaults();
        base.merge_from(SamplingOptions::default());
        assert_eq!(base, SamplingOptions::client_defaults());
    }

    #[test]
    fn null_fields_are_omitted_from_json() {
        let value = serde_json::to_value(SamplingOptions::client_defaults()).unwrap();
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("logprobs"));
        assert!(!obj.contains_key("stop"));
        assert_eq!(obj["n"], 1);
        assert_eq!(obj["echo"], false);
    }
}
