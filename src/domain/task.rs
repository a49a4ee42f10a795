//! 작업 종류(TaskKind)별 프롬프트/샘플링 override/빈 응답 정책 테이블.

use std::fmt;

use crate::domain::completion::wrap_doc_block;
use crate::domain::history::HistorySource;
use crate::domain::prompt;
use crate::domain::sampling::SamplingOptions;

/// 문서화 작업에서 choice가 비어 있을 때 반환하는 안내 문구.
pub const DOCUMENTATION_SENTINEL: &str = "No documentation generated for the provided code.";

/// 결정적 출력이 필요한 작업에 고정 적용하는 temperature.
pub const TASK_TEMPERATURE: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Review,
    AssistedReview,
    Document,
    Optimize,
    GenerateTests,
    SecurityAnalysis,
    StyleRecommendations,
    HistoricalAnalysis,
}

/// 응답에 choice 텍스트가 없을 때의 처리 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyCompletionPolicy {
    /// 고정 문구로 대체
    Sentinel(&'static str),
    /// 명시적 오류
    Fail,
}

impl TaskKind {
    pub const ALL: [TaskKind; 8] = [
        TaskKind::Review,
        TaskKind::AssistedReview,
        TaskKind::Document,
        TaskKind::Optimize,
        TaskKind::GenerateTests,
        TaskKind::SecurityAnalysis,
        TaskKind::StyleRecommendations,
        TaskKind::HistoricalAnalysis,
    ];

    /// CLI/로그용 짧은 식별자.
    pub fn code(self) -> &'static str {
        match self {
            Self::Review => "review",
            Self::AssistedReview => "assist",
            Self::Document => "document",
            Self::Optimize => "optimize",
            Self::GenerateTests => "tests",
            Self::SecurityAnalysis => "security",
            Self::StyleRecommendations => "style",
            Self::HistoricalAnalysis => "history",
        }
    }

    /// 입력 문자열로 프롬프트를 만든다.
    /// 이력 분석은 입력을 경로/diff로 분류해 템플릿을 고른다.
    pub fn build_prompt(self, input: &str) -> String {
        match self {
            Self::Review => prompt::review(input),
            Self::AssistedReview => prompt::assisted_review(input),
            Self::Document => prompt::documentation(input),
            Self::Optimize => prompt::optimize(input),
            Self::GenerateTests => prompt::unit_tests(input),
            Self::SecurityAnalysis => prompt::security_analysis(input),
            Self::StyleRecommendations => prompt::style_recommendations(input),
            Self::HistoricalAnalysis => {
                prompt::historical_analysis(&HistorySource::from_input(input))
            }
        }
    }

    /// 클라이언트 샘플링 옵션 위에 덮어쓸 작업별 값.
    pub fn overrides(self) -> SamplingOptions {
        match self {
            Self::Document => SamplingOptions {
                n: Some(1),
                temperature: Some(TASK_TEMPERATURE),
                stop: Some(vec!["*/".to_string()]),
                ..Default::default()
            },
            Self::GenerateTests | Self::StyleRecommendations | Self::HistoricalAnalysis => {
                SamplingOptions {
                    n: Some(1),
                    temperature: Some(TASK_TEMPERATURE),
                    ..Default::default()
                }
            }
            _ => SamplingOptions::default(),
        }
    }

    pub fn empty_completion_policy(self) -> EmptyCompletionPolicy {
        match self {
            Self::Document => EmptyCompletionPolicy::Sentinel(DOCUMENTATION_SENTINEL),
            _ => EmptyCompletionPolicy::Fail,
        }
    }

    /// 실패 시 모델 목록 조회를 안내할지 여부.
    pub fn advises_model_listing(self) -> bool {
        matches!(self, Self::Review | Self::AssistedReview)
    }

    /// 응답 텍스트 후처리. 문서화만 블록 마커를 보정한다.
    pub fn post_process(self, text: String) -> String {
        match self {
            Self::Document => wrap_doc_block(&text),
            _ => text,
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
