//! 작업 종류별 프롬프트 템플릿.
//!
//! 모든 함수는 순수 함수이며 입력을 검증하지 않는다(빈 문자열/대용량 입력 모두 그대로 삽입).

use crate::domain::history::HistorySource;

pub const REVIEW_LEAD: &str = "Review the part of code:";
pub const REVIEW_CUE: &str =
    "Provide feedback how this part of JavaScript code can be improved from optimal perspective:";

pub const ASSISTED_REVIEW_LEAD: &str =
    "Review the following JavaScript code. Identify potential bugs, improvements, and anti-patterns:";
pub const ASSISTED_REVIEW_CUE: &str = "Code review report:";

pub const DOCUMENTATION_LEAD: &str = "Generate detailed JSDoc documentation for the following JavaScript code snippet. Only include documentation if the code contains functions, classes, or other elements that require JSDoc annotations. If there is nothing to document, return \"No documentation needed\".";
pub const DOCUMENTATION_CUE: &str = "Documentation:";

pub const OPTIMIZE_LEAD: &str = "Optimize the following code for performance and readability:";
pub const OPTIMIZE_CUE: &str = "Optimized Code:";

pub const TESTS_LEAD: &str = "Generate js jest unit tests for the following code:";
pub const TESTS_CUE: &str = "Unit Tests:";

pub const SECURITY_LEAD: &str =
    "Analyze the following code for potential security vulnerabilities and suggest fixes:";
pub const SECURITY_CUE: &str = "Security Analysis:";

pub const STYLE_LEAD: &str =
    "Provide style recommendations for the following code according to best practices:";
pub const STYLE_CUE: &str = "Style Recommendations:";

pub const HISTORY_CUE: &str = "Analysis:";

const DOCUMENTATION_EXAMPLE: &str = r#"/**
 * Adds two numbers together.
 *
 * @param {number} a - The first number.
 * @param {number} b - The second number.
 * @returns {number} The sum of the two numbers.
 */"#;

/// 일반 리뷰(현재/레거시 경로 공용) 프롬프트.
pub fn review(code: &str) -> String {
    format!("{REVIEW_LEAD}\n{code}\n\n{REVIEW_CUE}\n")
}

/// 버그/개선점/안티패턴 중심의 보조 리뷰 프롬프트.
pub fn assisted_review(code: &str) -> String {
    format!("{ASSISTED_REVIEW_LEAD}\n{code}\n\n{ASSISTED_REVIEW_CUE}\n")
}

/// JSDoc 생성 프롬프트. 예시 블록으로 출력 형식을 고정한다.
pub fn documentation(code: &str) -> String {
    format!(
        "{DOCUMENTATION_LEAD}\n\nExample:\n{DOCUMENTATION_EXAMPLE}\n\nCode:\n{code}\n\n{DOCUMENTATION_CUE}\n"
    )
}

pub fn optimize(code: &str) -> String {
    format!(
        "{OPTIMIZE_LEAD}\n{code}\nIf there is nothing to optimize, return \"No optimization needed.\"\n{OPTIMIZE_CUE}"
    )
}

pub fn unit_tests(code: &str) -> String {
    format!("{TESTS_LEAD}\n{code}\n{TESTS_CUE}")
}

pub fn security_analysis(code: &str) -> String {
    format!(
        "{SECURITY_LEAD}\n{code}\nIf there are no security issues, return \"No security issues found.\"\n{SECURITY_CUE}"
    )
}

pub fn style_recommendations(code: &str) -> String {
    format!("{STYLE_LEAD}\n{code}\n{STYLE_CUE}")
}

/// 변경 이력 분석 프롬프트.
/// 저장소 경로가 오면 경로만 전달하고, diff가 오면 본문을 그대로 삽입한다.
pub fn historical_analysis(source: &HistorySource) -> String {
    match source {
        HistorySource::RepoPath(path) => format!(
            "Analyze the code changes history for the repository at {path} and provide improvement recommendations.\n{HISTORY_CUE}"
        ),
        HistorySource::Diff(diff) => format!(
            "Analyze the following code changes history and provide improvement recommendations:\n{diff}\n{HISTORY_CUE}"
        ),
    }
}
