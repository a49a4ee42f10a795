//! 이력 분석 입력(저장소 경로 또는 계산된 diff) 값 객체.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistorySource {
    /// 분석 대상 저장소 경로(이력 탐색은 모델에 위임)
    RepoPath(String),
    /// 호출자가 미리 계산한 diff 본문
    Diff(String),
}

impl HistorySource {
    /// 자유 입력 문자열을 분류한다.
    /// 앞뒤 공백을 제거한 뒤 여러 줄이거나 diff 헤더/hunk 줄로 시작하면 diff, 그 외는 경로로 본다.
    pub fn from_input(input: &str) -> Self {
        let trimmed = input.trim();
        if looks_like_diff(trimmed) {
            Self::Diff(input.to_string())
        } else {
            Self::RepoPath(trimmed.to_string())
        }
    }
}

fn looks_like_diff(text: &str) -> bool {
    text.contains('\n')
        || text.starts_with("diff --git")
        || text.starts_with("@@")
        || text.starts_with('+')
        || text.starts_with('-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line_is_repo_path() {
        assert_eq!(
            HistorySource::from_input("  ./my-repo "),
            HistorySource::RepoPath("./my-repo".to_string())
        );
    }

    #[test]
    fn multi_line_or_header_is_diff() {
        assert!(matches!(
            HistorySource::from_input("a\nb"),
            HistorySource::Diff(_)
        ));
        assert!(matches!(
            HistorySource::from_input("diff --git a/x b/x"),
            HistorySource::Diff(_)
        ));
    }

    #[test]
    fn trailing_newline_keeps_repo_path() {
        assert_eq!(
            HistorySource::from_input("./my-repo\n"),
            HistorySource::RepoPath("./my-repo".to_string())
        );
    }

    #[test]
    fn single_hunk_line_is_diff() {
        assert_eq!(
            HistorySource::from_input("+let x = 1;"),
            HistorySource::Diff("+let x = 1;".to_string())
        );
        assert!(matches!(
            HistorySource::from_input("--- a/app.js"),
            HistorySource::Diff(_)
        ));
    }

    #[test]
    fn empty_input_stays_total() {
        assert_eq!(
            HistorySource::from_input(""),
            HistorySource::RepoPath(String::new())
        );
    }
}
