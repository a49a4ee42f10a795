//! 실행 옵션 값 객체(CLI/라이브러리 호출 공용).

use std::path::PathBuf;

use crate::domain::task::TaskKind;

/// 설정 파일 값을 실행 시점에 덮어쓰는 옵션.
#[derive(Debug, Clone, Default)]
pub struct ClientOverrides {
    pub model: Option<String>,
    pub max_tokens: Option<u32>,
}

/// 작업 입력 출처.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskInput {
    Inline(String),
    File(PathBuf),
    /// EOF까지 표준입력을 읽는다
    Stdin,
}

#[derive(Debug, Clone)]
pub struct TaskRunOptions {
    pub kind: TaskKind,
    pub input: TaskInput,
    /// 레거시 엔진 경로 사용 여부(리뷰 작업 전용)
    pub legacy: bool,
    pub overrides: ClientOverrides,
}

#[derive(Debug, Clone, Default)]
pub struct CiRunOptions {
    pub remote: Option<String>,
    pub base_branch: Option<String>,
    /// diff 사본 저장 경로(미지정 시 설정값)
    pub diff_output: Option<String>,
    /// diff 파일 저장을 끈다
    pub no_diff_file: bool,
    pub overrides: ClientOverrides,
}

/// git diff 실행 사양(설정 + CLI 옵션 해석 결과).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffSpec {
    pub remote: String,
    pub base_branch: String,
    pub excludes: Vec<String>,
    /// diff 사본 저장 경로(`None`이면 저장하지 않음)
    pub output: Option<PathBuf>,
}

impl DiffSpec {
    /// 비교 기준 ref(`origin/develop` 형식).
    pub fn upstream_ref(&self) -> String {
        format!("{}/{}", self.remote, self.base_branch)
    }
}
