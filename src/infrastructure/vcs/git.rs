//! 로컬 git 저장소에서 upstream 대비 diff를 계산하는 DiffSource 구현.

use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use crate::application::error::ReviewerError;
use crate::application::ports::DiffSource;
use crate::domain::options::DiffSpec;

pub struct GitDiffSource {
    spec: DiffSpec,
    workdir: Option<PathBuf>,
}

impl GitDiffSource {
    pub fn new(spec: DiffSpec) -> Self {
        Self {
            spec,
            workdir: None,
        }
    }

    /// 현재 디렉터리 대신 지정 경로에서 git을 실행한다.
    pub fn with_workdir(mut self, workdir: impl Into<PathBuf>) -> Self {
        self.workdir = Some(workdir.into());
        self
    }

    async fn run_git(&self, args: &[String]) -> Result<String, ReviewerError> {
        let mut cmd = Command::new("git");
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.workdir {
            cmd.current_dir(dir);
        }

        let label = format!("git {}", args.first().map(String::as_str).unwrap_or_default());
        debug!(command = %label, "spawning");

        let output = cmd
            .output()
            .await
            .map_err(|err| ReviewerError::Process(format!("failed to run {label}: {err}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(ReviewerError::Process(format!(
                "{label} failed ({}): {}",
                output.status,
                if stderr.is_empty() {
                    "no stderr output"
                } else {
                    stderr.as_str()
                }
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[async_trait]
impl DiffSource for GitDiffSource {
    /// `git fetch <remote>` 후 `git diff <remote>/<base>`를 실행한다.
    /// 빈 diff나 대용량 diff도 그대로 반환한다.
    async fn compute_diff(&self) -> Result<String, ReviewerError> {
        self.run_git(&fetch_args(&self.spec)).await?;
        let diff = self.run_git(&diff_args(&self.spec)).await?;

        if let Some(path) = &self.spec.output {
            let target = match &self.workdir {
                Some(dir) if path.is_relative() => dir.join(path),
                _ => path.clone(),
            };
            tokio::fs::write(&target, &diff).await.map_err(|err| {
                ReviewerError::Process(format!(
                    "failed to write diff to {}: {err}",
                    target.display()
                ))
            })?;
            info!(path = %target.display(), bytes = diff.len(), "wrote diff file");
        }

        Ok(diff)
    }
}

pub(crate) fn fetch_args(spec: &DiffSpec) -> Vec<String> {
    vec!["fetch".to_string(), spec.remote.clone()]
}

/// 제외 경로는 `:!path` pathspec으로 전달한다.
pub(crate) fn diff_args(spec: &DiffSpec) -> Vec<String> {
    let mut args = vec![
        "diff".to_string(),
        spec.upstream_ref(),
        "--".to_string(),
        ".".to_string(),
    ];
    args.extend(spec.excludes.iter().map(|path| format!(":!{path}")));
    args
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> DiffSpec {
        DiffSpec {
            remote: "origin".to_string(),
            base_branch: "develop".to_string(),
            excludes: vec!["package-lock.json".to_string(), "dist/".to_string()],
            output: None,
        }
    }

    #[test]
    fn diff_args_exclude_paths() {
        assert_eq!(
            diff_args(&spec()),
            vec![
                "diff",
                "origin/develop",
                "--",
                ".",
                ":!package-lock.json",
                ":!dist/"
            ]
        );
        assert_eq!(fetch_args(&spec()), vec!["fetch", "origin"]);
    }

    #[tokio::test]
    async fn spawn_failure_becomes_process_error() {
        let missing = std::env::temp_dir().join(format!(
            "reviewer-missing-workdir-{}",
            std::process::id()
        ));
        let source = GitDiffSource::new(spec()).with_workdir(missing);

        let err = source.compute_diff().await.unwrap_err();
        assert!(matches!(err, ReviewerError::Process(_)), "{err}");
        assert!(err.to_string().contains("git fetch"));
    }
}
