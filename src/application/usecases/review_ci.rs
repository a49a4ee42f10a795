//! CI 환경에서 upstream 대비 diff를 계산해 리뷰하는 유스케이스.
//!
//! diff 계산(외부 프로세스)과 리뷰(완성 호출)를 명시적 두 단계로 나누고,
//! 호출자는 하나의 결과를 기다린다.

use std::path::PathBuf;

use anyhow::Result;
use tracing::{error, info};

use crate::application::config::CiConfig;
use crate::application::ports::{DiffSourceFactory, Reporter};
use crate::application::usecases::session::ReviewerAssembly;
use crate::domain::options::{CiRunOptions, DiffSpec};

pub struct ReviewOnCiUseCase<'a> {
    pub assembly: ReviewerAssembly<'a>,
    pub diff_factory: &'a dyn DiffSourceFactory,
    pub reporter: &'a dyn Reporter,
}

impl<'a> ReviewOnCiUseCase<'a> {
    /// diff 실패는 로그로 남기고 오류 값으로 반환한다. diff 크기 제한은 두지 않는다.
    pub async fn execute(&self, options: CiRunOptions) -> Result<String> {
        let (config, reviewer) = self.assembly.build(&options.overrides)?;
        let spec = resolve_diff_spec(&config.ci, &options);

        self.reporter.status("ci", "reviewing diff against upstream");
        self.reporter.kv("Upstream", &spec.upstream_ref());
        self.reporter.kv("Model", reviewer.config().model());
        if let Some(path) = &spec.output {
            self.reporter.kv("Diff File", &path.display().to_string());
        }

        self.reporter.status("git", "fetching and computing diff");
        let source = self.diff_factory.build(&spec);
        let diff = match source.compute_diff().await {
            Ok(diff) => diff,
            Err(err) => {
                error!(upstream = %spec.upstream_ref(), error = %err, "git diff failed");
                self.reporter.status("git", "failed");
                return Err(err.into());
            }
        };
        self.reporter.kv("Diff Bytes", &diff.len().to_string());
        info!(bytes = diff.len(), "diff ready, requesting review");

        self.reporter.status("review", "requesting completion");
        let feedback = reviewer.submit_code(&diff).await?;

        self.reporter.section("Code Review-ci Feedback");
        self.reporter.raw(&feedback);
        Ok(feedback)
    }
}

/// CLI 옵션이 설정 파일 값보다 우선한다.
pub(crate) fn resolve_diff_spec(ci: &CiConfig, options: &CiRunOptions) -> DiffSpec {
    let output = if options.no_diff_file {
        None
    } else {
        Some(PathBuf::from(
            options
                .diff_output
                .clone()
                .unwrap_or_else(|| ci.diff_output()),
        ))
    };

    DiffSpec {
        remote: options.remote.clone().unwrap_or_else(|| ci.remote()),
        base_branch: options
            .base_branch
            .clone()
            .unwrap_or_else(|| ci.base_branch()),
        excludes: ci.excludes(),
        output,
    }
}
