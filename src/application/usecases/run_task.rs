//! 입력 코드 한 건에 대해 작업 하나를 실행하는 유스케이스.

use anyhow::{Context, Result, bail};
use tracing::info;

use crate::application::ports::InputReader;
use crate::application::usecases::session::ReviewerAssembly;
use crate::domain::options::{TaskInput, TaskRunOptions};
use crate::domain::task::TaskKind;

pub struct RunTaskUseCase<'a> {
    pub assembly: ReviewerAssembly<'a>,
    pub input_reader: &'a dyn InputReader,
}

impl<'a> RunTaskUseCase<'a> {
    /// 입력을 읽고 작업을 실행해 모델 응답 텍스트를 반환한다.
    pub async fn execute(&self, options: TaskRunOptions) -> Result<String> {
        if options.legacy && options.kind != TaskKind::Review {
            bail!("legacy engine route is only available for the review task");
        }

        // 자격 증명 확인을 stdin 대기보다 먼저 수행한다.
        let (_, reviewer) = self.assembly.build(&options.overrides)?;

        let code = self
            .input_reader
            .read(&options.input)
            .await
            .with_context(|| format!("failed to read input for {} task", options.kind))?;
        info!(
            task = %options.kind,
            source = input_label(&options.input),
            bytes = code.len(),
            "running task"
        );

        let output = if options.legacy {
            reviewer.submit_code_legacy(&code).await?
        } else {
            reviewer.run(options.kind, &code).await?
        };
        Ok(output)
    }
}

fn input_label(input: &TaskInput) -> &'static str {
    match input {
        TaskInput::Inline(_) => "inline",
        TaskInput::File(_) => "file",
        TaskInput::Stdin => "stdin",
    }
}
