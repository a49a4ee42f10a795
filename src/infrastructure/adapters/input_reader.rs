//! 리뷰 입력 읽기 포트 구현 어댑터.

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::io::AsyncReadExt;

use crate::application::ports::InputReader;
use crate::domain::options::TaskInput;

/// 인라인 문자열/파일/표준입력(EOF까지)을 읽는다.
pub struct StdInputReader;

#[async_trait]
impl InputReader for StdInputReader {
    async fn read(&self, input: &TaskInput) -> Result<String> {
        match input {
            TaskInput::Inline(code) => Ok(code.clone()),
            TaskInput::File(path) => tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("failed to read {}", path.display())),
            TaskInput::Stdin => {
                let mut buf = String::new();
                tokio::io::stdin()
                    .read_to_string(&mut buf)
                    .await
                    .context("failed to read code from stdin")?;
                Ok(buf)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[tokio::test]
    async fn inline_input_is_returned_verbatim() {
        let code = StdInputReader
            .read(&TaskInput::Inline("let a = 1;\n".to_string()))
            .await
            .unwrap();
        assert_eq!(code, "let a = 1;\n");
    }

    #[tokio::test]
    async fn missing_file_reports_path() {
        let err = StdInputReader
            .read(&TaskInput::File(PathBuf::from("/nonexistent/snippet.js")))
            .await
            .unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/snippet.js"));
    }
}
