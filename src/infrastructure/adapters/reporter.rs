//! 콘솔 리포터 포트 구현 어댑터.

use std::io::{self, Stderr, Stdout, Write};
use std::sync::Mutex;

use crate::application::ports::Reporter;

/// 콘솔 리포터 어댑터.
/// 결과(section/raw)는 stdout, 진행 상황(kv/status)은 stderr로 나눠 리다이렉트 시 결과만 남긴다.
pub struct ConsoleReporter<O = Stdout, E = Stderr> {
    out: Mutex<O>,
    progress: Mutex<E>,
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::with_writers(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> ConsoleReporter<O, E> {
    pub fn with_writers(out: O, progress: E) -> Self {
        Self {
            out: Mutex::new(out),
            progress: Mutex::new(progress),
        }
    }

    /// 출력 스트림을 돌려받는다(stdout, progress 순).
    pub fn into_writers(self) -> (O, E) {
        let out = self.out.into_inner().unwrap_or_else(|e| e.into_inner());
        let progress = self.progress.into_inner().unwrap_or_else(|e| e.into_inner());
        (out, progress)
    }

    fn write_out(&self, line: &str) {
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{line}");
        }
    }

    fn write_progress(&self, line: &str) {
        if let Ok(mut progress) = self.progress.lock() {
            let _ = writeln!(progress, "{line}");
        }
    }
}

impl<O, E> Reporter for ConsoleReporter<O, E>
where
    O: Write + Send,
    E: Write + Send,
{
    fn section(&self, name: &str) {
        self.write_out("");
        self.write_out(&format!("==================== {name} ===================="));
    }

    fn kv(&self, key: &str, value: &str) {
        self.write_progress(&format!("{key:<12}: {value}"));
    }

    fn status(&self, scope: &str, message: &str) {
        self.write_progress(&format!("[{scope:<12}] {message}"));
    }

    fn raw(&self, line: &str) {
        self.write_out(line);
    }
}
