//! Domain layer
//! 작업 종류/프롬프트/샘플링/응답 후처리 규칙을 외부 의존성 없이 표현한다.

pub mod completion;
pub mod history;
pub mod options;
pub mod prompt;
pub mod sampling;
pub mod task;
