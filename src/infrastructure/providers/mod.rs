//! 완성 엔드포인트 provider 구현.
//! HTTP 호출/오류 표준화는 `api_runner`에 모은다.

mod api_runner;
pub mod openai;

pub use openai::OpenAiGateway;
