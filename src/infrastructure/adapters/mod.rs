//! 애플리케이션 포트를 실제 인프라 구현체로 연결하는 어댑터 계층.

mod api_key_resolver;
mod config_repository;
mod diff_source_factory;
mod gateway_factory;
mod input_reader;
mod reporter;

pub use api_key_resolver::EnvApiKeyResolver;
pub use config_repository::JsonConfigRepository;
pub use diff_source_factory::GitDiffSourceFactory;
pub use gateway_factory::OpenAiGatewayFactory;
pub use input_reader::StdInputReader;
pub use reporter::ConsoleReporter;
