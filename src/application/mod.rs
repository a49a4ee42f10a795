//! Application layer
//! 유스케이스와 리뷰 클라이언트를 정의하고 포트(추상 인터페이스)를 통해 인프라를 사용한다.

pub mod config;
pub mod error;
pub mod ports;
pub mod reviewer;
pub mod usecases;
